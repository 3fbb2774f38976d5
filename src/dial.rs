//! A circular dial driven by `L<n>` / `R<n>` rotations.
//!
//! The dial has positions `0..size`; turning right moves toward higher
//! positions and wraps from `size - 1` to `0`, turning left the other way.
//! Two questions are asked of a rotation list:
//! - how many rotations *end* with the dial at 0, and
//! - how many single clicks *land* on 0 along the way.

use std::str::FromStr;

use crate::error::{ParseError, Result};

/// Positions on the standard dial.
pub const DIAL_SIZE: u64 = 100;
/// Where the standard dial starts.
pub const DIAL_START: u64 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    pub direction: Direction,
    pub steps: u64,
}

impl FromStr for Rotation {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let mut chars = line.chars();
        let direction = match chars.next() {
            Some('L' | 'l') => Direction::Left,
            Some('R' | 'r') => Direction::Right,
            _ => {
                return Err(ParseError::UnknownDirection {
                    line: line.to_string(),
                })
            }
        };
        let steps = chars
            .as_str()
            .trim()
            .parse::<u64>()
            .map_err(|source| ParseError::InvalidSteps {
                line: line.to_string(),
                source,
            })?;
        Ok(Rotation { direction, steps })
    }
}

fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Parse one rotation per line, failing on the first malformed line.
pub fn parse_rotations(text: &str) -> Result<Vec<Rotation>> {
    lines(text).map(str::parse::<Rotation>).collect()
}

/// Parse one rotation per line, skipping malformed lines.
pub fn parse_rotations_lossy(text: &str) -> Vec<Rotation> {
    lines(text)
        .filter_map(|line| match line.parse() {
            Ok(rotation) => Some(rotation),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "skipping malformed rotation");
                None
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dial {
    size: u64,
    position: u64,
}

impl Default for Dial {
    fn default() -> Self {
        Self::new(DIAL_SIZE, DIAL_START)
    }
}

impl Dial {
    /// # Panics
    /// Panics if `size == 0`.
    pub fn new(size: u64, start: u64) -> Self {
        assert!(size > 0, "dial size must be positive");
        Self {
            size,
            position: start % size,
        }
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    /// Clicks of `rotation` that land on 0, counted from the current position.
    pub fn zero_clicks(&self, rotation: Rotation) -> u64 {
        if rotation.steps == 0 {
            return 0;
        }
        // Clicks until the first landing on 0; a dial already at 0 needs a full lap.
        let first = match rotation.direction {
            Direction::Right => (self.size - self.position) % self.size,
            Direction::Left => self.position,
        };
        let first = if first == 0 { self.size } else { first };
        if rotation.steps < first {
            0
        } else {
            1 + (rotation.steps - first) / self.size
        }
    }

    /// Apply `rotation` and return how many of its clicks landed on 0.
    pub fn rotate(&mut self, rotation: Rotation) -> u64 {
        let hits = self.zero_clicks(rotation);
        let steps = rotation.steps % self.size;
        self.position = match rotation.direction {
            Direction::Right => (self.position + steps) % self.size,
            Direction::Left => (self.position + self.size - steps) % self.size,
        };
        hits
    }
}

/// Number of rotations that leave the dial at 0.
pub fn count_zero_stops(mut dial: Dial, rotations: &[Rotation]) -> usize {
    rotations
        .iter()
        .filter(|&&rotation| {
            dial.rotate(rotation);
            dial.position() == 0
        })
        .count()
}

/// Number of clicks, across all rotations, that land on 0.
pub fn count_zero_clicks(mut dial: Dial, rotations: &[Rotation]) -> u64 {
    rotations.iter().map(|&rotation| dial.rotate(rotation)).sum()
}
