//! Inclusive integer ranges handed to the counters.

use std::fmt;

/// An inclusive range `[lo, hi]` with `lo <= hi`.
///
/// Construction swaps reversed bounds, so `IdRange::new(99, 10)` and
/// `IdRange::new(10, 99)` are the same range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IdRange {
    lo: i64,
    hi: i64,
}

impl IdRange {
    pub fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    #[inline]
    pub fn lo(&self) -> i64 {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> i64 {
        self.hi
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Number of integers in the range, saturating at `u64::MAX`.
    pub fn len(&self) -> u64 {
        self.hi.abs_diff(self.lo).saturating_add(1)
    }

    /// Always false; a normalized range holds at least one integer.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<(i64, i64)> for IdRange {
    fn from((a, b): (i64, i64)) -> Self {
        Self::new(a, b)
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::IdRange;

    #[test]
    fn reversed_bounds_are_swapped() {
        let r = IdRange::new(99, 10);
        assert_eq!((r.lo(), r.hi()), (10, 99));
        assert_eq!(r, IdRange::new(10, 99));
        assert_eq!(r, IdRange::from((99, 10)));
    }

    #[test]
    fn contains_is_inclusive() {
        let r = IdRange::new(5, 7);
        assert!(r.contains(5));
        assert!(r.contains(7));
        assert!(!r.contains(4));
        assert!(!r.contains(8));
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
    }

    #[test]
    fn single_point_and_display() {
        let r = IdRange::new(42, 42);
        assert_eq!(r.len(), 1);
        assert_eq!(r.to_string(), "42-42");
    }

    #[test]
    fn full_width_length_does_not_overflow() {
        let r = IdRange::new(i64::MIN, i64::MAX - 1);
        assert_eq!(r.len(), u64::MAX);
    }
}
