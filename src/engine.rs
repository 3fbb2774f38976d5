//! Range engine: drives a [`BlockCounter`] across digit lengths and ranges.
//!
//! For a single range the engine walks digit lengths `2..=min(digits(hi), ceiling)`
//! and adds up the counter's per-length tallies. For a list of ranges it adds
//! the per-range tallies; overlapping ranges are not deduplicated, so an
//! integer in the overlap is counted once per range.
//!
//! Work is bounded by the digit ceiling and the divisor count of each length,
//! never by the width of a range.

use std::ops::RangeInclusive;

use crate::blocks::Tally;
use crate::counters::{ExactDouble, RepeatedBlock};
use crate::range::IdRange;
use crate::traits::BlockCounter;
use crate::utils::{count_digits, MAX_DIGITS};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Engine for a given counting rule `C`.
///
/// Typical usage:
/// ```
/// use blockrep::{counters::RepeatedBlock, IdRange, RangeEngine};
///
/// let engine = RangeEngine::new(RepeatedBlock);
/// let tally = engine.tally_range(IdRange::new(95, 115));
/// assert_eq!(tally.count, 2); // 99 and 111
/// assert_eq!(tally.sum, 210);
/// ```
pub struct RangeEngine<C: BlockCounter> {
    counter: C,
    max_digits: u32,
}

impl<C: BlockCounter> RangeEngine<C> {
    /// Create an engine that examines every digit length up to [`MAX_DIGITS`].
    pub fn new(counter: C) -> Self {
        Self::with_max_digits(counter, MAX_DIGITS)
    }

    /// Create an engine with an explicit digit ceiling.
    ///
    /// Ceilings above [`MAX_DIGITS`] are clamped to it.
    pub fn with_max_digits(counter: C, max_digits: u32) -> Self {
        Self {
            counter,
            max_digits: max_digits.min(MAX_DIGITS),
        }
    }

    pub fn counter(&self) -> &C {
        &self.counter
    }

    pub fn max_digits(&self) -> u32 {
        self.max_digits
    }

    /// Digit lengths that can hold a qualifying integer of `range`.
    ///
    /// Empty when `range.hi()` has fewer than two digits or the ceiling is
    /// below two.
    pub fn digit_lengths(&self, range: IdRange) -> RangeInclusive<u32> {
        2..=count_digits(range.hi()).min(self.max_digits)
    }

    /// Count and sum the qualifying integers of one range.
    pub fn tally_range(&self, range: IdRange) -> Tally {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "tally_range",
            counter = self.counter.name(),
            lo = range.lo(),
            hi = range.hi()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut total = Tally::ZERO;
        for digits in self.digit_lengths(range) {
            let tally = self.counter.tally_digits(range, digits);
            #[cfg(feature = "tracing")]
            tracing::trace!(digits, count = tally.count, sum = %tally.sum, "digit length");
            total += tally;
        }
        total
    }

    /// Sum of the qualifying integers of one range, truncated to 64 bits.
    pub fn sum_range(&self, range: IdRange) -> i64 {
        self.tally_range(range).sum_i64()
    }
}

#[cfg(not(feature = "parallel"))]
impl<C: BlockCounter> RangeEngine<C> {
    /// Tally every range and add the results (serial execution).
    pub fn run(&self, ranges: &[IdRange]) -> Tally {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "blockrep_run",
            counter = self.counter.name(),
            ranges = ranges.len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let total: Tally = ranges.iter().map(|&range| self.tally_range(range)).sum();

        #[cfg(feature = "tracing")]
        tracing::info!(count = total.count, sum = %total.sum, "run complete");
        total
    }
}

#[cfg(feature = "parallel")]
impl<C: BlockCounter + Sync> RangeEngine<C> {
    /// Tally every range and add the results, one rayon task per range.
    ///
    /// Ranges share no state, so the result equals the serial sum.
    pub fn run(&self, ranges: &[IdRange]) -> Tally {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "blockrep_run",
            counter = self.counter.name(),
            ranges = ranges.len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let total = ranges
            .par_iter()
            .map(|&range| self.tally_range(range))
            .reduce(|| Tally::ZERO, |a, b| a + b);

        #[cfg(feature = "tracing")]
        tracing::info!(count = total.count, sum = %total.sum, "run complete");
        total
    }
}

/// Which counting rule to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// A block written exactly twice.
    ExactDouble,
    /// A block written two or more times.
    Repeated,
}

impl Mode {
    /// `false` selects [`Mode::ExactDouble`], `true` selects [`Mode::Repeated`].
    pub fn from_flag(repeated: bool) -> Self {
        if repeated {
            Mode::Repeated
        } else {
            Mode::ExactDouble
        }
    }

    pub fn counter(self) -> Box<dyn BlockCounter + Send + Sync> {
        match self {
            Mode::ExactDouble => Box::new(ExactDouble),
            Mode::Repeated => Box::new(RepeatedBlock),
        }
    }

    pub fn engine(self) -> RangeEngine<Box<dyn BlockCounter + Send + Sync>> {
        RangeEngine::new(self.counter())
    }
}

/// Sum the qualifying integers across `ranges`, truncated to 64 bits.
///
/// `repeated` selects the rule as in [`Mode::from_flag`].
pub fn solve(repeated: bool, ranges: &[IdRange]) -> i64 {
    Mode::from_flag(repeated).engine().run(ranges).sum_i64()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PerLength;

    impl BlockCounter for PerLength {
        fn name(&self) -> &'static str {
            "per_length"
        }
        fn tally_digits(&self, _range: IdRange, digits: u32) -> Tally {
            Tally {
                count: 1,
                sum: digits as i128,
            }
        }
    }

    #[test]
    fn digit_lengths_follow_upper_bound() {
        let engine = RangeEngine::new(PerLength);
        assert!(engine.digit_lengths(IdRange::new(1, 9)).is_empty());
        assert_eq!(engine.digit_lengths(IdRange::new(1, 10)), 2..=2);
        assert_eq!(engine.digit_lengths(IdRange::new(5, 123_456)), 2..=6);
        assert_eq!(engine.digit_lengths(IdRange::new(0, i64::MAX)), 2..=18);
    }

    #[test]
    fn tally_range_visits_each_length_once() {
        let engine = RangeEngine::new(PerLength);
        let t = engine.tally_range(IdRange::new(0, 99_999));
        assert_eq!(t.count, 4);
        assert_eq!(t.sum, 2 + 3 + 4 + 5);
    }

    #[test]
    fn ceiling_is_clamped() {
        let engine = RangeEngine::with_max_digits(PerLength, 40);
        assert_eq!(engine.max_digits(), MAX_DIGITS);
        let engine = RangeEngine::with_max_digits(PerLength, 3);
        assert_eq!(engine.digit_lengths(IdRange::new(0, 99_999)), 2..=3);
        let engine = RangeEngine::with_max_digits(PerLength, 1);
        assert!(engine.tally_range(IdRange::new(0, 99_999)).is_zero());
    }

    #[test]
    fn run_adds_overlapping_ranges_independently() {
        let engine = RangeEngine::new(ExactDouble);
        let once = engine.tally_range(IdRange::new(10, 99));
        let twice = engine.run(&[IdRange::new(10, 99), IdRange::new(10, 99)]);
        assert_eq!(twice.count, 2 * once.count);
        assert_eq!(twice.sum, 2 * once.sum);
        assert!(engine.run(&[]).is_zero());
    }

    #[test]
    fn mode_flag_selects_counter() {
        assert_eq!(Mode::from_flag(false), Mode::ExactDouble);
        assert_eq!(Mode::from_flag(true), Mode::Repeated);
        assert_eq!(Mode::ExactDouble.counter().name(), "exact_double");
        assert_eq!(Mode::Repeated.counter().name(), "repeated");
    }

    #[test]
    fn solve_on_small_window() {
        let ranges = [IdRange::new(1, 1_000)];
        assert_eq!(solve(false, &ranges), 495);
        assert_eq!(solve(true, &ranges), 5_490);
    }
}
