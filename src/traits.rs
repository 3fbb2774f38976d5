//! The seam between the engine and the counting rules.
//!
//! A counting rule decides which repeated-block integers qualify. The engine
//! owns everything else: range normalization, the digit-length loop and its
//! ceiling, and aggregation across ranges. To add a rule, implement
//! [`BlockCounter`] and hand it to [`RangeEngine`](crate::engine::RangeEngine).

use crate::blocks::Tally;
use crate::range::IdRange;

/// A rule for which repeated-block integers to count.
pub trait BlockCounter {
    /// Short identifier used in logs and probe reports.
    fn name(&self) -> &'static str;

    /// Tally the qualifying integers in `range` that have exactly `digits`
    /// decimal digits.
    ///
    /// Requirements:
    /// - Each qualifying integer is counted once, however many block
    ///   decompositions it admits.
    /// - Digit lengths the rule cannot represent (below 2, or above
    ///   [`MAX_DIGITS`](crate::utils::MAX_DIGITS)) yield [`Tally::ZERO`].
    /// - Must not iterate over the integers of `range`.
    fn tally_digits(&self, range: IdRange, digits: u32) -> Tally;
}

impl<C: BlockCounter + ?Sized> BlockCounter for &C {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn tally_digits(&self, range: IdRange, digits: u32) -> Tally {
        (**self).tally_digits(range, digits)
    }
}

impl<C: BlockCounter + ?Sized> BlockCounter for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn tally_digits(&self, range: IdRange, digits: u32) -> Tally {
        (**self).tally_digits(range, digits)
    }
}
