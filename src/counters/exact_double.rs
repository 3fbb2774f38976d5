//! Integers made of one block written exactly twice.
//!
//! A `d`-digit integer qualifies only when `d` is even, and then its block
//! length is fixed at `k = d / 2`. Different digit lengths therefore never
//! share an integer and no inclusion–exclusion is needed: the contribution of
//! each even `d` is a single arithmetic series with `R = 10^k + 1`.

use crate::blocks::{BlockLayout, Tally};
use crate::range::IdRange;
use crate::traits::BlockCounter;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactDouble;

impl BlockCounter for ExactDouble {
    fn name(&self) -> &'static str {
        "exact_double"
    }

    fn tally_digits(&self, range: IdRange, digits: u32) -> Tally {
        if digits % 2 != 0 {
            return Tally::ZERO;
        }
        match BlockLayout::new(digits, digits / 2) {
            Some(layout) => layout.tally_in(range),
            None => Tally::ZERO,
        }
    }
}
