//! Block-level data structures and the arithmetic-series range summer.
//!
//! A repeated-block integer of `d` digits built from an `m`-digit block `h` is
//! exactly `h * R` with `R = (10^d - 1) / (10^m - 1)`. Given a range and `R`,
//! the qualifying blocks form a contiguous interval of `h`, so their count and
//! sum follow from the endpoints alone.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::range::IdRange;
use crate::utils::{ceil_div, floor_div, pow10, MAX_DIGITS};

/// Count and sum of the integers matched by a counter.
///
/// The sum is kept in `i128`: a single digit length can already contribute
/// more than `i64::MAX` when the range is wide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub count: u64,
    pub sum: i128,
}

impl Tally {
    pub const ZERO: Tally = Tally { count: 0, sum: 0 };

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.count == 0
    }

    /// The sum truncated to 64 bits (two's-complement wrap).
    #[inline]
    pub fn sum_i64(&self) -> i64 {
        self.sum as i64
    }

    /// The sum as `i64`, or `None` if it does not fit.
    #[inline]
    pub fn checked_sum(&self) -> Option<i64> {
        i64::try_from(self.sum).ok()
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Tally) -> Tally {
        Tally {
            count: self.count + rhs.count,
            sum: self.sum + rhs.sum,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Tally) {
        *self = *self + rhs;
    }
}

impl Sub for Tally {
    type Output = Tally;

    fn sub(self, rhs: Tally) -> Tally {
        Tally {
            count: self.count - rhs.count,
            sum: self.sum - rhs.sum,
        }
    }
}

impl SubAssign for Tally {
    fn sub_assign(&mut self, rhs: Tally) {
        *self = *self - rhs;
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Tally {
        iter.fold(Tally::ZERO, Add::add)
    }
}

/// Inclusive interval of block values `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockDomain {
    pub min: i64,
    pub max: i64,
}

impl BlockDomain {
    /// Number of block values in the domain.
    #[inline]
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.max.abs_diff(self.min) + 1
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Restrict the domain to blocks `h` with `range.lo <= h * factor <= range.hi`.
    ///
    /// `factor` must be positive. The lower end rounds up and the upper end
    /// rounds down so no block outside the range survives.
    pub fn clamp_to(&self, range: IdRange, factor: i64) -> BlockDomain {
        BlockDomain {
            min: self.min.max(ceil_div(range.lo(), factor)),
            max: self.max.min(floor_div(range.hi(), factor)),
        }
    }
}

/// One way to split a `digits`-long integer into `digits / block_len`
/// copies of a `block_len`-digit block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockLayout {
    digits: u32,
    block_len: u32,
}

impl BlockLayout {
    /// Returns `None` unless `block_len` divides `digits`, the block repeats at
    /// least twice, and `digits` is within the power-of-ten table.
    pub fn new(digits: u32, block_len: u32) -> Option<Self> {
        if block_len == 0 || digits > MAX_DIGITS || digits % block_len != 0 {
            return None;
        }
        if digits / block_len < 2 {
            return None;
        }
        Some(Self { digits, block_len })
    }

    #[inline]
    pub fn digits(&self) -> u32 {
        self.digits
    }

    #[inline]
    pub fn block_len(&self) -> u32 {
        self.block_len
    }

    #[inline]
    pub fn repeats(&self) -> u32 {
        self.digits / self.block_len
    }

    /// `1 + 10^m + 10^(2m) + ... + 10^((r-1)m)`, or `0` if a power of ten
    /// falls outside the table.
    pub fn repeat_factor(&self) -> i64 {
        let full = pow10(self.digits);
        let base = pow10(self.block_len);
        if full == 0 || base == 0 {
            return 0;
        }
        (full - 1) / (base - 1)
    }

    /// Block values without a leading zero: `[10^(m-1), 10^m - 1]`.
    pub fn domain(&self) -> BlockDomain {
        let base = pow10(self.block_len);
        BlockDomain {
            min: base / 10,
            max: base - 1,
        }
    }

    /// The integer formed by repeating `block`, if it fits in `i64`.
    pub fn assemble(&self, block: i64) -> Option<i64> {
        block.checked_mul(self.repeat_factor())
    }

    /// Tally every integer with this layout that falls inside `range`.
    pub fn tally_in(&self, range: IdRange) -> Tally {
        series_tally(range, self.repeat_factor(), self.domain())
    }
}

/// Count and sum `factor * h` over blocks `h` in `domain` whose product lands
/// in `range`, without enumerating `h`.
///
/// A non-positive `factor` contributes nothing.
pub fn series_tally(range: IdRange, factor: i64, domain: BlockDomain) -> Tally {
    if factor <= 0 {
        return Tally::ZERO;
    }
    let hits = domain.clamp_to(range, factor);
    if hits.is_empty() {
        return Tally::ZERO;
    }

    let count = hits.len();
    let block_sum = (hits.min as i128 + hits.max as i128) * count as i128 / 2;
    Tally {
        count,
        sum: factor as i128 * block_sum,
    }
}
