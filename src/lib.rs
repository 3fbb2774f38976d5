//! Closed-form counting of repeated-digit-block integers.
//!
//! An integer is a *repeated-block* integer when its decimal digits are one
//! block written two or more times: `55`, `6464`, `111111`, `898898898`.
//! This crate counts and sums such integers inside an inclusive range
//! `[lo, hi]` of `i64` values without iterating over the range, so ranges
//! spanning up to 10^18 values cost the same as tiny ones.
//!
//! ## Core idea
//! 1. A `d`-digit integer built from an `m`-digit block `h` equals
//!    `h * R` with `R = (10^d - 1) / (10^m - 1)`.
//! 2. For fixed `(d, m)` the blocks landing in `[lo, hi]` are an interval of
//!    `h`, so their count and sum are an arithmetic series.
//! 3. Integers with several decompositions (`111111` has periods 1, 2 and 3)
//!    are counted once by inclusion–exclusion over the divisors of `d`.
//!
//! ## Quick start
//! ```
//! use blockrep::{input::parse_ranges, solve};
//!
//! let ranges = parse_ranges("11-22,95-115,998-1012").unwrap();
//! assert_eq!(solve(false, &ranges), 11 + 22 + 99 + 1010);
//! assert_eq!(solve(true, &ranges), 11 + 22 + 99 + 111 + 999 + 1010);
//! ```
//!
//! ## Counting rules
//! The [`counters`] module provides:
//! - [`ExactDouble`](counters::ExactDouble): one block written exactly twice
//! - [`RepeatedBlock`](counters::RepeatedBlock): one block written two or more times
//!
//! Both plug into [`RangeEngine`] through the [`BlockCounter`] trait.
//!
//! ## Limits
//! Digit lengths above [`utils::MAX_DIGITS`] (18) are not examined. Sums are
//! exact in [`Tally`] (`i128`); the 64-bit entry points wrap.

pub mod blocks;
pub mod builder;
pub mod counters;
pub mod dial;
pub mod engine;
pub mod error;
pub mod input;
pub mod range;
pub mod traits;
pub mod utils;

pub use crate::blocks::Tally;
pub use crate::builder::RangeEngineBuilder;
pub use crate::engine::{solve, Mode, RangeEngine};
pub use crate::error::ParseError;
pub use crate::range::IdRange;
pub use crate::traits::BlockCounter;
