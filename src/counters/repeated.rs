//! Integers made of one block written two or more times.
//!
//! For a digit length `d`, every block length `m` that divides `d` with
//! `d / m >= 2` gives an arithmetic series over `R = (10^d - 1) / (10^m - 1)`.
//! That series counts every `d`-digit integer whose digit string has *some*
//! period dividing `m`, so `111111` shows up for `m = 1`, `2` and `3`.
//!
//! Walking the divisors of `d` in ascending order and subtracting the already
//! final tallies of each proper divisor of `m` leaves the integers whose
//! *minimal* period is exactly `m`. Every repeated integer has a single
//! minimal period, so the exact tallies add up without double counting.

use crate::blocks::{BlockLayout, Tally};
use crate::range::IdRange;
use crate::traits::BlockCounter;
use crate::utils::{divisors, MAX_DIGITS};

const PERIOD_SLOTS: usize = MAX_DIGITS as usize + 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepeatedBlock;

impl RepeatedBlock {
    /// Tallies of the `digits`-digit integers in `range` keyed by minimal
    /// period, in ascending period order.
    ///
    /// Only periods that repeat at least twice appear; periods with no
    /// matches still appear with a zero tally.
    pub fn minimal_period_tallies(&self, range: IdRange, digits: u32) -> Vec<(u32, Tally)> {
        let divs = divisors(digits);
        let mut exact = [Tally::ZERO; PERIOD_SLOTS];
        let mut out = Vec::with_capacity(divs.len());

        for &m in &divs {
            let Some(layout) = BlockLayout::new(digits, m) else {
                continue;
            };
            let mut tally = layout.tally_in(range);
            for &sub in divs.iter().take_while(|&&sub| sub < m) {
                if m % sub == 0 {
                    tally -= exact[sub as usize];
                }
            }
            exact[m as usize] = tally;
            out.push((m, tally));
        }
        out
    }
}

impl BlockCounter for RepeatedBlock {
    fn name(&self) -> &'static str {
        "repeated"
    }

    fn tally_digits(&self, range: IdRange, digits: u32) -> Tally {
        self.minimal_period_tallies(range, digits)
            .into_iter()
            .map(|(_, tally)| tally)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_period(value: i64) -> Option<u32> {
        let s = value.to_string();
        let d = s.len();
        (1..d)
            .filter(|m| d % m == 0)
            .find(|&m| s.as_bytes().chunks(m).all(|c| c == &s.as_bytes()[..m]))
            .map(|m| m as u32)
    }

    #[test]
    fn all_ones_counted_once() {
        let range = IdRange::new(100_000, 111_111);
        let periods = RepeatedBlock.minimal_period_tallies(range, 6);
        assert_eq!(
            periods,
            vec![
                (1, Tally { count: 1, sum: 111_111 }),
                (2, Tally { count: 1, sum: 101_010 }),
                (3, Tally { count: 11, sum: 1_156_155 }),
            ]
        );
        let total = RepeatedBlock.tally_digits(range, 6);
        assert_eq!(total.count, 13);
        assert_eq!(total.sum, 1_368_276);
    }

    #[test]
    fn prime_lengths_only_have_single_digit_blocks() {
        let range = IdRange::new(0, 9_999_999);
        let periods = RepeatedBlock.minimal_period_tallies(range, 7);
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].0, 1);
        assert_eq!(periods[0].1.count, 9);
        assert_eq!(periods[0].1.sum, 1_111_111 * 45);
    }

    #[test]
    fn periods_match_enumeration_for_four_digits() {
        let range = IdRange::new(1_000, 9_999);
        let mut expected = [Tally::ZERO; PERIOD_SLOTS];
        for v in 1_000..=9_999i64 {
            if let Some(m) = minimal_period(v) {
                expected[m as usize] += Tally {
                    count: 1,
                    sum: v as i128,
                };
            }
        }
        for (m, tally) in RepeatedBlock.minimal_period_tallies(range, 4) {
            assert_eq!(tally, expected[m as usize], "m={m}");
        }
    }

    #[test]
    fn short_lengths_are_empty() {
        let range = IdRange::new(0, 9);
        assert!(RepeatedBlock.minimal_period_tallies(range, 1).is_empty());
        assert!(RepeatedBlock.tally_digits(range, 0).is_zero());
        assert!(RepeatedBlock.tally_digits(range, 2).is_zero());
    }

    #[test]
    fn lengths_past_the_table_are_ignored() {
        let range = IdRange::new(0, i64::MAX);
        assert!(RepeatedBlock.minimal_period_tallies(range, 19).is_empty());
        assert!(RepeatedBlock.tally_digits(range, 40).is_zero());
    }
}
