#![cfg(feature = "parallel")]

use blockrep::counters::{ExactDouble, RepeatedBlock};
use blockrep::{BlockCounter, IdRange, RangeEngine, Tally};
use proptest::prelude::*;

fn serial<C: BlockCounter>(engine: &RangeEngine<C>, ranges: &[IdRange]) -> Tally {
    ranges.iter().map(|&r| engine.tally_range(r)).sum()
}

proptest! {
    #[test]
    fn parallel_run_matches_serial_sum(
        bounds in prop::collection::vec((0i64..1_000_000_000_000, 0i64..1_000_000_000_000), 0usize..64)
    ) {
        let ranges: Vec<IdRange> = bounds.into_iter().map(IdRange::from).collect();

        let repeated = RangeEngine::new(RepeatedBlock);
        prop_assert_eq!(repeated.run(&ranges), serial(&repeated, &ranges));

        let double = RangeEngine::new(ExactDouble);
        prop_assert_eq!(double.run(&ranges), serial(&double, &ranges));
    }
}

#[test]
fn many_small_ranges() {
    let ranges: Vec<IdRange> = (0..10_000i64)
        .map(|i| IdRange::new(i * 1_000, i * 1_000 + 999))
        .collect();
    let engine = RangeEngine::new(RepeatedBlock);
    let split = engine.run(&ranges);
    let whole = engine.tally_range(IdRange::new(0, 9_999_999));
    assert_eq!(split, whole);
}
