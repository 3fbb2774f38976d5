#![cfg(feature = "heavy")]
use blockrep::counters::RepeatedBlock;
use blockrep::{IdRange, RangeEngine, Tally};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn is_repeated(value: i64) -> bool {
    let s = value.to_string();
    let bytes = s.as_bytes();
    (1..bytes.len())
        .filter(|m| bytes.len() % m == 0)
        .any(|m| bytes.chunks(m).all(|chunk| chunk == &bytes[..m]))
}

#[test]
fn heavy_exhaustive_ten_million() {
    let expected: Tally = (1..=10_000_000i64)
        .filter(|&v| is_repeated(v))
        .map(|v| Tally {
            count: 1,
            sum: v as i128,
        })
        .sum();
    assert_eq!(expected, Tally { count: 1_107, sum: 590_590_845 });
    let got = RangeEngine::new(RepeatedBlock).tally_range(IdRange::new(1, 10_000_000));
    assert_eq!(got, expected);
}

#[test]
fn heavy_random_windows_in_high_lengths() {
    let mut rng = StdRng::seed_from_u64(0xB10C);
    let engine = RangeEngine::new(RepeatedBlock);
    for _ in 0..200 {
        let lo = rng.gen_range(10_000_000i64..9_000_000_000);
        let hi = lo + rng.gen_range(0..200_000);
        let expected: Tally = (lo..=hi)
            .filter(|&v| is_repeated(v))
            .map(|v| Tally {
                count: 1,
                sum: v as i128,
            })
            .sum();
        assert_eq!(engine.tally_range(IdRange::new(lo, hi)), expected, "{lo}-{hi}");
    }
}
