use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use blockrep::counters::{ExactDouble, RepeatedBlock};
use blockrep::{IdRange, RangeEngine};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_ranges(rng: &mut StdRng, count: usize, max_hi: i64) -> Vec<IdRange> {
    (0..count)
        .map(|_| {
            let lo = rng.gen_range(1..max_hi);
            let hi = rng.gen_range(lo..=max_hi);
            IdRange::new(lo, hi)
        })
        .collect()
}

fn bench_single_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("closed_form_single_range");
    for exp in [6u32, 12, 18] {
        let range = IdRange::new(1, 10i64.pow(exp) - 1);
        let repeated = RangeEngine::new(RepeatedBlock);
        let double = RangeEngine::new(ExactDouble);
        group.bench_function(format!("repeated_1e{exp}"), |b| {
            b.iter(|| repeated.tally_range(black_box(range)))
        });
        group.bench_function(format!("exact_double_1e{exp}"), |b| {
            b.iter(|| double.tally_range(black_box(range)))
        });
    }
    group.finish();
}

fn bench_range_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("closed_form_range_list");
    for &count in &[10usize, 100, 1_000] {
        group.bench_function(format!("repeated_{count}_ranges"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_ranges(&mut rng, count, 999_999_999_999_999_999)
                },
                |ranges| {
                    let engine = RangeEngine::new(RepeatedBlock);
                    black_box(engine.run(&ranges))
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_range, bench_range_lists);
criterion_main!(benches);
