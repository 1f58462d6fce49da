//! Benchmarks for the stable-match engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- one_to_one
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stable_match::{Market, MatchingEngine, RandomMarket, RankTable};

// ============================================================================
// HELPER FUNCTIONS - Deterministic market generation
// ============================================================================

/// Generate a seeded market for benchmarking
fn make_market(m: usize, n: usize, capacities: bool, seed: u64) -> Market {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    RandomMarket::new(m, n)
        .with_capacities(capacities)
        .generate(&mut rng)
}

// ============================================================================
// BENCHMARK: Rank table construction
// ============================================================================

fn bench_rank_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_table");

    for size in [100, 1_000] {
        let market = make_market(size, size, false, 42);
        group.throughput(Throughput::Elements((size * (size + 1)) as u64));
        group.bench_with_input(BenchmarkId::new("invert", size), &market, |b, market| {
            b.iter(|| black_box(RankTable::from_prefs(market.respondent_prefs())))
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: One-to-one
// ============================================================================

fn bench_one_to_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_to_one");
    group.measurement_time(Duration::from_secs(10));

    for size in [100, 500, 2_000] {
        let market = make_market(size, size, false, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("agents", size), &market, |b, market| {
            let mut engine = MatchingEngine::new();
            b.iter(|| black_box(engine.run(market)))
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Many-to-one
// ============================================================================
// Contested seats go through the linear eviction scan

fn bench_many_to_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_to_one");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for (students, colleges) in [(1_000, 50), (10_000, 200)] {
        let market = make_market(students, colleges, true, 7);
        group.throughput(Throughput::Elements(students as u64));
        group.bench_with_input(
            BenchmarkId::new("students", students),
            &market,
            |b, market| {
                let mut engine = MatchingEngine::new();
                b.iter(|| black_box(engine.run(market)))
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Validation
// ============================================================================

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    let market = make_market(1_000, 1_000, false, 3);
    let proposer_rows = market.proposer_prefs().to_rows();
    let respondent_rows = market.respondent_prefs().to_rows();

    group.bench_function("market_new_1k", |b| {
        b.iter_batched(
            || (proposer_rows.clone(), respondent_rows.clone()),
            |(props, resps)| black_box(Market::new(&props, &resps)),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_rank_table,
    bench_one_to_one,
    bench_many_to_one,
    bench_validation
);

criterion_main!(benches);
