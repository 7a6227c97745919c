//! Criterion benchmarks for the bisearch components.
//!
//! Benchmarks cover:
//! - Answer-domain bisection (integer square root across magnitudes)
//! - Implicit-table rank queries (growing dimensions)
//! - Piece-size optimization (growing length lists)
//! - Reorder-span scans (growing sequences, sorted and shuffled)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use std::hint::black_box;

use bisearch::prelude::*;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate uniformly random priorities.
fn generate_priorities(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(-1_000..1_000)).collect()
}

/// Generate uniformly random positive lengths.
fn generate_lengths(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(1..10_000)).collect()
}

// ============================================================================
// Bisection Benchmarks
// ============================================================================

fn bench_int_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("int_sqrt");

    for exponent in [16u32, 32, 48, 63] {
        let x = 1u64 << exponent;
        group.bench_with_input(BenchmarkId::from_parameter(exponent), &x, |b, &x| {
            b.iter(|| int_sqrt(black_box(x)))
        });
    }

    group.finish();
}

fn bench_kth_smallest(c: &mut Criterion) {
    let mut group = c.benchmark_group("kth_smallest");

    for dim in [100u32, 1_000, 10_000] {
        let table = MultiplicationTable::new(dim, dim).expect("valid dimensions");
        let median = table.size() / 2;

        group.throughput(Throughput::Elements(u64::from(dim)));
        group.bench_with_input(BenchmarkId::from_parameter(dim), &median, |b, &k| {
            b.iter(|| table.kth_smallest(black_box(k)).expect("valid rank"))
        });
    }

    group.finish();
}

fn bench_max_piece_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_piece_size");

    for size in [100usize, 1_000, 10_000] {
        let optimizer =
            PieceSizeOptimizer::new(generate_lengths(size, 42)).expect("positive lengths");
        let friends = size as u64 * 2;

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &friends, |b, &friends| {
            b.iter(|| optimizer.max_piece_size(black_box(friends)))
        });
    }

    group.finish();
}

// ============================================================================
// Scan Benchmarks
// ============================================================================

fn bench_disorder_span(c: &mut Criterion) {
    let mut group = c.benchmark_group("disorder_span");

    for size in [1_000usize, 10_000, 100_000] {
        let shuffled = generate_priorities(size, 7);
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("shuffled", size),
            &shuffled,
            |b, values| b.iter(|| disorder_span(black_box(values))),
        );
        group.bench_with_input(BenchmarkId::new("sorted", size), &sorted, |b, values| {
            b.iter(|| disorder_span(black_box(values)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_int_sqrt,
    bench_kth_smallest,
    bench_max_piece_size,
    bench_disorder_span
);
criterion_main!(benches);
