//! Criterion benchmarks for the kernel corpus.
//!
//! Benchmarks cover:
//! - The two sieve variants across limits (naive is the O(n²) reference and
//!   is kept to small limits)
//! - N-Queens board sizes up to the corpus default
//! - The straight-line fixture kernels at the corpus default
//!
//! These are dev-side measurements of this implementation only; the
//! cross-language comparison harness lives outside the corpus.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kernels::prelude::*;
use std::hint::black_box;

// ============================================================================
// Sieve Benchmarks
// ============================================================================

fn bench_sieves(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");

    for limit in [100usize, 1000, 5000] {
        group.throughput(Throughput::Elements(limit as u64));
        group.bench_with_input(BenchmarkId::new("naive", limit), &limit, |b, &limit| {
            b.iter(|| count_primes_naive(black_box(limit)));
        });
        group.bench_with_input(BenchmarkId::new("table", limit), &limit, |b, &limit| {
            b.iter(|| count_primes_table(black_box(limit)));
        });
    }

    // The table sieve scales far beyond the naive kernel's practical range.
    for limit in [100_000usize, 1_000_000] {
        group.throughput(Throughput::Elements(limit as u64));
        group.bench_with_input(BenchmarkId::new("table", limit), &limit, |b, &limit| {
            b.iter(|| count_primes_table(black_box(limit)));
        });
    }

    group.finish();
}

// ============================================================================
// N-Queens Benchmarks
// ============================================================================

fn bench_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("nqueens");

    for n in [6usize, 8, 10] {
        group.bench_with_input(BenchmarkId::new("count", n), &n, |b, &n| {
            b.iter(|| count_solutions(black_box(n)));
        });
    }

    group.finish();
}

// ============================================================================
// Fixture Benchmarks
// ============================================================================

fn bench_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixtures");
    group.throughput(Throughput::Elements(10_000));

    for kernel in [
        Kernel::Pipeline,
        Kernel::ListBuild,
        Kernel::MethodDispatch,
        Kernel::TagDispatch,
        Kernel::RecordFilter,
    ] {
        group.bench_function(kernel.name(), |b| {
            b.iter(|| kernel.run(black_box(10_000)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sieves, bench_queens, bench_fixtures);
criterion_main!(benches);
