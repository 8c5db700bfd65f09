//! Benchmark for the run-length family.
//!
//! Compares `encode_modified` (built on `pack`) against the single-pass
//! `encode_direct`, and `compress` against `Vec::dedup`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lambars_lists::sequence::{compress, decode_modified, encode_direct, encode_modified};
use std::hint::black_box;

/// Builds a sequence with runs of varying length over a small alphabet.
fn runny_input(size: usize) -> Vec<u8> {
    (0..size).map(|index| ((index / (1 + index % 7)) % 5) as u8).collect()
}

// =============================================================================
// encode Benchmark
// =============================================================================

fn benchmark_encode(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("encode");

    for size in [100, 1000, 10000] {
        let input = runny_input(size);

        group.bench_with_input(
            BenchmarkId::new("encode_modified", size),
            &input,
            |bencher, input| {
                bencher.iter(|| black_box(encode_modified(black_box(input))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("encode_direct", size),
            &input,
            |bencher, input| {
                bencher.iter(|| black_box(encode_direct(black_box(input))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// decode Benchmark
// =============================================================================

fn benchmark_decode(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("decode_modified");

    for size in [100, 1000, 10000] {
        let encoded = encode_direct(&runny_input(size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |bencher, encoded| {
            bencher.iter(|| black_box(decode_modified(black_box(encoded))));
        });
    }

    group.finish();
}

// =============================================================================
// compress Benchmark
// =============================================================================

fn benchmark_compress(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compress");

    for size in [100, 1000, 10000] {
        let input = runny_input(size);

        group.bench_with_input(BenchmarkId::new("compress", size), &input, |bencher, input| {
            bencher.iter(|| black_box(compress(black_box(input))));
        });

        // Vec::dedup on a fresh copy
        group.bench_with_input(BenchmarkId::new("Vec::dedup", size), &input, |bencher, input| {
            bencher.iter(|| {
                let mut copy = black_box(input).clone();
                copy.dedup();
                black_box(copy)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_encode, benchmark_decode, benchmark_compress);
criterion_main!(benches);
