//! # Gray Sequence Benchmarks
//!
//! Measures full-sequence generation, table building and disk rendering at
//! the widths the explorer serves.
//!
//! Run: `cargo bench --bench sequence_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gray_core::prelude::*;

/// Benchmark sequence generation
fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    for bits in [4u32, 8, 12, 16] {
        group.bench_with_input(BenchmarkId::new("gray_sequence", bits), &bits, |b, &n| {
            b.iter(|| black_box(gray_sequence(n)))
        });
    }

    group.finish();
}

/// Benchmark the annotated table
fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");

    for bits in [4u32, 8, 12] {
        group.bench_with_input(BenchmarkId::new("gray_table", bits), &bits, |b, &n| {
            b.iter(|| black_box(gray_table(n)))
        });
    }

    group.finish();
}

/// Benchmark encoder disk rendering
fn bench_disk(c: &mut Criterion) {
    let mut group = c.benchmark_group("disk");

    for bits in [5u32, 8, 12] {
        let disk = EncoderDisk::new(bits).unwrap();
        group.bench_with_input(BenchmarkId::new("to_svg", bits), &disk, |b, d| {
            b.iter(|| black_box(d.to_svg()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sequence, bench_table, bench_disk);
criterion_main!(benches);
