//! # Gray Codec Benchmarks
//!
//! Measures encoding, decoding and bit-diff on single 64-bit words.
//! Decoding loops once per significant bit, so wide values cost more.
//!
//! Run: `cargo bench --bench codec_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gray_core::prelude::*;

/// Benchmark encoding
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    group.bench_function("to_gray", |b| {
        b.iter(|| black_box(to_gray(black_box(0xDEAD_BEEF))))
    });

    group.bench_function("typed_to_gray", |b| {
        let value = BinaryValue::new(0xDEAD_BEEF);
        b.iter(|| black_box(black_box(value).to_gray()))
    });

    group.finish();
}

/// Benchmark decoding by input width
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for bits in [4u32, 12, 32, 64] {
        let code = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
        group.bench_with_input(BenchmarkId::new("from_gray", bits), &code, |b, &g| {
            b.iter(|| black_box(from_gray(black_box(g))))
        });
    }

    group.finish();
}

/// Benchmark bit difference checks
fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");

    let prev = GrayValue::new(0b0110_0000);
    let curr = GrayValue::new(0b0111_0000);

    group.bench_function("bit_diff", |b| {
        b.iter(|| black_box(bit_diff(black_box(prev), black_box(curr))))
    });

    group.bench_function("is_single_bit_transition", |b| {
        b.iter(|| black_box(is_single_bit_transition(black_box(prev), black_box(curr))))
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_diff);
criterion_main!(benches);
