//! Benchmarks for `at` vs bare `slice::get`
//!
//! Run with: `cargo bench --bench at`

use array_at::at;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_lookup");

    for size in [16usize, 1024, 65536] {
        let seq: Vec<u64> = (0..size as u64).collect();

        group.bench_with_input(BenchmarkId::new("at", size), &seq, |b, seq| {
            b.iter(|| {
                let i = black_box(seq.len() as i64 / 2);
                black_box(at(seq, i));
            });
        });

        group.bench_with_input(BenchmarkId::new("slice_get", size), &seq, |b, seq| {
            b.iter(|| {
                let i = black_box(seq.len() / 2);
                black_box(seq.get(i));
            });
        });
    }

    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_lookup");

    for size in [16usize, 1024, 65536] {
        let seq: Vec<u64> = (0..size as u64).collect();

        group.bench_with_input(BenchmarkId::new("at_negative", size), &seq, |b, seq| {
            b.iter(|| {
                black_box(at(seq, black_box(-1i64)));
            });
        });

        group.bench_with_input(BenchmarkId::new("slice_last", size), &seq, |b, seq| {
            b.iter(|| {
                black_box(seq.last());
            });
        });
    }

    group.finish();
}

fn bench_miss_paths(c: &mut Criterion) {
    let seq: Vec<u64> = (0..1024).collect();

    c.bench_function("miss_out_of_range", |b| {
        b.iter(|| {
            black_box(at(&seq, black_box(1_000_000i64)));
        });
    });

    c.bench_function("miss_extreme_negative", |b| {
        b.iter(|| {
            black_box(at(&seq, black_box(i64::MIN)));
        });
    });

    c.bench_function("non_numeric_fallback", |b| {
        b.iter(|| {
            black_box(at(&seq, black_box("notanumber")));
        });
    });
}

criterion_group!(benches, bench_forward, bench_reverse, bench_miss_paths);
criterion_main!(benches);
