//! Benchmarks for the fixed-length reduction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lazyx::prelude::*;

/// Generates a deterministic array of the requested length.
fn ramp<const C: usize>() -> [f32; C] {
    let mut out = [0.0f32; C];
    for (i, v) in out.iter_mut().enumerate() {
        *v = (i % 7) as f32 * 0.5;
    }
    out
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_multiply_add");

    let a3 = ramp::<3>();
    let b3 = ramp::<3>();
    group.bench_function("unrolled/3", |b| {
        b.iter(|| black_box(reduce_multiply_add(black_box(&a3), black_box(&b3))));
    });

    let a16 = ramp::<16>();
    let b16 = ramp::<16>();
    group.bench_function("unrolled/16", |b| {
        b.iter(|| black_box(reduce_multiply_add(black_box(&a16), black_box(&b16))));
    });
    group.bench_function("iterator/16", |b| {
        b.iter(|| {
            let (a, v) = (black_box(&a16), black_box(&b16));
            black_box(a.iter().zip(v).map(|(x, y)| x * y).sum::<f32>())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reduce);
criterion_main!(benches);
