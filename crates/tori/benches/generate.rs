//! Benchmarks for shape generation.
//!
//! Run with: cargo bench -p tori
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p tori -- --save-baseline main
//! 2. After changes: cargo bench -p tori -- --baseline main

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tori::{
    elliptic_torus, log_spiral, CapFill, EllipticTorusParams, LogSpiralParams, SpacingPolicy,
};

fn bench_torus_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("elliptic_torus");

    for steps in [48, 128, 512] {
        let params = EllipticTorusParams {
            ring_steps: steps,
            cross_steps: steps / 4,
            twist_count: 3,
            ..Default::default()
        };
        group.throughput(Throughput::Elements((steps * steps / 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &params, |b, params| {
            b.iter(|| elliptic_torus(black_box(params)));
        });
    }

    group.finish();
}

fn bench_torus_spacing(c: &mut Criterion) {
    let mut group = c.benchmark_group("torus_spacing");

    for &spacing in SpacingPolicy::ALL {
        let params = EllipticTorusParams {
            ring_steps: 128,
            cross_steps: 32,
            ring_spacing: spacing,
            cross_spacing: spacing,
            ..Default::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{spacing:?}")),
            &params,
            |b, params| b.iter(|| elliptic_torus(black_box(params))),
        );
    }

    group.finish();
}

fn bench_log_spiral(c: &mut Criterion) {
    let params = LogSpiralParams {
        turns: 64,
        resolution: 16,
        cross_segments: 32,
        cap_fill: CapFill::Fan,
        ..Default::default()
    };
    c.bench_function("log_spiral_64_turns", |b| {
        b.iter(|| log_spiral(black_box(&params)));
    });
}

criterion_group!(
    benches,
    bench_torus_resolution,
    bench_torus_spacing,
    bench_log_spiral
);
criterion_main!(benches);
