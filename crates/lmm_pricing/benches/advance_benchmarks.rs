//! Criterion benchmarks for the curve advance engine.
//!
//! Measures single-step advance cost and par coupon pricing across curve
//! sizes to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lmm_core::Curve;
use lmm_models::{LmmParams, TwoFactorLmm};
use lmm_pricing::advance::{advance, advance_futures};
use lmm_pricing::par::par_coupon;
use lmm_pricing::rng::SimRng;

/// Generate a quarterly flat curve with `n` knots.
fn generate_curve(n: usize) -> Curve<f64> {
    let knots: Vec<f64> = (1..=n).map(|i| i as f64 * 0.25).collect();
    Curve::flat(0.05, 0.2, knots).unwrap()
}

/// Benchmark the futures advance and the forward-curve composition.
fn bench_advance(c: &mut Criterion) {
    let model = TwoFactorLmm::new(LmmParams::new(0.1).unwrap());
    let mut group = c.benchmark_group("curve_advance");

    for size in [10, 100, 1000] {
        let curve = generate_curve(size);

        group.bench_with_input(
            BenchmarkId::new("advance_futures", size),
            &curve,
            |b, curve| {
                let mut rng = SimRng::from_seed(42);
                b.iter_batched(
                    || curve.clone(),
                    |mut curve| {
                        advance_futures(black_box(&mut curve), &model, 0.125, &mut rng).unwrap()
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(BenchmarkId::new("advance", size), &curve, |b, curve| {
            let mut rng = SimRng::from_seed(42);
            b.iter_batched(
                || curve.clone(),
                |mut curve| advance(black_box(&mut curve), &model, 0.125, &mut rng).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark par coupon pricing.
fn bench_par_coupon(c: &mut Criterion) {
    let mut group = c.benchmark_group("par_coupon");

    for size in [10, 100, 1000] {
        let curve = generate_curve(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &curve, |b, curve| {
            b.iter(|| par_coupon(black_box(curve)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark curve construction and validation.
fn bench_curve_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_construction");

    for size in [10, 100, 1000] {
        let knots: Vec<f64> = (1..=size).map(|i| i as f64 * 0.25).collect();
        let rates = vec![0.05; size];
        let vols = vec![0.2; size];

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(knots, rates, vols),
            |b, (knots, rates, vols)| {
                b.iter(|| {
                    Curve::new(
                        black_box(knots.clone()),
                        black_box(rates.clone()),
                        black_box(vols.clone()),
                    )
                    .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_advance, bench_par_coupon, bench_curve_construction);
criterion_main!(benches);
