//! Benchmarks for risk calculations.
//!
//! Run with: cargo bench -p ratecurve-risk

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use ratecurve_core::Date;
use ratecurve_curves::{Curve, CurveBuilder, InterpolationPolicy, RateCurve};
use ratecurve_risk::prelude::*;

fn sofr_curve() -> Curve {
    CurveBuilder::new()
        .valuation_date(Date::from_ymd(2024, 1, 2).unwrap())
        .add_tenor_quote("1M", 5.318)
        .add_tenor_quote("3M", 5.382)
        .add_tenor_quote("6M", 5.452)
        .add_tenor_quote("1Y", 5.445)
        .add_tenor_quote("2Y", 4.990)
        .add_tenor_quote("3Y", 4.650)
        .add_tenor_quote("5Y", 4.352)
        .add_tenor_quote("10Y", 4.201)
        .with_policy(InterpolationPolicy::CubicSpline)
        .build()
        .unwrap()
}

fn bench_dv01(c: &mut Criterion) {
    let curve = sofr_curve();
    c.bench_function("compute_dv01", |b| b.iter(|| compute_dv01(black_box(&curve))));
}

fn bench_swap(c: &mut Criterion) {
    let curve = sofr_curve();
    let swap = SwapDetails::new(10_000_000.0, "7Y", 4.25, Direction::Receive);
    c.bench_function("price_swap", |b| {
        b.iter(|| price_swap(black_box(&curve), black_box(&swap)))
    });
}

fn bench_daily_series(c: &mut Criterion) {
    let curve = sofr_curve();
    let start = curve.valuation_date();
    let end = start.add_days(3649);

    let mut group = c.benchmark_group("daily_forwards");
    group.throughput(Throughput::Elements(3650));
    group.bench_function("ten_years", |b| {
        b.iter(|| {
            get_daily_forward_series(&curve, start, end)
                .and_then(|series| series.collect::<RiskResult<Vec<_>>>())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_dv01, bench_swap, bench_daily_series);
criterion_main!(benches);
