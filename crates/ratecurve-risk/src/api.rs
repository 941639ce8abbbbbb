//! Function surface used by hosts of the engine.
//!
//! Each call is a pure query on a curve snapshot, apart from the two
//! constructors which return new snapshots.

use ratecurve_core::Date;
use ratecurve_curves::{
    Curve, CurveBuilder, CurveResult, InterpolationPolicy, MarketQuote, RateCurve,
};

use crate::dv01::TenorDv01;
use crate::error::RiskResult;
use crate::forward::{DailyForwardSeries, TenorForward};
use crate::swap::{RiskMetrics, SwapDetails};

/// Builds a log-linear curve valued today from raw quotes.
pub fn build_curve(quotes: impl IntoIterator<Item = MarketQuote>) -> CurveResult<Curve> {
    CurveBuilder::new().add_quotes(quotes).build()
}

/// Returns a snapshot of `curve` under `policy`.
pub fn set_policy(curve: &Curve, policy: InterpolationPolicy) -> CurveResult<Curve> {
    curve.with_policy(policy)
}

/// Rate in percent at a day offset.
pub fn get_rate(curve: &Curve, days: f64) -> CurveResult<f64> {
    curve.rate_at(days)
}

/// Forwards between consecutive quoted points.
pub fn get_forward_rates(curve: &Curve) -> RiskResult<Vec<TenorForward>> {
    crate::forward::forward_rates(curve)
}

/// One-day forwards for each date in `[start, end]`.
pub fn get_daily_forward_series(
    curve: &Curve,
    start: Date,
    end: Date,
) -> RiskResult<DailyForwardSeries> {
    DailyForwardSeries::new(curve.clone(), start, end)
}

/// DV01 of each quoted point.
pub fn compute_dv01(curve: &Curve) -> RiskResult<Vec<TenorDv01>> {
    crate::dv01::compute_dv01(curve)
}

/// Prices a swap against the curve.
pub fn price_swap(curve: &Curve, swap: &SwapDetails) -> RiskResult<RiskMetrics> {
    crate::swap::price_swap(curve, swap)
}
