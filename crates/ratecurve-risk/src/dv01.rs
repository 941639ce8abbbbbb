//! Per-tenor DV01 by bump and reprice.
//!
//! Each quoted point is bumped on its own and a reference portfolio is
//! revalued from the points' own discount factors:
//!
//! ```text
//! PV = Σ N * (1 - DF_i) / t_i
//! ```
//!
//! The bump does not pass through interpolation, so a point's DV01 depends
//! on that point alone. This is a local sensitivity, not a key-rate duration.

use ratecurve_core::conventions::{discount_factor, year_fraction};
use ratecurve_curves::{CurvePoint, CurveResult, RateCurve};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RiskResult;

/// One basis point, in percent.
pub const ONE_BASIS_POINT_PCT: f64 = 0.01;

/// Notional of the reference portfolio.
pub const REFERENCE_NOTIONAL: f64 = 1_000_000.0;

/// Bump size and reference notional for DV01 runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dv01Settings {
    /// Rate bump in percent.
    pub bump_pct: f64,
    /// Notional of the reference portfolio.
    pub reference_notional: f64,
}

impl Default for Dv01Settings {
    fn default() -> Self {
        Self {
            bump_pct: ONE_BASIS_POINT_PCT,
            reference_notional: REFERENCE_NOTIONAL,
        }
    }
}

/// DV01 attributed to one quoted point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenorDv01 {
    /// Tenor label.
    pub tenor: String,
    /// Day offset of the point.
    pub days: u32,
    /// Sensitivity per basis point, never negative.
    pub dv01: f64,
}

/// Value of the reference portfolio over `points`.
///
/// A point at day zero contributes its limit `N * rate / 100`.
#[must_use]
pub fn reference_pv(points: &[CurvePoint], notional: f64) -> f64 {
    points
        .iter()
        .map(|p| point_contribution(p.rate, p.days, notional))
        .sum()
}

/// DV01 of every quoted point with default settings.
pub fn compute_dv01<C: RateCurve + ?Sized>(curve: &C) -> RiskResult<Vec<TenorDv01>> {
    compute_dv01_with(curve, &Dv01Settings::default())
}

/// DV01 of every quoted point, in store order.
///
/// An empty curve yields an empty list.
pub fn compute_dv01_with<C: RateCurve + ?Sized>(
    curve: &C,
    settings: &Dv01Settings,
) -> RiskResult<Vec<TenorDv01>> {
    let points = curve.points();
    let base = reference_pv(points, settings.reference_notional);

    let result = (0..points.len())
        .map(|i| {
            let bumped = bump_point(points, i, settings.bump_pct)?;
            let bumped_pv = reference_pv(&bumped, settings.reference_notional);
            Ok(TenorDv01 {
                tenor: points[i].tenor.clone(),
                days: points[i].days,
                dv01: (bumped_pv - base).abs() / settings.bump_pct,
            })
        })
        .collect::<CurveResult<Vec<_>>>()?;

    debug!(points = result.len(), bump_pct = settings.bump_pct, "computed DV01");
    Ok(result)
}

/// Copy of `points` with point `index` rebuilt at `rate + bump`.
fn bump_point(points: &[CurvePoint], index: usize, bump: f64) -> CurveResult<Vec<CurvePoint>> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == index {
                CurvePoint::new(p.tenor.clone(), p.rate + bump, p.days)
            } else {
                Ok(p.clone())
            }
        })
        .collect()
}

/// Reference portfolio value carried by one point.
#[must_use]
pub fn point_contribution(rate_pct: f64, days: u32, notional: f64) -> f64 {
    if days == 0 {
        return notional * rate_pct / 100.0;
    }
    notional * (1.0 - discount_factor(rate_pct, days)) / year_fraction(f64::from(days))
}
