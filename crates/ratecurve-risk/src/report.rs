//! Curve points annotated with forwards and DV01.

use ratecurve_curves::{CurvePoint, RateCurve};

use crate::dv01::{compute_dv01_with, Dv01Settings};
use crate::error::RiskResult;
use crate::forward::forward_rates;

/// Returns the curve's points with `forward_rate` and `dv01` filled in.
///
/// # Errors
///
/// Returns `CurveError::EmptyCurve` if the curve has no points.
pub fn curve_report<C: RateCurve + ?Sized>(
    curve: &C,
    settings: &Dv01Settings,
) -> RiskResult<Vec<CurvePoint>> {
    let forwards = forward_rates(curve)?;
    let dv01 = compute_dv01_with(curve, settings)?;

    Ok(curve
        .points()
        .iter()
        .zip(forwards.iter().zip(&dv01))
        .map(|(point, (fwd, risk))| CurvePoint {
            forward_rate: Some(fwd.forward_rate),
            dv01: Some(risk.dv01),
            ..point.clone()
        })
        .collect())
}
