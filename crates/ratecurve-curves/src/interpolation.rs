//! Rate lookup between quoted points.
//!
//! Queries at or beyond the first or last point return that point's rate
//! unchanged. Inside the curve the bracketing segment is the first pair
//! whose right point lies strictly after the query, so a query that lands
//! exactly on an interior knot reads from the segment starting there.

use ratecurve_core::conventions::{discount_factor_at, rate_from_discount_factor};
use ratecurve_math::SplineSegment;

use crate::error::{CurveError, CurveResult};
use crate::point::CurvePoint;
use crate::policy::{InterpolationPolicy, HYBRID_CUTOFF_DAYS};

/// A pair of adjacent points bracketing a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a> {
    /// Index of the left point.
    pub index: usize,
    /// Left point, at or before the query.
    pub left: &'a CurvePoint,
    /// Right point, strictly after the query.
    pub right: &'a CurvePoint,
}

impl Segment<'_> {
    /// Width of the segment in days.
    #[must_use]
    pub fn width(&self) -> f64 {
        f64::from(self.right.days) - f64::from(self.left.days)
    }

    /// Position of `days` within the segment, in `[0, 1)` for bracketed queries.
    #[must_use]
    pub fn fraction(&self, days: f64) -> f64 {
        (days - f64::from(self.left.days)) / self.width()
    }
}

/// Finds the segment whose left point is at or before `days` and whose right
/// point is strictly after it.
///
/// Returns `None` when `days` lies before the first point or at or after the
/// last one.
#[must_use]
pub fn locate(points: &[CurvePoint], days: f64) -> Option<Segment<'_>> {
    points
        .windows(2)
        .enumerate()
        .find(|(_, pair)| f64::from(pair[1].days) > days)
        .filter(|(_, pair)| f64::from(pair[0].days) <= days)
        .map(|(index, pair)| Segment {
            index,
            left: &pair[0],
            right: &pair[1],
        })
}

/// Reads the rate at `days` under `policy`.
///
/// `spline` holds one segment per point pair when the policy is cubic; a
/// missing segment falls back to linear for that segment alone.
///
/// # Errors
///
/// Returns `CurveError::EmptyCurve` if `points` is empty.
pub fn interpolate(
    points: &[CurvePoint],
    spline: Option<&[SplineSegment]>,
    policy: InterpolationPolicy,
    days: f64,
) -> CurveResult<f64> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(CurveError::EmptyCurve),
    };

    if days <= f64::from(first.days) {
        return Ok(first.rate);
    }
    if days >= f64::from(last.days) {
        return Ok(last.rate);
    }

    // Clamping above handles every query outside the open interior.
    let Some(segment) = locate(points, days) else {
        return Ok(last.rate);
    };

    let rate = match policy {
        InterpolationPolicy::Linear => linear(&segment, days),
        InterpolationPolicy::LogLinear => log_linear(&segment, days),
        InterpolationPolicy::CubicSpline => spline
            .and_then(|segments| segments.get(segment.index))
            .map_or_else(
                || linear(&segment, days),
                |s| s.evaluate(days - f64::from(segment.left.days)),
            ),
        InterpolationPolicy::StepForward => segment.left.rate,
        InterpolationPolicy::Hybrid => {
            if days < HYBRID_CUTOFF_DAYS {
                segment.left.rate
            } else {
                log_linear(&segment, days)
            }
        }
    };

    Ok(rate)
}

fn linear(segment: &Segment<'_>, days: f64) -> f64 {
    let t = segment.fraction(days);
    segment.left.rate + t * (segment.right.rate - segment.left.rate)
}

fn log_linear(segment: &Segment<'_>, days: f64) -> f64 {
    let t = segment.fraction(days);
    let df1 = segment.left.discount_factor;
    let df2 = segment.right.discount_factor;
    let df = df1 * (df2 / df1).powf(t);
    rate_from_discount_factor(df, days)
}

/// Discount factor implied by the rate at `days`.
pub fn discount_factor(
    points: &[CurvePoint],
    spline: Option<&[SplineSegment]>,
    policy: InterpolationPolicy,
    days: f64,
) -> CurveResult<f64> {
    let rate = interpolate(points, spline, policy, days)?;
    Ok(discount_factor_at(rate, days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points(data: &[(&str, f64, u32)]) -> Vec<CurvePoint> {
        data.iter()
            .map(|(t, r, d)| CurvePoint::new(*t, *r, *d).unwrap())
            .collect()
    }

    fn two_points() -> Vec<CurvePoint> {
        points(&[("1Y", 5.445, 365), ("2Y", 4.990, 730)])
    }

    #[test]
    fn test_linear_scenario() {
        let rate = interpolate(&two_points(), None, InterpolationPolicy::Linear, 547.0).unwrap();
        assert_relative_eq!(rate, 5.445 + (182.0 / 365.0) * (4.990 - 5.445), epsilon = 1e-12);
        assert!((rate - 5.218).abs() < 0.001);
    }

    #[test]
    fn test_log_linear_closed_form() {
        let t = 182.0 / 365.0;
        let df1 = (-0.05445f64).exp();
        let df2 = (-0.04990f64 * 2.0).exp();
        let df = df1 * (df2 / df1).powf(t);
        let expected = -df.ln() / (547.0 / 365.0) * 100.0;

        let rate = interpolate(&two_points(), None, InterpolationPolicy::LogLinear, 547.0).unwrap();
        assert_relative_eq!(rate, expected, epsilon = 1e-12);

        let linear = interpolate(&two_points(), None, InterpolationPolicy::Linear, 547.0).unwrap();
        assert!((rate - linear).abs() > 1e-6);
    }

    #[test]
    fn test_flat_extrapolation() {
        let pts = two_points();
        for policy in InterpolationPolicy::ALL {
            assert_eq!(interpolate(&pts, None, policy, 0.0).unwrap(), 5.445);
            assert_eq!(interpolate(&pts, None, policy, 365.0).unwrap(), 5.445);
            assert_eq!(interpolate(&pts, None, policy, 730.0).unwrap(), 4.990);
            assert_eq!(interpolate(&pts, None, policy, 10_000.0).unwrap(), 4.990);
        }
    }

    #[test]
    fn test_step_forward_holds_left_rate() {
        let pts = points(&[("1M", 5.318, 30), ("3M", 5.382, 90), ("6M", 5.452, 180)]);
        for days in [30.0, 45.5, 89.0, 89.999] {
            let rate = interpolate(&pts, None, InterpolationPolicy::StepForward, days).unwrap();
            assert_eq!(rate, 5.318);
        }
        // Exactly on the interior knot the next segment applies.
        let rate = interpolate(&pts, None, InterpolationPolicy::StepForward, 90.0).unwrap();
        assert_eq!(rate, 5.382);
    }

    #[test]
    fn test_hybrid_switches_at_three_months() {
        let pts = points(&[("1M", 5.318, 30), ("6M", 5.452, 180)]);

        let short = interpolate(&pts, None, InterpolationPolicy::Hybrid, 60.0).unwrap();
        assert_eq!(short, 5.318);

        let long = interpolate(&pts, None, InterpolationPolicy::Hybrid, 120.0).unwrap();
        let log_linear = interpolate(&pts, None, InterpolationPolicy::LogLinear, 120.0).unwrap();
        assert_eq!(long, log_linear);
    }

    #[test]
    fn test_cubic_without_coefficients_falls_back_to_linear() {
        let pts = two_points();
        let cubic = interpolate(&pts, Some(&[]), InterpolationPolicy::CubicSpline, 547.0).unwrap();
        let linear = interpolate(&pts, None, InterpolationPolicy::Linear, 547.0).unwrap();
        assert_eq!(cubic, linear);
    }

    #[test]
    fn test_empty_curve() {
        assert_eq!(
            interpolate(&[], None, InterpolationPolicy::Linear, 10.0),
            Err(CurveError::EmptyCurve)
        );
    }

    #[test]
    fn test_single_point_clamps() {
        let pts = points(&[("1Y", 5.445, 365)]);
        assert_eq!(interpolate(&pts, None, InterpolationPolicy::LogLinear, 10.0).unwrap(), 5.445);
        assert_eq!(interpolate(&pts, None, InterpolationPolicy::LogLinear, 900.0).unwrap(), 5.445);
    }

    #[test]
    fn test_locate() {
        let pts = points(&[("1M", 5.318, 30), ("3M", 5.382, 90), ("6M", 5.452, 180)]);
        assert!(locate(&pts, 10.0).is_none());
        assert_eq!(locate(&pts, 30.0).unwrap().index, 0);
        assert_eq!(locate(&pts, 90.0).unwrap().index, 1);
        assert_eq!(locate(&pts, 179.5).unwrap().index, 1);
        assert!(locate(&pts, 180.0).is_none());
    }

    #[test]
    fn test_discount_factor_uses_interpolated_rate() {
        let pts = two_points();
        let df = discount_factor(&pts, None, InterpolationPolicy::Linear, 547.0).unwrap();
        let rate = interpolate(&pts, None, InterpolationPolicy::Linear, 547.0).unwrap();
        assert_relative_eq!(df, (-rate / 100.0 * 547.0 / 365.0).exp(), epsilon = 1e-15);
    }
}
