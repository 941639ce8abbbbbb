//! Immutable curve snapshots.

use std::sync::Arc;

use ratecurve_core::Date;
use ratecurve_math::{NaturalCubicSpline, SplineSegment};
use tracing::debug;

use crate::error::{CurveError, CurveResult};
use crate::interpolation::{self, Segment};
use crate::point::CurvePoint;
use crate::policy::InterpolationPolicy;
use crate::store::CurvePointStore;
use crate::traits::RateCurve;

/// A point store paired with an interpolation policy.
///
/// A `Curve` never changes after construction. Switching policy or editing
/// a quote returns a new snapshot; the point store and spline coefficients
/// are shared behind `Arc`s so cloning is cheap.
///
/// # Example
///
/// ```rust
/// use ratecurve_curves::prelude::*;
///
/// let curve = CurveBuilder::new()
///     .add_quote("1Y", 5.445, 365)
///     .add_quote("2Y", 4.990, 730)
///     .with_policy(InterpolationPolicy::Linear)
///     .build()
///     .unwrap();
///
/// let rate = curve.rate_at(547.0).unwrap();
/// assert!((rate - 5.218).abs() < 0.001);
/// ```
#[derive(Debug, Clone)]
pub struct Curve {
    store: Arc<CurvePointStore>,
    policy: InterpolationPolicy,
    spline: Option<Arc<[SplineSegment]>>,
    valuation_date: Date,
}

impl Curve {
    /// Creates a curve over `store`.
    ///
    /// Spline coefficients are built when `policy` is cubic.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::DegenerateSegment` if the policy is cubic and the
    /// store has fewer than two points.
    pub fn new(
        store: CurvePointStore,
        policy: InterpolationPolicy,
        valuation_date: Date,
    ) -> CurveResult<Self> {
        Self::from_shared(Arc::new(store), policy, valuation_date)
    }

    fn from_shared(
        store: Arc<CurvePointStore>,
        policy: InterpolationPolicy,
        valuation_date: Date,
    ) -> CurveResult<Self> {
        let spline = if policy.needs_spline() {
            Some(build_spline(&store)?)
        } else {
            None
        };

        Ok(Self {
            store,
            policy,
            spline,
            valuation_date,
        })
    }

    /// Returns a snapshot with a different interpolation policy.
    ///
    /// The point store is shared; spline coefficients are rebuilt from
    /// scratch when switching to cubic.
    pub fn with_policy(&self, policy: InterpolationPolicy) -> CurveResult<Self> {
        debug!(from = %self.policy, to = %policy, "switching interpolation policy");
        Self::from_shared(Arc::clone(&self.store), policy, self.valuation_date)
    }

    /// Returns a snapshot with one quoted rate edited.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::TenorNotFound` if the tenor is not on the curve.
    pub fn with_rate(&self, tenor: &str, rate: f64) -> CurveResult<Self> {
        let store = self.store.with_rate(tenor, rate)?;
        debug!(tenor, rate, "rebuilt curve with edited quote");
        Self::new(store, self.policy, self.valuation_date)
    }

    /// Returns a snapshot anchored to another valuation date.
    #[must_use]
    pub fn with_valuation_date(&self, valuation_date: Date) -> Self {
        Self {
            valuation_date,
            ..self.clone()
        }
    }

    /// Returns a snapshot over a different point store, keeping the policy
    /// and valuation date.
    pub fn with_store(&self, store: CurvePointStore) -> CurveResult<Self> {
        Self::new(store, self.policy, self.valuation_date)
    }

    /// The active interpolation policy.
    #[must_use]
    pub fn policy(&self) -> InterpolationPolicy {
        self.policy
    }

    /// The underlying point store.
    #[must_use]
    pub fn store(&self) -> &CurvePointStore {
        &self.store
    }

    /// Spline coefficients, present only under the cubic policy.
    #[must_use]
    pub fn spline_segments(&self) -> Option<&[SplineSegment]> {
        self.spline.as_deref()
    }

    /// Number of quoted points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the pair of points bracketing `days`.
    ///
    /// Queries outside the interior clamp to the first or last segment.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InsufficientData` with fewer than two points.
    pub fn segment_at(&self, days: f64) -> CurveResult<Segment<'_>> {
        let points = self.store.points();
        if points.len() < 2 {
            return Err(CurveError::insufficient_data(2, points.len()));
        }

        let last_index = points.len() - 2;
        Ok(interpolation::locate(points, days).unwrap_or_else(|| {
            let index = if days < f64::from(points[0].days) {
                0
            } else {
                last_index
            };
            Segment {
                index,
                left: &points[index],
                right: &points[index + 1],
            }
        }))
    }
}

impl RateCurve for Curve {
    fn rate_at(&self, days: f64) -> CurveResult<f64> {
        interpolation::interpolate(
            self.store.points(),
            self.spline.as_deref(),
            self.policy,
            days,
        )
    }

    fn points(&self) -> &[CurvePoint] {
        self.store.points()
    }

    fn valuation_date(&self) -> Date {
        self.valuation_date
    }
}

fn build_spline(store: &CurvePointStore) -> CurveResult<Arc<[SplineSegment]>> {
    let spline = NaturalCubicSpline::new(&store.days(), &store.rates())?;
    debug!(segments = spline.segments().len(), "built spline coefficients");
    Ok(spline.into_segments().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn store() -> CurvePointStore {
        CurvePointStore::new([
            ("1M", 5.318, 30),
            ("3M", 5.382, 90),
            ("6M", 5.452, 180),
            ("1Y", 5.445, 365),
            ("2Y", 4.990, 730),
            ("5Y", 4.352, 1825),
        ])
        .unwrap()
    }

    fn valuation() -> Date {
        Date::from_ymd(2024, 1, 2).unwrap()
    }

    #[test]
    fn test_cubic_reproduces_knots() {
        let curve = Curve::new(store(), InterpolationPolicy::CubicSpline, valuation()).unwrap();
        assert_eq!(curve.spline_segments().unwrap().len(), 5);

        for p in curve.points() {
            let rate = curve.rate_at(f64::from(p.days)).unwrap();
            assert_relative_eq!(rate, p.rate, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_policy_switch_shares_store() {
        let curve = Curve::new(store(), InterpolationPolicy::LogLinear, valuation()).unwrap();
        assert!(curve.spline_segments().is_none());

        let cubic = curve.with_policy(InterpolationPolicy::CubicSpline).unwrap();
        assert!(cubic.spline_segments().is_some());
        assert!(Arc::ptr_eq(&curve.store, &cubic.store));
        assert_eq!(curve.policy(), InterpolationPolicy::LogLinear);

        let back = cubic.with_policy(InterpolationPolicy::Linear).unwrap();
        assert!(back.spline_segments().is_none());
    }

    #[test]
    fn test_cubic_on_single_point_is_degenerate() {
        let single = CurvePointStore::new([("1Y", 5.445, 365)]).unwrap();
        let err = Curve::new(single, InterpolationPolicy::CubicSpline, valuation()).unwrap_err();
        assert!(matches!(err, CurveError::DegenerateSegment { .. }));
    }

    #[test]
    fn test_with_rate_leaves_original_untouched() {
        let curve = Curve::new(store(), InterpolationPolicy::CubicSpline, valuation()).unwrap();
        let before = curve.rate_at(500.0).unwrap();

        let edited = curve.with_rate("1Y", 5.60).unwrap();
        assert_relative_eq!(edited.rate_at(365.0).unwrap(), 5.60, epsilon = 1e-10);
        assert_eq!(curve.rate_at(500.0).unwrap(), before);
        assert_ne!(edited.rate_at(500.0).unwrap(), before);
    }

    #[test]
    fn test_segment_at() {
        let curve = Curve::new(store(), InterpolationPolicy::Linear, valuation()).unwrap();

        let seg = curve.segment_at(200.0).unwrap();
        assert_eq!((seg.left.tenor.as_str(), seg.right.tenor.as_str()), ("6M", "1Y"));

        assert_eq!(curve.segment_at(1.0).unwrap().index, 0);
        assert_eq!(curve.segment_at(5000.0).unwrap().index, 4);

        let single = CurvePointStore::new([("1Y", 5.445, 365)]).unwrap();
        let single = Curve::new(single, InterpolationPolicy::Linear, valuation()).unwrap();
        assert_eq!(
            single.segment_at(100.0).unwrap_err(),
            CurveError::insufficient_data(2, 1)
        );
    }

    #[test]
    fn test_discount_factor_at() {
        let curve = Curve::new(store(), InterpolationPolicy::LogLinear, valuation()).unwrap();
        assert_relative_eq!(
            curve.discount_factor_at(730.0).unwrap(),
            curve.store()[4].discount_factor,
            epsilon = 1e-15
        );
        assert_relative_eq!(curve.discount_factor_at(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_rate_on_date() {
        let curve = Curve::new(store(), InterpolationPolicy::Linear, valuation()).unwrap();
        let date = valuation().add_days(365);
        assert_relative_eq!(curve.rate_on(date).unwrap(), 5.445);
    }

    #[test]
    fn test_empty_curve_query() {
        let empty = CurvePointStore::new(Vec::<(String, f64, u32)>::new()).unwrap();
        let curve = Curve::new(empty, InterpolationPolicy::LogLinear, valuation()).unwrap();
        assert!(curve.is_empty());
        assert_eq!(curve.rate_at(10.0), Err(CurveError::EmptyCurve));
    }
}
