//! The rate query interface shared by curves and risk calculations.

use std::sync::Arc;

use ratecurve_core::conventions::discount_factor_at;
use ratecurve_core::Date;

use crate::error::CurveResult;
use crate::point::CurvePoint;

/// A curve that answers rate queries by day offset.
///
/// Risk and pricing code is written against this trait so it works equally
/// on an owned [`Curve`](crate::Curve) or a shared `Arc` snapshot.
///
/// # Required Methods
///
/// - [`rate_at`](RateCurve::rate_at): Interpolated rate in percent
/// - [`points`](RateCurve::points): The quoted points, ascending by day
/// - [`valuation_date`](RateCurve::valuation_date): Date day offsets count from
pub trait RateCurve: Send + Sync {
    /// Returns the rate in percent at a day offset from the valuation date.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::EmptyCurve` if the curve has no points.
    fn rate_at(&self, days: f64) -> CurveResult<f64>;

    /// Returns the quoted points in ascending day order.
    fn points(&self) -> &[CurvePoint];

    /// Returns the valuation date.
    fn valuation_date(&self) -> Date;

    /// Discount factor at a day offset, from the interpolated rate.
    fn discount_factor_at(&self, days: f64) -> CurveResult<f64> {
        let rate = self.rate_at(days)?;
        Ok(discount_factor_at(rate, days))
    }

    /// Rate on a calendar date.
    ///
    /// Dates before the valuation date clamp to the first point.
    fn rate_on(&self, date: Date) -> CurveResult<f64> {
        self.rate_at(self.valuation_date().days_between(&date) as f64)
    }
}

impl<T: RateCurve + ?Sized> RateCurve for Arc<T> {
    fn rate_at(&self, days: f64) -> CurveResult<f64> {
        (**self).rate_at(days)
    }

    fn points(&self) -> &[CurvePoint] {
        (**self).points()
    }

    fn valuation_date(&self) -> Date {
        (**self).valuation_date()
    }
}

impl<T: RateCurve + ?Sized> RateCurve for &T {
    fn rate_at(&self, days: f64) -> CurveResult<f64> {
        (**self).rate_at(days)
    }

    fn points(&self) -> &[CurvePoint] {
        (**self).points()
    }

    fn valuation_date(&self) -> Date {
        (**self).valuation_date()
    }
}
