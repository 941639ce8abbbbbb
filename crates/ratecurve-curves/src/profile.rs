//! Spot rate and discount factor profiles over calendar dates.

use ratecurve_core::Date;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::traits::RateCurve;

/// Days sampled daily before switching to weekly steps.
pub const DAILY_SAMPLING_DAYS: i64 = 365;

/// Step used beyond the daily window.
pub const WEEKLY_STEP_DAYS: i64 = 7;

/// One sample of the spot rate profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Calendar date of the sample.
    pub date: Date,
    /// Day offset from the valuation date.
    pub days: i64,
    /// Interpolated rate in percent.
    pub rate: f64,
    /// Discount factor at the sample.
    pub discount_factor: f64,
}

/// Samples the curve from its valuation date to `end`.
///
/// Daily for the first year, weekly afterwards. The valuation date itself is
/// the first sample; `end` is included only if it falls on the grid.
///
/// # Errors
///
/// - `CurveError::InvalidDate` if `end` is before the valuation date
/// - `CurveError::EmptyCurve` if the curve has no points
pub fn spot_profile<C: RateCurve + ?Sized>(curve: &C, end: Date) -> CurveResult<Vec<ProfilePoint>> {
    let start = curve.valuation_date();
    let horizon = start.days_between(&end);
    if horizon < 0 {
        return Err(CurveError::InvalidDate {
            message: format!("profile end {end} is before valuation date {start}"),
        });
    }

    let mut samples = Vec::new();
    let mut days = 0;
    while days <= horizon {
        let t = days as f64;
        samples.push(ProfilePoint {
            date: start.add_days(days),
            days,
            rate: curve.rate_at(t)?,
            discount_factor: curve.discount_factor_at(t)?,
        });
        days += if days < DAILY_SAMPLING_DAYS {
            1
        } else {
            WEEKLY_STEP_DAYS
        };
    }

    Ok(samples)
}
