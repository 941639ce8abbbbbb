//! Actual/365 year fractions and continuous discounting.
//!
//! Rates throughout the engine are quoted in percent (5.445 means 5.445%)
//! and compounded continuously over an Actual/365 year fraction.

/// Day basis of the Actual/365 approximation.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Year fraction for a day offset.
#[must_use]
pub fn year_fraction(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// Discount factor for a percentage rate held over `days`.
///
/// ```text
/// DF = exp(-rate/100 * days/365)
/// ```
#[must_use]
pub fn discount_factor(rate_pct: f64, days: u32) -> f64 {
    discount_factor_at(rate_pct, f64::from(days))
}

/// Discount factor at a fractional day offset.
#[must_use]
pub fn discount_factor_at(rate_pct: f64, days: f64) -> f64 {
    (-rate_pct / 100.0 * year_fraction(days)).exp()
}

/// Converts a discount factor back to a percentage rate.
///
/// Undefined at `days == 0`; callers only use it strictly inside a segment.
#[must_use]
pub fn rate_from_discount_factor(df: f64, days: f64) -> f64 {
    -df.ln() / year_fraction(days) * 100.0
}
