//! Convexity estimate for swap risk summaries.
//!
//! ## Formula
//!
//! ```text
//! C = N * T² * 0.01
//! ```
//!
//! This is a scale heuristic in the maturity, not the second derivative of
//! value with respect to rate. It should not be fed into a
//! duration-convexity price approximation.

/// Scale applied to `N * T²`.
pub const CONVEXITY_SCALE: f64 = 0.01;

/// Heuristic convexity for `notional` held for `years`.
#[must_use]
pub fn convexity_estimate(notional: f64, years: f64) -> f64 {
    notional * years * years * CONVEXITY_SCALE
}
