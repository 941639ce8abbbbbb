//! Error types for risk calculations.

use ratecurve_core::{CoreError, Date};
use ratecurve_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// Curve error from the curves crate.
    #[error("curve error: {0}")]
    Curve(#[from] CurveError),

    /// Swap terms rejected before pricing.
    #[error("invalid swap: {reason}")]
    InvalidSwap {
        /// Why the swap was rejected.
        reason: String,
    },

    /// Start date after end date.
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// Range start.
        start: Date,
        /// Range end.
        end: Date,
    },
}

impl RiskError {
    /// Creates an invalid swap error.
    #[must_use]
    pub fn invalid_swap(reason: impl Into<String>) -> Self {
        Self::InvalidSwap {
            reason: reason.into(),
        }
    }
}

impl From<CoreError> for RiskError {
    fn from(err: CoreError) -> Self {
        Self::Curve(err.into())
    }
}
