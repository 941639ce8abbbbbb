//! Error types for curve operations.
//!
//! Every failure here means malformed input. None of them is transient, so
//! callers surface them rather than retrying.

use ratecurve_core::CoreError;
use ratecurve_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The curve holds no points.
    #[error("Curve has no points")]
    EmptyCurve,

    /// Two quotes share the same day offset.
    #[error("Duplicate tenor: '{first}' and '{second}' both fall on day {days}")]
    DuplicateTenor {
        /// The shared day offset.
        days: u32,
        /// Tenor label of the first quote.
        first: String,
        /// Tenor label of the second quote.
        second: String,
    },

    /// A spline was requested on fewer than two points, or a segment has
    /// zero width.
    #[error("Degenerate segment: {reason}")]
    DegenerateSegment {
        /// Description of the degenerate input.
        reason: String,
    },

    /// A tenor label could not be parsed.
    #[error("Invalid tenor: '{tenor}'")]
    InvalidTenor {
        /// The label that failed to parse.
        tenor: String,
    },

    /// Interpolation between two points was required but fewer exist.
    #[error("Insufficient data: need at least {required} points, got {got}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        got: usize,
    },

    /// A quote's rate is not a finite number.
    #[error("Invalid quote for tenor '{tenor}': {reason}")]
    InvalidQuote {
        /// Tenor label of the quote.
        tenor: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An edit targeted a tenor the curve does not hold.
    #[error("Tenor not found on curve: '{tenor}'")]
    TenorNotFound {
        /// The missing tenor label.
        tenor: String,
    },

    /// Invalid date input.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl CurveError {
    /// Creates a duplicate tenor error.
    #[must_use]
    pub fn duplicate_tenor(days: u32, first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::DuplicateTenor {
            days,
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates a degenerate segment error.
    #[must_use]
    pub fn degenerate_segment(reason: impl Into<String>) -> Self {
        Self::DegenerateSegment {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, got: usize) -> Self {
        Self::InsufficientData { required, got }
    }

    /// Creates an invalid quote error.
    #[must_use]
    pub fn invalid_quote(tenor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQuote {
            tenor: tenor.into(),
            reason: reason.into(),
        }
    }
}

impl From<CoreError> for CurveError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidTenor { tenor } => Self::InvalidTenor { tenor },
            CoreError::InvalidDate { message } => Self::InvalidDate { message },
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData { required, actual } => Self::degenerate_segment(format!(
                "spline needs at least {required} points, got {actual}"
            )),
            other => Self::degenerate_segment(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_core_error() {
        let err: CurveError = CoreError::invalid_tenor("ABC").into();
        assert_eq!(
            err,
            CurveError::InvalidTenor {
                tenor: "ABC".to_string()
            }
        );
    }

    #[test]
    fn test_from_math_error() {
        let err: CurveError = MathError::insufficient_data(2, 1).into();
        assert!(matches!(err, CurveError::DegenerateSegment { .. }));
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_duplicate_display() {
        let err = CurveError::duplicate_tenor(30, "1M", "4W");
        assert_eq!(
            err.to_string(),
            "Duplicate tenor: '1M' and '4W' both fall on day 30"
        );
    }
}
