//! Error types for the core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while parsing or constructing core types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A tenor label has no leading integer.
    #[error("Invalid tenor: '{tenor}' has no leading day/week/month/year count")]
    InvalidTenor {
        /// The label that failed to parse.
        tenor: String,
    },

    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl CoreError {
    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(tenor: impl Into<String>) -> Self {
        Self::InvalidTenor {
            tenor: tenor.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_tenor("ABC");
        assert!(err.to_string().contains("'ABC'"));

        let err = CoreError::invalid_date("2025-02-30");
        assert_eq!(err.to_string(), "Invalid date: 2025-02-30");
    }
}
