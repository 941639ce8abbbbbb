//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Malformed inline quote.
    #[error("Invalid quote '{0}'. Use TENOR:RATE or TENOR:RATE:DAYS, e.g. 1Y:5.445.")]
    InvalidQuote(String),

    /// Invalid notional.
    #[error("Invalid notional: {0}. Must be positive.")]
    InvalidNotional(f64),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
