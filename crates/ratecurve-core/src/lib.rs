//! # Ratecurve Core
//!
//! Core types shared by the Ratecurve yield curve and rate risk engine.
//!
//! This crate provides:
//!
//! - **Date**: A calendar date newtype used to anchor curves to a valuation date
//! - **Tenors**: Parsing of market tenor labels ("1W", "6M", "5Y") into day offsets
//! - **Conventions**: The Actual/365 approximation and continuous discounting
//!
//! ## Example
//!
//! ```rust
//! use ratecurve_core::prelude::*;
//!
//! assert_eq!(tenor_to_days("6M").unwrap(), 180);
//!
//! let df = discount_factor(5.0, 365);
//! assert!((df - (-0.05f64).exp()).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]

pub mod conventions;
pub mod date;
pub mod error;
pub mod tenor;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::conventions::{
        discount_factor, discount_factor_at, rate_from_discount_factor, year_fraction,
        DAYS_PER_YEAR,
    };
    pub use crate::date::Date;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::tenor::{parse_tenor, tenor_to_days, TenorUnit};
}

pub use date::Date;
pub use error::{CoreError, CoreResult};
pub use tenor::tenor_to_days;
