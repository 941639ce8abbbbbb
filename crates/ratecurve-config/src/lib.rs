//! Ratecurve Configuration Layer
//!
//! Configuration for the Ratecurve engine: the curve catalogue with its
//! market quotes, DV01 settings and forward analysis settings.
//!
//! # Features
//!
//! - **Curve Catalogue**: USD SOFR (with sample quotes), EUR ESTR, GBP SONIA, JPY TONAR
//! - **Risk Settings**: DV01 bump size and reference notional
//! - **Forward Settings**: Daily forward jump threshold
//! - **File Loading**: TOML or JSON, chosen by extension
//! - **Validation**: Every error in a document is collected, not just the first
//!
//! # Example
//!
//! ```rust
//! use ratecurve_config::{ConfigFormat, EngineConfig, Validate};
//!
//! let config = EngineConfig::parse(
//!     r#"
//!     [[curves]]
//!     name = "USD_SOFR"
//!     quotes = [{ tenor = "1Y", rate = 5.445 }, { tenor = "2Y", rate = 4.99 }]
//!     "#,
//!     ConfigFormat::Toml,
//! )
//! .unwrap();
//!
//! assert!(config.is_valid());
//! let curve = config.curves[0].build().unwrap();
//! assert_eq!(curve.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod curve;
mod engine;
mod error;
mod manager;
mod settings;

pub use curve::CurveConfig;
pub use engine::{ConfigFormat, EngineConfig};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use manager::ConfigManager;
pub use settings::{ForwardConfig, RiskConfig};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::CurveConfig;
    pub use crate::engine::{ConfigFormat, EngineConfig};
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::manager::ConfigManager;
    pub use crate::settings::{ForwardConfig, RiskConfig};
}
