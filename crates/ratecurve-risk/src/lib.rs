//! # ratecurve-risk
//!
//! Rate risk analytics on top of `ratecurve-curves`.
//!
//! This crate provides:
//!
//! - **Forwards**: Tenor-to-tenor forwards, a lazy daily forward series and
//!   jump detection
//! - **DV01**: Per-tenor bump-and-reprice sensitivity
//! - **Convexity**: A maturity-squared heuristic
//! - **Swaps**: Single fixed-for-floating valuation with scaled risk
//! - **Reports**: Curve points annotated with forwards and DV01
//!
//! ## Example
//!
//! ```rust
//! use ratecurve_risk::prelude::*;
//! use ratecurve_curves::MarketQuote;
//!
//! let curve = build_curve([
//!     MarketQuote::from_tenor("1Y", 5.445),
//!     MarketQuote::from_tenor("5Y", 4.352),
//! ])
//! .unwrap();
//!
//! let swap = SwapDetails::new(1_000_000.0, "5Y", 4.5, Direction::Pay);
//! let metrics = price_swap(&curve, &swap).unwrap();
//! assert!(metrics.dv01 >= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]

pub mod api;
pub mod convexity;
pub mod dv01;
mod error;
pub mod forward;
pub mod report;
pub mod swap;

pub use api::{
    build_curve, compute_dv01, get_daily_forward_series, get_forward_rates, get_rate,
    price_swap, set_policy,
};
pub use error::{RiskError, RiskResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::api::*;
    pub use crate::convexity::convexity_estimate;
    pub use crate::dv01::{compute_dv01_with, Dv01Settings, TenorDv01};
    pub use crate::forward::{
        detect_jumps, forward_rates, pairwise_forward, DailyForward, DailyForwardSeries,
        ForwardJump, TenorForward, DEFAULT_JUMP_THRESHOLD_PCT,
    };
    pub use crate::report::curve_report;
    pub use crate::swap::{value_swap, Direction, RiskMetrics, SwapDetails, SwapValuation};
    pub use crate::{RiskError, RiskResult};
}
