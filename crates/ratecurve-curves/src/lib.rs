//! # Ratecurve Curves
//!
//! Yield curve construction for the Ratecurve engine.
//!
//! This crate provides:
//!
//! - **Point Store**: Sorted, deduplicated quotes with derived discount factors
//! - **Policies**: Linear, log-linear, cubic spline, step forward and hybrid
//!   interpolation
//! - **Curves**: Immutable snapshots; edits and policy switches return new ones
//! - **Handle**: Single-writer, many-reader holder of the live curve
//! - **Profiles**: Spot rate sampling over calendar dates
//!
//! ## Quick Start
//!
//! ```rust
//! use ratecurve_curves::prelude::*;
//!
//! let curve = CurveBuilder::new()
//!     .add_tenor_quote("1Y", 5.445)
//!     .add_tenor_quote("2Y", 4.990)
//!     .add_tenor_quote("5Y", 4.352)
//!     .build()
//!     .unwrap();
//!
//! // Exact grid points return the quoted rate.
//! assert_eq!(curve.rate_at(1825.0).unwrap(), 4.352);
//!
//! let cubic = curve.with_policy(InterpolationPolicy::CubicSpline).unwrap();
//! assert!(cubic.spline_segments().is_some());
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

pub mod builder;
pub mod curve;
pub mod error;
pub mod handle;
pub mod interpolation;
pub mod point;
pub mod policy;
pub mod profile;
pub mod store;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::CurveBuilder;
    pub use crate::curve::Curve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::handle::CurveHandle;
    pub use crate::interpolation::Segment;
    pub use crate::point::{CurvePoint, InstrumentType, MarketQuote};
    pub use crate::policy::InterpolationPolicy;
    pub use crate::profile::{spot_profile, ProfilePoint};
    pub use crate::store::CurvePointStore;
    pub use crate::traits::RateCurve;
}

pub use builder::CurveBuilder;
pub use curve::Curve;
pub use error::{CurveError, CurveResult};
pub use handle::CurveHandle;
pub use point::{CurvePoint, InstrumentType, MarketQuote};
pub use policy::InterpolationPolicy;
pub use store::CurvePointStore;
pub use traits::RateCurve;
