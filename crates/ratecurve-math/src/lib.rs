//! # Ratecurve Math
//!
//! Numerical utilities for the Ratecurve yield curve engine.
//!
//! This crate provides:
//!
//! - **Linear Algebra**: Tridiagonal system solver (Thomas algorithm)
//! - **Splines**: Natural cubic spline coefficient construction
//!
//! Both are plain functions of their inputs; nothing is cached between calls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod linear_algebra;
pub mod spline;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::solve_tridiagonal;
    pub use crate::spline::{NaturalCubicSpline, SplineSegment};
}

pub use error::{MathError, MathResult};
pub use spline::{NaturalCubicSpline, SplineSegment};
