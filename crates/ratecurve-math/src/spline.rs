//! Natural cubic spline coefficient construction.
//!
//! Builds one cubic polynomial per consecutive knot pair such that the
//! piecewise curve passes through every knot, has continuous first and
//! second derivatives, and has zero second derivative at both ends.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{MathError, MathResult};
use crate::linear_algebra::solve_tridiagonal;

/// Coefficients of one spline segment.
///
/// Evaluated at the local offset `x = t - t_i` from the segment's left knot:
///
/// ```text
/// s(x) = a + b*x + c*x^2 + d*x^3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplineSegment {
    /// Constant term (the left knot's value).
    pub a: f64,
    /// Linear term.
    pub b: f64,
    /// Quadratic term.
    pub c: f64,
    /// Cubic term.
    pub d: f64,
}

impl SplineSegment {
    /// Evaluates the segment at a local offset from its left knot.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a + x * (self.b + x * (self.c + x * self.d))
    }

    /// First derivative at a local offset.
    #[must_use]
    pub fn derivative(&self, x: f64) -> f64 {
        self.b + x * (2.0 * self.c + 3.0 * x * self.d)
    }

    /// Second derivative at a local offset.
    #[must_use]
    pub fn second_derivative(&self, x: f64) -> f64 {
        2.0 * self.c + 6.0 * self.d * x
    }
}

/// Natural cubic spline through a set of knots.
///
/// # Example
///
/// ```rust
/// use ratecurve_math::spline::NaturalCubicSpline;
///
/// let days = [30.0, 90.0, 180.0, 365.0];
/// let rates = [5.318, 5.382, 5.452, 5.445];
///
/// let spline = NaturalCubicSpline::new(&days, &rates).unwrap();
/// assert_eq!(spline.segments().len(), 3);
/// assert!((spline.evaluate(90.0) - 5.382).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturalCubicSpline {
    knots: Vec<f64>,
    segments: Vec<SplineSegment>,
}

impl NaturalCubicSpline {
    /// Builds the spline through `(xs[i], ys[i])`.
    ///
    /// With exactly two knots the result is a single straight segment.
    ///
    /// # Errors
    ///
    /// - `MathError::InsufficientData` with fewer than 2 knots
    /// - `MathError::InvalidInput` if lengths differ or a value is not finite
    /// - `MathError::DegenerateSegment` if knots are not strictly increasing
    pub fn new(xs: &[f64], ys: &[f64]) -> MathResult<Self> {
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.iter().chain(ys).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("spline knots must be finite"));
        }

        let h = knot_spacing(xs)?;
        let segments = if xs.len() == 2 {
            vec![SplineSegment {
                a: ys[0],
                b: (ys[1] - ys[0]) / h[0],
                c: 0.0,
                d: 0.0,
            }]
        } else {
            natural_segments(ys, &h)?
        };

        trace!(knots = xs.len(), "built natural cubic spline");

        Ok(Self {
            knots: xs.to_vec(),
            segments,
        })
    }

    /// Returns the knots the spline was built on.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Returns the segment coefficients, one per knot pair.
    #[must_use]
    pub fn segments(&self) -> &[SplineSegment] {
        &self.segments
    }

    /// Consumes the spline, returning its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<SplineSegment> {
        self.segments
    }

    /// Evaluates the spline at `x`.
    ///
    /// Outside the knot range the end segments are extended; curve-level
    /// callers clamp before reaching here.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let i = self.find_segment(x);
        self.segments[i].evaluate(x - self.knots[i])
    }

    /// Finds the index i such that knots[i] <= x < knots[i+1].
    fn find_segment(&self, x: f64) -> usize {
        let last = self.segments.len() - 1;
        match self
            .knots
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i.min(last),
            Err(i) => i.saturating_sub(1).min(last),
        }
    }
}

/// Widths of consecutive knot intervals; every width must be positive.
fn knot_spacing(xs: &[f64]) -> MathResult<Vec<f64>> {
    xs.windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let width = pair[1] - pair[0];
            if width > 0.0 {
                Ok(width)
            } else {
                Err(MathError::DegenerateSegment {
                    index,
                    left: pair[0],
                    right: pair[1],
                })
            }
        })
        .collect()
}

/// Solves for the natural spline coefficients given at least three knots.
fn natural_segments(ys: &[f64], h: &[f64]) -> MathResult<Vec<SplineSegment>> {
    let n = ys.len();
    let interior = n - 2;

    // Right-hand side from second differences at interior knots.
    let alpha: Vec<f64> = (1..n - 1)
        .map(|i| 3.0 / h[i] * (ys[i + 1] - ys[i]) - 3.0 / h[i - 1] * (ys[i] - ys[i - 1]))
        .collect();

    let diag: Vec<f64> = (1..n - 1).map(|i| 2.0 * (h[i - 1] + h[i])).collect();
    let off_diag: Vec<f64> = h[1..interior].to_vec();

    let interior_c = solve_tridiagonal(&off_diag, &diag, &off_diag, &alpha)?;

    // Natural boundary: c vanishes at both ends.
    let mut c = Vec::with_capacity(n);
    c.push(0.0);
    c.extend(interior_c);
    c.push(0.0);

    Ok((0..n - 1)
        .map(|i| SplineSegment {
            a: ys[i],
            b: (ys[i + 1] - ys[i]) / h[i] - h[i] * (c[i + 1] + 2.0 * c[i]) / 3.0,
            c: c[i],
            d: (c[i + 1] - c[i]) / (3.0 * h[i]),
        })
        .collect())
}
