//! Forward rates implied by the curve.
//!
//! All forwards use the same pairwise formula on continuously compounded
//! spot rates:
//!
//! ```text
//! F(t1, t2) = (r2 * t2 - r1 * t1) / (t2 - t1)
//! ```
//!
//! with rates in percent and times as Act/365 year fractions.

use std::iter::FusedIterator;

use ratecurve_core::conventions::year_fraction;
use ratecurve_core::Date;
use ratecurve_curves::{Curve, CurveError, RateCurve};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RiskError, RiskResult};

/// Default daily-forward move flagged as a jump, in percentage points.
pub const DEFAULT_JUMP_THRESHOLD_PCT: f64 = 0.10;

/// Forward rate between two day offsets given their spot rates in percent.
#[must_use]
pub fn pairwise_forward(rate1_pct: f64, days1: f64, rate2_pct: f64, days2: f64) -> f64 {
    let t1 = year_fraction(days1);
    let t2 = year_fraction(days2);
    ((rate2_pct / 100.0 * t2 - rate1_pct / 100.0 * t1) / (t2 - t1)) * 100.0
}

/// Forward rate ending at a quoted tenor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenorForward {
    /// Tenor label.
    pub tenor: String,
    /// Day offset of the tenor.
    pub days: u32,
    /// Spot rate at the tenor, in percent.
    pub spot_rate: f64,
    /// Forward from the previous tenor, in percent.
    pub forward_rate: f64,
}

/// Forward rates between consecutive quoted points.
///
/// The first point has no predecessor, so its forward is its spot rate.
///
/// # Errors
///
/// Returns `CurveError::EmptyCurve` if the curve has no points.
pub fn forward_rates<C: RateCurve + ?Sized>(curve: &C) -> RiskResult<Vec<TenorForward>> {
    let points = curve.points();
    let first = points.first().ok_or(CurveError::EmptyCurve)?;

    let mut forwards = Vec::with_capacity(points.len());
    forwards.push(TenorForward {
        tenor: first.tenor.clone(),
        days: first.days,
        spot_rate: first.rate,
        forward_rate: first.rate,
    });

    forwards.extend(points.windows(2).map(|pair| TenorForward {
        tenor: pair[1].tenor.clone(),
        days: pair[1].days,
        spot_rate: pair[1].rate,
        forward_rate: pairwise_forward(
            pair[0].rate,
            f64::from(pair[0].days),
            pair[1].rate,
            f64::from(pair[1].days),
        ),
    }));

    Ok(forwards)
}

/// One day of the daily forward series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForward {
    /// Calendar date the forward starts on.
    pub date: Date,
    /// Day offset from the valuation date.
    pub days: i64,
    /// Overnight forward rate, in percent.
    pub forward_rate: f64,
}

/// Lazy sequence of one-day forwards over an inclusive date range.
///
/// Each item reads the curve at offsets `d` and `d + 1` from the valuation
/// date. The series is finite, reports its exact length, and can be replayed
/// with [`restart`](DailyForwardSeries::restart) or by cloning.
#[derive(Debug, Clone)]
pub struct DailyForwardSeries<C = Curve> {
    curve: C,
    start: Date,
    first_offset: i64,
    len: usize,
    position: usize,
}

impl<C: RateCurve> DailyForwardSeries<C> {
    /// Creates the series for `[start, end]`.
    ///
    /// # Errors
    ///
    /// - `RiskError::InvalidDateRange` if `start` is after `end`
    /// - `CurveError::EmptyCurve` if the curve has no points
    pub fn new(curve: C, start: Date, end: Date) -> RiskResult<Self> {
        if start > end {
            return Err(RiskError::InvalidDateRange { start, end });
        }
        if curve.points().is_empty() {
            return Err(CurveError::EmptyCurve.into());
        }

        let first_offset = curve.valuation_date().days_between(&start);
        let len = usize::try_from(start.days_between(&end) + 1)
            .map_err(|_| RiskError::InvalidDateRange { start, end })?;

        debug!(%start, %end, days = len, "daily forward series");
        Ok(Self {
            curve,
            start,
            first_offset,
            len,
            position: 0,
        })
    }

    /// Rewinds the series to its first day.
    pub fn restart(&mut self) {
        self.position = 0;
    }

    /// First date of the series.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Number of days not yet produced.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.len - self.position
    }

    fn forward_at(&self, index: usize) -> RiskResult<DailyForward> {
        let step = i64::try_from(index).unwrap_or(i64::MAX);
        let days = self.first_offset + step;
        let d = days as f64;
        let r1 = self.curve.rate_at(d)?;
        let r2 = self.curve.rate_at(d + 1.0)?;
        Ok(DailyForward {
            date: self.start.add_days(step),
            days,
            forward_rate: pairwise_forward(r1, d, r2, d + 1.0),
        })
    }
}

impl<C: RateCurve> Iterator for DailyForwardSeries<C> {
    type Item = RiskResult<DailyForward>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.len {
            return None;
        }
        let item = self.forward_at(self.position);
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.position = self.position.saturating_add(n).min(self.len);
        self.next()
    }
}

impl<C: RateCurve> ExactSizeIterator for DailyForwardSeries<C> {}

impl<C: RateCurve> FusedIterator for DailyForwardSeries<C> {}

/// A day-over-day move in the daily forward larger than a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardJump {
    /// Date of the forward after the move.
    pub date: Date,
    /// Forward on the previous day, in percent.
    pub previous: f64,
    /// Forward on `date`, in percent.
    pub current: f64,
    /// `current - previous`, in percentage points.
    pub jump: f64,
}

/// Flags consecutive daily forwards that differ by more than `threshold_pct`.
pub fn detect_jumps<'a, I>(forwards: I, threshold_pct: f64) -> Vec<ForwardJump>
where
    I: IntoIterator<Item = &'a DailyForward>,
{
    let mut jumps = Vec::new();
    let mut previous: Option<&DailyForward> = None;

    for current in forwards {
        if let Some(prev) = previous {
            let jump = current.forward_rate - prev.forward_rate;
            if jump.abs() > threshold_pct {
                jumps.push(ForwardJump {
                    date: current.date,
                    previous: prev.forward_rate,
                    current: current.forward_rate,
                    jump,
                });
            }
        }
        previous = Some(current);
    }

    debug!(count = jumps.len(), threshold_pct, "forward jump scan");
    jumps
}
