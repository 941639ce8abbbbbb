//! Curve observations: raw market quotes and the derived curve points.

use std::fmt;

use ratecurve_core::conventions::discount_factor;
use ratecurve_core::tenor_to_days;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Longest day offset still treated as a money-market deposit.
pub const DEPOSIT_MAX_DAYS: u32 = 365;

/// Instrument a quote was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentType {
    /// Money-market deposit.
    Deposit,
    /// Interest rate swap.
    Swap,
}

impl InstrumentType {
    /// Classifies a point by maturity: deposits up to one year, swaps beyond.
    #[must_use]
    pub fn for_days(days: u32) -> Self {
        if days <= DEPOSIT_MAX_DAYS {
            Self::Deposit
        } else {
            Self::Swap
        }
    }

    /// Short display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "DEPO",
            Self::Swap => "SWAP",
        }
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A raw market quote as supplied by a data source.
///
/// `days` may be left out, in which case it is derived from the tenor label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Tenor label (e.g. "3M", "5Y").
    pub tenor: String,
    /// Rate in percent.
    pub rate: f64,
    /// Day offset from the valuation date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    /// Source instrument, when the data source tags it.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentType>,
}

impl MarketQuote {
    /// Creates a quote with an explicit day offset.
    #[must_use]
    pub fn new(tenor: impl Into<String>, rate: f64, days: u32) -> Self {
        Self {
            tenor: tenor.into(),
            rate,
            days: Some(days),
            instrument: None,
        }
    }

    /// Creates a quote whose day offset is derived from the tenor label.
    #[must_use]
    pub fn from_tenor(tenor: impl Into<String>, rate: f64) -> Self {
        Self {
            tenor: tenor.into(),
            rate,
            days: None,
            instrument: None,
        }
    }

    /// Tags the quote with its source instrument.
    #[must_use]
    pub fn with_instrument(mut self, instrument: InstrumentType) -> Self {
        self.instrument = Some(instrument);
        self
    }

    /// Returns the day offset, parsing the tenor if none was given.
    pub fn resolved_days(&self) -> CurveResult<u32> {
        match self.days {
            Some(days) => Ok(days),
            None => Ok(tenor_to_days(&self.tenor)?),
        }
    }
}

/// One observation on the curve with its derived values.
///
/// `discount_factor` is computed from `rate` and `days` when the point is
/// created and is never set on its own. `forward_rate` and `dv01` are only
/// populated by risk reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Tenor label.
    pub tenor: String,
    /// Day offset from the valuation date.
    pub days: u32,
    /// Rate in percent.
    pub rate: f64,
    /// Continuous discount factor at `days`.
    pub discount_factor: f64,
    /// Forward rate from the previous point, if computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_rate: Option<f64>,
    /// Basis-point sensitivity, if computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dv01: Option<f64>,
}

impl CurvePoint {
    /// Creates a point, deriving its discount factor.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidQuote` if `rate` is not finite.
    pub fn new(tenor: impl Into<String>, rate: f64, days: u32) -> CurveResult<Self> {
        let tenor = tenor.into();
        if !rate.is_finite() {
            return Err(CurveError::invalid_quote(tenor, "rate must be finite"));
        }
        Ok(Self {
            discount_factor: discount_factor(rate, days),
            tenor,
            days,
            rate,
            forward_rate: None,
            dv01: None,
        })
    }

    /// Instrument class implied by the point's maturity.
    #[must_use]
    pub fn instrument(&self) -> InstrumentType {
        InstrumentType::for_days(self.days)
    }

    /// Year fraction of the point's day offset.
    #[must_use]
    pub fn years(&self) -> f64 {
        ratecurve_core::conventions::year_fraction(f64::from(self.days))
    }
}

impl TryFrom<&MarketQuote> for CurvePoint {
    type Error = CurveError;

    fn try_from(quote: &MarketQuote) -> CurveResult<Self> {
        CurvePoint::new(quote.tenor.clone(), quote.rate, quote.resolved_days()?)
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}d): {:.4}%", self.tenor, self.days, self.rate)
    }
}
