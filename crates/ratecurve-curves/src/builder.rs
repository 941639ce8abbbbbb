//! Fluent construction of curves from market quotes.

use ratecurve_core::Date;

use crate::curve::Curve;
use crate::error::CurveResult;
use crate::point::MarketQuote;
use crate::policy::InterpolationPolicy;
use crate::store::CurvePointStore;

/// Builder for [`Curve`] snapshots.
///
/// Quotes may be added in any order. The valuation date defaults to today.
#[derive(Debug, Clone, Default)]
pub struct CurveBuilder {
    valuation_date: Option<Date>,
    quotes: Vec<MarketQuote>,
    policy: InterpolationPolicy,
}

impl CurveBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the valuation date day offsets are measured from.
    #[must_use]
    pub fn valuation_date(mut self, date: Date) -> Self {
        self.valuation_date = Some(date);
        self
    }

    /// Adds a quote with an explicit day offset.
    #[must_use]
    pub fn add_quote(mut self, tenor: impl Into<String>, rate: f64, days: u32) -> Self {
        self.quotes.push(MarketQuote::new(tenor, rate, days));
        self
    }

    /// Adds a quote whose day offset comes from its tenor label.
    #[must_use]
    pub fn add_tenor_quote(mut self, tenor: impl Into<String>, rate: f64) -> Self {
        self.quotes.push(MarketQuote::from_tenor(tenor, rate));
        self
    }

    /// Adds multiple quotes.
    #[must_use]
    pub fn add_quotes(mut self, quotes: impl IntoIterator<Item = MarketQuote>) -> Self {
        self.quotes.extend(quotes);
        self
    }

    /// Sets the interpolation policy.
    #[must_use]
    pub fn with_policy(mut self, policy: InterpolationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// - `CurveError::InvalidTenor` if a quote without days has a bad label
    /// - `CurveError::DuplicateTenor` if two quotes share a day offset
    /// - `CurveError::DegenerateSegment` for a cubic curve on fewer than two quotes
    pub fn build(self) -> CurveResult<Curve> {
        let store = CurvePointStore::from_quotes(&self.quotes)?;
        let valuation_date = self.valuation_date.unwrap_or_else(Date::today);
        Curve::new(store, self.policy, valuation_date)
    }
}
