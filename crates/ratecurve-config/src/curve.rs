//! Curve catalogue configuration.
//!
//! A [`CurveConfig`] names a curve, carries its market quotes and selects
//! the interpolation policy used when it is built.

use std::collections::HashMap;

use ratecurve_core::Date;
use ratecurve_curves::{Curve, CurveBuilder, InstrumentType, InterpolationPolicy, MarketQuote};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigResult, Validate, ValidationError};

/// Configuration of one curve in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Curve identifier, e.g. `USD_SOFR`.
    pub name: String,

    /// ISO currency code.
    #[serde(default)]
    pub currency: String,

    /// Overnight index the curve is built on.
    #[serde(default)]
    pub index: String,

    /// Description of this configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Interpolation policy.
    #[serde(default)]
    pub interpolation: InterpolationPolicy,

    /// Whether the curve is live. Inactive curves may have no quotes.
    #[serde(default = "default_true")]
    pub active: bool,

    /// Valuation date; today when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuation_date: Option<Date>,

    /// Market quotes.
    #[serde(default)]
    pub quotes: Vec<MarketQuote>,
}

fn default_true() -> bool {
    true
}

impl CurveConfig {
    /// Creates an empty, active curve configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            currency: String::new(),
            index: String::new(),
            description: None,
            interpolation: InterpolationPolicy::default(),
            active: true,
            valuation_date: None,
            quotes: Vec::new(),
        }
    }

    fn catalogue_entry(name: &str, currency: &str, index: &str, description: &str) -> Self {
        Self {
            currency: currency.to_string(),
            index: index.to_string(),
            description: Some(description.to_string()),
            ..Self::new(name)
        }
    }

    /// USD SOFR curve with sample market quotes.
    pub fn usd_sofr() -> Self {
        use InstrumentType::{Deposit, Swap};
        let quotes = [
            ("1W", 5.309, 7, Deposit),
            ("2W", 5.312, 14, Deposit),
            ("3W", 5.314, 21, Deposit),
            ("1M", 5.318, 30, Deposit),
            ("2M", 5.351, 60, Deposit),
            ("3M", 5.382, 90, Deposit),
            ("6M", 5.452, 180, Swap),
            ("1Y", 5.445, 365, Swap),
            ("2Y", 4.990, 730, Swap),
            ("3Y", 4.650, 1095, Swap),
            ("5Y", 4.352, 1825, Swap),
            ("10Y", 4.201, 3650, Swap),
            ("30Y", 3.941, 10950, Swap),
        ]
        .into_iter()
        .map(|(tenor, rate, days, instrument)| {
            MarketQuote::new(tenor, rate, days).with_instrument(instrument)
        })
        .collect();

        Self {
            quotes,
            ..Self::catalogue_entry("USD_SOFR", "USD", "SOFR", "USD SOFR")
        }
    }

    /// EUR ESTR curve, inactive until quotes are supplied.
    pub fn eur_estr() -> Self {
        Self {
            active: false,
            ..Self::catalogue_entry("EUR_ESTR", "EUR", "ESTR", "EUR ESTR")
        }
    }

    /// GBP SONIA curve, inactive until quotes are supplied.
    pub fn gbp_sonia() -> Self {
        Self {
            active: false,
            ..Self::catalogue_entry("GBP_SONIA", "GBP", "SONIA", "GBP SONIA")
        }
    }

    /// JPY TONAR curve, inactive until quotes are supplied.
    pub fn jpy_tonar() -> Self {
        Self {
            active: false,
            ..Self::catalogue_entry("JPY_TONAR", "JPY", "TONAR", "JPY TONAR")
        }
    }

    /// The built-in catalogue.
    pub fn standard() -> Vec<Self> {
        vec![
            Self::usd_sofr(),
            Self::eur_estr(),
            Self::gbp_sonia(),
            Self::jpy_tonar(),
        ]
    }

    /// Sets the interpolation policy.
    #[must_use]
    pub fn with_interpolation(mut self, policy: InterpolationPolicy) -> Self {
        self.interpolation = policy;
        self
    }

    /// Adds a quote.
    #[must_use]
    pub fn with_quote(mut self, quote: MarketQuote) -> Self {
        self.quotes.push(quote);
        self
    }

    /// Replaces all quotes.
    #[must_use]
    pub fn with_quotes(mut self, quotes: Vec<MarketQuote>) -> Self {
        self.quotes = quotes;
        self
    }

    /// Sets the valuation date.
    #[must_use]
    pub fn with_valuation_date(mut self, date: Date) -> Self {
        self.valuation_date = Some(date);
        self
    }

    /// Builds the curve this configuration describes.
    pub fn build(&self) -> ConfigResult<Curve> {
        let mut builder = CurveBuilder::new()
            .add_quotes(self.quotes.iter().cloned())
            .with_policy(self.interpolation);
        if let Some(date) = self.valuation_date {
            builder = builder.valuation_date(date);
        }
        Ok(builder.build()?)
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self::usd_sofr()
    }
}

impl Validate for CurveConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        if !self.currency.is_empty()
            && !(self.currency.len() == 3 && self.currency.chars().all(|c| c.is_ascii_uppercase()))
        {
            errors.push(ValidationError::with_rule(
                "currency",
                format!("'{}' is not a three-letter currency code", self.currency),
                "iso_currency",
            ));
        }

        if self.active && self.quotes.is_empty() {
            errors.push(ValidationError::with_rule(
                "quotes",
                "An active curve needs at least one quote",
                "min_quotes",
            ));
        }

        if self.interpolation.needs_spline() && !self.quotes.is_empty() && self.quotes.len() < 2 {
            errors.push(ValidationError::with_rule(
                "interpolation",
                "Cubic spline needs at least two quotes",
                "spline_points",
            ));
        }

        let mut seen: HashMap<u32, &str> = HashMap::new();
        for (i, quote) in self.quotes.iter().enumerate() {
            let field = format!("quotes[{i}]");

            if !quote.rate.is_finite() {
                errors.push(ValidationError::new("rate", "Rate must be finite").nested(&field));
            }

            match quote.resolved_days() {
                Ok(days) => {
                    if let Some(previous) = seen.insert(days, &quote.tenor) {
                        errors.push(
                            ValidationError::with_rule(
                                "days",
                                format!("Day {days} is already used by '{previous}'"),
                                "unique_days",
                            )
                            .nested(&field),
                        );
                    }
                }
                Err(err) => {
                    errors.push(ValidationError::new("tenor", err.to_string()).nested(&field));
                }
            }
        }

        errors
    }
}
