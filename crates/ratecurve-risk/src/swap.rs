//! Single fixed-for-floating swap valuation.

use std::fmt;
use std::str::FromStr;

use ratecurve_core::conventions::{discount_factor, year_fraction};
use ratecurve_core::tenor_to_days;
use ratecurve_curves::RateCurve;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convexity::convexity_estimate;
use crate::dv01::{compute_dv01_with, Dv01Settings, TenorDv01};
use crate::error::{RiskError, RiskResult};

/// Which leg the holder pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Pay fixed, receive floating.
    #[default]
    Pay,
    /// Receive fixed, pay floating.
    Receive,
}

impl Direction {
    /// Sign applied to `floating - fixed`.
    #[must_use]
    pub fn sign(&self) -> f64 {
        match self {
            Self::Pay => 1.0,
            Self::Receive => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pay => write!(f, "PAY"),
            Self::Receive => write!(f, "RECEIVE"),
        }
    }
}

impl FromStr for Direction {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PAY" | "PAYER" => Ok(Self::Pay),
            "RECEIVE" | "RECEIVER" | "REC" => Ok(Self::Receive),
            other => Err(RiskError::invalid_swap(format!("unknown direction '{other}'"))),
        }
    }
}

/// Terms of a vanilla swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapDetails {
    /// Notional amount, positive.
    pub notional: f64,
    /// Maturity tenor label, e.g. "5Y".
    pub maturity: String,
    /// Fixed rate in percent.
    pub fixed_rate: f64,
    /// Floating index name, carried for display only.
    #[serde(default)]
    pub floating_index: String,
    /// Pay or receive fixed.
    #[serde(default)]
    pub direction: Direction,
}

impl SwapDetails {
    /// Creates swap terms.
    #[must_use]
    pub fn new(
        notional: f64,
        maturity: impl Into<String>,
        fixed_rate: f64,
        direction: Direction,
    ) -> Self {
        Self {
            notional,
            maturity: maturity.into(),
            fixed_rate,
            floating_index: String::new(),
            direction,
        }
    }

    /// Sets the floating index name.
    #[must_use]
    pub fn with_floating_index(mut self, index: impl Into<String>) -> Self {
        self.floating_index = index.into();
        self
    }

    /// Checks notional and fixed rate.
    pub fn validate(&self) -> RiskResult<()> {
        if !self.notional.is_finite() || self.notional <= 0.0 {
            return Err(RiskError::invalid_swap(format!(
                "notional must be positive, got {}",
                self.notional
            )));
        }
        if !self.fixed_rate.is_finite() {
            return Err(RiskError::invalid_swap("fixed rate must be finite"));
        }
        Ok(())
    }
}

/// Value and risk of a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Present value, signed.
    pub pv: f64,
    /// Total DV01, the sum of `dv01_by_tenor`.
    pub dv01: f64,
    /// DV01 per quoted point, in curve order.
    pub dv01_by_tenor: Vec<TenorDv01>,
    /// Heuristic convexity.
    pub convexity: f64,
}

/// Full breakdown of a swap valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapValuation {
    /// Maturity as a day offset.
    pub maturity_days: u32,
    /// Curve rate at maturity, in percent.
    pub rate: f64,
    /// Discount factor at maturity.
    pub discount_factor: f64,
    /// Maturity in years.
    pub years: f64,
    /// Floating leg value `N * (1 - DF)`.
    pub floating_leg_pv: f64,
    /// Fixed leg value `N * K * T * DF`.
    pub fixed_leg_pv: f64,
    /// Aggregated value and risk.
    pub metrics: RiskMetrics,
}

/// Prices a swap with default DV01 settings.
pub fn price_swap<C: RateCurve + ?Sized>(curve: &C, swap: &SwapDetails) -> RiskResult<RiskMetrics> {
    Ok(value_swap(curve, swap, &Dv01Settings::default())?.metrics)
}

/// Prices a swap, returning leg values alongside the risk figures.
///
/// The fixed leg is a single payment at maturity. Per-tenor DV01 comes from
/// the reference portfolio and is scaled by `notional / reference_notional`.
///
/// # Errors
///
/// - `RiskError::InvalidSwap` for a non-positive notional
/// - `CurveError::InvalidTenor` for an unparsable maturity
/// - `CurveError::EmptyCurve` if the curve has no points
pub fn value_swap<C: RateCurve + ?Sized>(
    curve: &C,
    swap: &SwapDetails,
    settings: &Dv01Settings,
) -> RiskResult<SwapValuation> {
    swap.validate()?;

    let maturity_days = tenor_to_days(&swap.maturity)?;
    let rate = curve.rate_at(f64::from(maturity_days))?;
    let df = discount_factor(rate, maturity_days);
    let years = year_fraction(f64::from(maturity_days));

    let floating_leg_pv = swap.notional * (1.0 - df);
    let fixed_leg_pv = swap.notional * swap.fixed_rate / 100.0 * years * df;
    let pv = swap.direction.sign() * (floating_leg_pv - fixed_leg_pv);

    let scale = swap.notional / settings.reference_notional;
    let dv01_by_tenor: Vec<TenorDv01> = compute_dv01_with(curve, settings)?
        .into_iter()
        .map(|t| TenorDv01 {
            dv01: t.dv01 * scale,
            ..t
        })
        .collect();
    let dv01 = dv01_by_tenor.iter().map(|t| t.dv01).sum();

    debug!(
        maturity = %swap.maturity,
        direction = %swap.direction,
        rate,
        pv,
        "priced swap"
    );

    Ok(SwapValuation {
        maturity_days,
        rate,
        discount_factor: df,
        years,
        floating_leg_pv,
        fixed_leg_pv,
        metrics: RiskMetrics {
            pv,
            dv01,
            dv01_by_tenor,
            convexity: convexity_estimate(swap.notional, years),
        },
    })
}
