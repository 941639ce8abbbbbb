//! Risk and forward-rate settings.

use ratecurve_risk::dv01::{Dv01Settings, ONE_BASIS_POINT_PCT, REFERENCE_NOTIONAL};
use ratecurve_risk::forward::DEFAULT_JUMP_THRESHOLD_PCT;
use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

/// DV01 calculation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Rate bump in percent.
    #[serde(default = "default_bump_size")]
    pub bump_size_pct: f64,

    /// Notional of the reference portfolio.
    #[serde(default = "default_reference_notional")]
    pub reference_notional: f64,
}

fn default_bump_size() -> f64 {
    ONE_BASIS_POINT_PCT
}

fn default_reference_notional() -> f64 {
    REFERENCE_NOTIONAL
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            bump_size_pct: default_bump_size(),
            reference_notional: default_reference_notional(),
        }
    }
}

impl RiskConfig {
    /// Settings passed to DV01 and swap pricing.
    pub fn dv01_settings(&self) -> Dv01Settings {
        Dv01Settings {
            bump_pct: self.bump_size_pct,
            reference_notional: self.reference_notional,
        }
    }
}

impl Validate for RiskConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.bump_size_pct > 0.0 && self.bump_size_pct <= 1.0) {
            errors.push(ValidationError::with_rule(
                "bump_size_pct",
                "Bump size must be in (0, 1] percent",
                "valid_bump",
            ));
        }

        if !(self.reference_notional.is_finite() && self.reference_notional > 0.0) {
            errors.push(ValidationError::with_rule(
                "reference_notional",
                "Reference notional must be positive",
                "positive_notional",
            ));
        }

        errors
    }
}

/// Forward-rate analysis settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardConfig {
    /// Daily forward move flagged as a jump, in percentage points.
    #[serde(default = "default_jump_threshold")]
    pub jump_threshold_pct: f64,
}

fn default_jump_threshold() -> f64 {
    DEFAULT_JUMP_THRESHOLD_PCT
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            jump_threshold_pct: default_jump_threshold(),
        }
    }
}

impl Validate for ForwardConfig {
    fn validate(&self) -> Vec<ValidationError> {
        if self.jump_threshold_pct.is_finite() && self.jump_threshold_pct >= 0.0 {
            Vec::new()
        } else {
            vec![ValidationError::with_rule(
                "jump_threshold_pct",
                "Jump threshold must be a non-negative number",
                "valid_threshold",
            )]
        }
    }
}
