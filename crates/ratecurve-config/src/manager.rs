//! Configuration manager.
//!
//! Holds the curve catalogue and engine settings behind locks so a host can
//! share one manager between request handlers.

use std::collections::HashMap;
use std::path::Path;

use parking_lot::RwLock;
use ratecurve_curves::Curve;
use tracing::{debug, warn};

use crate::curve::CurveConfig;
use crate::engine::EngineConfig;
use crate::error::{ConfigError, ConfigResult, Validate};
use crate::settings::{ForwardConfig, RiskConfig};

/// Central configuration manager.
///
/// # Example
///
/// ```rust
/// use ratecurve_config::{ConfigManager, CurveConfig};
///
/// let manager = ConfigManager::new();
///
/// // The built-in SOFR curve carries sample quotes.
/// let sofr = manager.get_curve("USD_SOFR").unwrap();
/// assert_eq!(sofr.quotes.len(), 13);
///
/// let curve = manager.build_curve("USD_SOFR").unwrap();
/// assert_eq!(curve.len(), 13);
/// ```
#[derive(Debug)]
pub struct ConfigManager {
    /// Curve configurations by name.
    curves: RwLock<HashMap<String, CurveConfig>>,

    /// DV01 settings.
    risk: RwLock<RiskConfig>,

    /// Forward analysis settings.
    forwards: RwLock<ForwardConfig>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Creates a manager with the built-in catalogue and default settings.
    pub fn new() -> Self {
        let manager = Self::empty();
        manager.load_standard_configs();
        manager
    }

    /// Creates a manager with no curves.
    pub fn empty() -> Self {
        Self {
            curves: RwLock::new(HashMap::new()),
            risk: RwLock::new(RiskConfig::default()),
            forwards: RwLock::new(ForwardConfig::default()),
        }
    }

    /// Creates a manager from a configuration, layered over the built-in
    /// catalogue. Curves in `config` replace built-ins of the same name.
    pub fn from_config(config: EngineConfig) -> ConfigResult<Self> {
        config.validate_or_error()?;

        let manager = Self::new();
        *manager.risk.write() = config.risk;
        *manager.forwards.write() = config.forwards;
        for curve in config.curves {
            manager.register_curve(curve)?;
        }
        Ok(manager)
    }

    /// Loads a TOML or JSON file and layers it over the built-ins.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::from_config(EngineConfig::load(path)?)
    }

    fn load_standard_configs(&self) {
        let mut curves = self.curves.write();
        for config in CurveConfig::standard() {
            curves.insert(config.name.clone(), config);
        }
    }

    // =========================================================================
    // CURVE CONFIGURATION
    // =========================================================================

    /// Registers a curve configuration, replacing any with the same name.
    pub fn register_curve(&self, config: CurveConfig) -> ConfigResult<()> {
        config.validate_or_error()?;

        debug!(curve = %config.name, quotes = config.quotes.len(), "registered curve");
        self.curves.write().insert(config.name.clone(), config);
        Ok(())
    }

    /// Gets a curve configuration by name.
    pub fn get_curve(&self, name: &str) -> ConfigResult<CurveConfig> {
        self.curves
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::NotFound {
                key: name.to_string(),
            })
    }

    /// Lists curve names in alphabetical order.
    pub fn list_curves(&self) -> Vec<String> {
        let mut names: Vec<String> = self.curves.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Removes a curve configuration.
    pub fn remove_curve(&self, name: &str) -> bool {
        self.curves.write().remove(name).is_some()
    }

    /// Builds the named curve.
    pub fn build_curve(&self, name: &str) -> ConfigResult<Curve> {
        let config = self.get_curve(name)?;
        if !config.active {
            warn!(curve = name, "building inactive curve");
        }
        config.build()
    }

    // =========================================================================
    // SETTINGS
    // =========================================================================

    /// Current DV01 settings.
    pub fn risk(&self) -> RiskConfig {
        *self.risk.read()
    }

    /// Replaces the DV01 settings.
    pub fn set_risk(&self, risk: RiskConfig) -> ConfigResult<()> {
        risk.validate_or_error()?;
        *self.risk.write() = risk;
        Ok(())
    }

    /// Current forward analysis settings.
    pub fn forwards(&self) -> ForwardConfig {
        *self.forwards.read()
    }

    /// Replaces the forward analysis settings.
    pub fn set_forwards(&self, forwards: ForwardConfig) -> ConfigResult<()> {
        forwards.validate_or_error()?;
        *self.forwards.write() = forwards;
        Ok(())
    }

    /// Snapshot of the full configuration, curves sorted by name.
    pub fn to_config(&self) -> EngineConfig {
        let curves = self.curves.read();
        let mut list: Vec<CurveConfig> = curves.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        EngineConfig {
            risk: self.risk(),
            forwards: self.forwards(),
            curves: list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratecurve_curves::{InterpolationPolicy, MarketQuote};

    #[test]
    fn test_config_manager_new() {
        let manager = ConfigManager::new();
        assert_eq!(
            manager.list_curves(),
            ["EUR_ESTR", "GBP_SONIA", "JPY_TONAR", "USD_SOFR"]
        );
        assert!(manager.get_curve("USD_SOFR").unwrap().active);
        assert_eq!(manager.risk(), RiskConfig::default());
    }

    #[test]
    fn test_config_not_found() {
        let manager = ConfigManager::new();
        assert!(matches!(
            manager.get_curve("CHF_SARON"),
            Err(ConfigError::NotFound { .. })
        ));
        assert!(manager.build_curve("CHF_SARON").is_err());
    }

    #[test]
    fn test_register_replaces() {
        let manager = ConfigManager::new();
        let custom = CurveConfig::new("USD_SOFR")
            .with_quote(MarketQuote::from_tenor("1Y", 5.0))
            .with_quote(MarketQuote::from_tenor("2Y", 4.5))
            .with_interpolation(InterpolationPolicy::Linear);
        manager.register_curve(custom).unwrap();

        let curve = manager.build_curve("USD_SOFR").unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.policy(), InterpolationPolicy::Linear);
    }

    #[test]
    fn test_register_rejects_invalid() {
        let manager = ConfigManager::new();
        assert!(manager.register_curve(CurveConfig::new("")).is_err());
        assert!(manager.get_curve("").is_err());
    }

    #[test]
    fn test_remove_curve() {
        let manager = ConfigManager::new();
        assert!(manager.remove_curve("JPY_TONAR"));
        assert!(!manager.remove_curve("JPY_TONAR"));
        assert_eq!(manager.list_curves().len(), 3);
    }

    #[test]
    fn test_settings_validation() {
        let manager = ConfigManager::empty();
        assert!(manager.list_curves().is_empty());

        let bad = RiskConfig {
            bump_size_pct: -1.0,
            ..RiskConfig::default()
        };
        assert!(manager.set_risk(bad).is_err());
        assert_eq!(manager.risk(), RiskConfig::default());

        let forwards = ForwardConfig {
            jump_threshold_pct: 0.25,
        };
        manager.set_forwards(forwards).unwrap();
        assert_eq!(manager.forwards(), forwards);
    }

    #[test]
    fn test_to_config_round_trips_through_manager() {
        let manager = ConfigManager::new();
        let config = manager.to_config();
        assert_eq!(config.curves.len(), 4);

        let rebuilt = ConfigManager::from_config(config.clone()).unwrap();
        assert_eq!(rebuilt.to_config(), config);
    }
}
