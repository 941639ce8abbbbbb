//! Top-level engine configuration and file loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::CurveConfig;
use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::settings::{ForwardConfig, RiskConfig};

/// On-disk configuration format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detects the format from a path's extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Everything the engine reads from configuration.
///
/// ```toml
/// [risk]
/// bump_size_pct = 0.01
///
/// [[curves]]
/// name = "USD_SOFR"
/// interpolation = "CUBIC_SPLINE"
/// quotes = [{ tenor = "1Y", rate = 5.445 }, { tenor = "2Y", rate = 4.99 }]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// DV01 settings.
    #[serde(default)]
    pub risk: RiskConfig,

    /// Forward analysis settings.
    #[serde(default)]
    pub forwards: ForwardConfig,

    /// Curve catalogue.
    #[serde(default)]
    pub curves: Vec<CurveConfig>,
}

impl EngineConfig {
    /// Default settings with the built-in curve catalogue.
    pub fn standard() -> Self {
        Self {
            curves: CurveConfig::standard(),
            ..Self::default()
        }
    }

    /// Reads and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&text, format)?;
        config.validate_or_error()?;
        debug!(path = %path.display(), curves = config.curves.len(), "loaded configuration");
        Ok(config)
    }

    /// Parses a document without validating it.
    pub fn parse(text: &str, format: ConfigFormat) -> ConfigResult<Self> {
        Ok(match format {
            ConfigFormat::Toml => toml::from_str(text)?,
            ConfigFormat::Json => serde_json::from_str(text)?,
        })
    }

    /// Serializes the configuration.
    pub fn render(&self, format: ConfigFormat) -> ConfigResult<String> {
        Ok(match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }

    /// Finds a curve by name.
    pub fn curve(&self, name: &str) -> Option<&CurveConfig> {
        self.curves.iter().find(|c| c.name == name)
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> = self
            .risk
            .validate()
            .into_iter()
            .map(|e| e.nested("risk"))
            .chain(self.forwards.validate().into_iter().map(|e| e.nested("forwards")))
            .collect();

        for (i, curve) in self.curves.iter().enumerate() {
            let parent = format!("curves[{i}]");
            if self.curves[..i].iter().any(|c| c.name == curve.name) {
                errors.push(
                    ValidationError::with_rule(
                        "name",
                        format!("Curve '{}' is defined twice", curve.name),
                        "unique_names",
                    )
                    .nested(&parent),
                );
            }
            errors.extend(curve.validate().into_iter().map(|e| e.nested(&parent)));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratecurve_curves::InterpolationPolicy;

    const TOML: &str = r#"
[risk]
bump_size_pct = 0.02

[[curves]]
name = "USD_SOFR"
currency = "USD"
interpolation = "CUBIC_SPLINE"
quotes = [
    { tenor = "1Y", rate = 5.445 },
    { tenor = "2Y", rate = 4.99, days = 730 },
]
"#;

    #[test]
    fn test_parse_toml() {
        let config = EngineConfig::parse(TOML, ConfigFormat::Toml).unwrap();
        assert_eq!(config.risk.bump_size_pct, 0.02);
        assert_eq!(config.risk.reference_notional, 1_000_000.0);
        assert_eq!(config.forwards, ForwardConfig::default());

        let curve = config.curve("USD_SOFR").unwrap();
        assert_eq!(curve.interpolation, InterpolationPolicy::CubicSpline);
        assert!(curve.active);
        assert_eq!(curve.quotes[0].days, None);
        assert!(config.is_valid());
    }

    #[test]
    fn test_render_round_trip() {
        let config = EngineConfig::standard();
        for format in [ConfigFormat::Toml, ConfigFormat::Json] {
            let text = config.render(format).unwrap();
            assert_eq!(EngineConfig::parse(&text, format).unwrap(), config);
        }
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.TOML")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")).unwrap(), ConfigFormat::Json);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.yaml")),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_duplicate_curve_names() {
        let mut config = EngineConfig::standard();
        config.curves.push(CurveConfig::usd_sofr());
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "curves[4].name");
    }

    #[test]
    fn test_bad_document() {
        let err = EngineConfig::parse("curves = 3", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "TOML", .. }));
    }
}
