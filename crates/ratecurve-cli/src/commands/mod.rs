//! CLI command implementations.

pub mod config;
pub mod curve;
pub mod dv01;
pub mod forwards;
pub mod swap;

pub use config::ConfigArgs;
pub use curve::CurveArgs;
pub use dv01::Dv01Args;
pub use forwards::ForwardsArgs;
pub use swap::SwapArgs;

use anyhow::{Context as _, Result};
use ratecurve_config::{ConfigManager, CurveConfig, ForwardConfig, RiskConfig, Validate};
use ratecurve_core::Date;
use ratecurve_curves::{Curve, MarketQuote};
use tracing::debug;

use crate::cli::{CurveSource, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_warning};

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and notices.
    pub quiet: bool,
    /// Where the curve comes from.
    pub source: CurveSource,
}

impl Context {
    /// Prints a section header in table mode.
    pub fn header(&self, title: &str) {
        if self.format == OutputFormat::Table && !self.quiet {
            print_header(title);
        }
    }

    /// Prints a warning unless quiet.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            print_warning(message);
        }
    }

    /// Loads the configuration the command runs against.
    pub fn manager(&self) -> Result<ConfigManager> {
        match &self.source.config {
            Some(path) => ConfigManager::load(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display())),
            None => Ok(ConfigManager::new()),
        }
    }

    /// Resolves the curve and settings for this invocation.
    pub fn session(&self) -> Result<Session> {
        let manager = self.manager()?;
        let source = &self.source;

        let mut config = match &source.quotes {
            Some(quotes) => {
                let mut inline = CurveConfig::new(&source.curve).with_quotes(parse_quotes(quotes)?);
                if let Ok(configured) = manager.get_curve(&source.curve) {
                    inline.interpolation = configured.interpolation;
                    inline.valuation_date = configured.valuation_date;
                }
                inline
            }
            None => manager
                .get_curve(&source.curve)
                .with_context(|| format!("Unknown curve '{}'", source.curve))?,
        };

        if let Some(policy) = source.policy {
            config.interpolation = policy.into();
        }
        if let Some(date) = &source.date {
            config.valuation_date = Some(parse_date(date)?);
        }
        if !config.active {
            self.warn(&format!("Curve '{}' is marked inactive", config.name));
        }

        config
            .validate_or_error()
            .with_context(|| format!("Curve '{}' is not valid", config.name))?;
        let curve = config.build()?;

        debug!(
            curve = %config.name,
            policy = %curve.policy(),
            points = curve.len(),
            "resolved curve"
        );

        Ok(Session {
            name: config.name,
            curve,
            risk: manager.risk(),
            forwards: manager.forwards(),
        })
    }
}

/// A built curve with the settings that apply to it.
#[derive(Debug)]
pub struct Session {
    /// Curve name.
    pub name: String,
    /// The built curve.
    pub curve: Curve,
    /// DV01 settings.
    pub risk: RiskConfig,
    /// Forward analysis settings.
    pub forwards: ForwardConfig,
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses inline quotes of the form `1Y:5.445,2Y:4.99` or `18M:5.2:547`.
pub fn parse_quotes(s: &str) -> CliResult<Vec<MarketQuote>> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(parse_quote)
        .collect()
}

fn parse_quote(item: &str) -> CliResult<MarketQuote> {
    let invalid = || CliError::InvalidQuote(item.to_string());
    let mut parts = item.split(':').map(str::trim);

    let tenor = parts.next().filter(|t| !t.is_empty()).ok_or_else(invalid)?;
    let rate: f64 = parts
        .next()
        .and_then(|r| r.parse().ok())
        .ok_or_else(invalid)?;

    let quote = match parts.next() {
        Some(days) => MarketQuote::new(tenor, rate, days.parse().map_err(|_| invalid())?),
        None => MarketQuote::from_tenor(tenor, rate),
    };

    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok(quote)
}
