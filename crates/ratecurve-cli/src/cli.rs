//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ratecurve_curves::InterpolationPolicy;

use crate::commands::{ConfigArgs, CurveArgs, Dv01Args, ForwardsArgs, SwapArgs};

/// Ratecurve - Yield curve construction and rate risk CLI
#[derive(Parser)]
#[command(name = "ratecurve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub source: CurveSource,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the curve comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct CurveSource {
    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true, env = "RATECURVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Curve name in the catalogue
    #[arg(long, global = true, default_value = "USD_SOFR")]
    pub curve: String,

    /// Inline quotes, e.g. "1Y:5.445,2Y:4.99" (TENOR:RATE[:DAYS])
    #[arg(long, global = true)]
    pub quotes: Option<String>,

    /// Interpolation policy, overriding the configured one
    #[arg(short, long, value_enum, global = true)]
    pub policy: Option<PolicyChoice>,

    /// Valuation date (YYYY-MM-DD). Defaults to the configured date, then today.
    #[arg(short, long, global = true)]
    pub date: Option<String>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Display, query or sample a yield curve
    Curve(CurveArgs),

    /// Forward rates between tenors or day by day
    Forwards(ForwardsArgs),

    /// Per-tenor DV01 of the reference portfolio
    Dv01(Dv01Args),

    /// Price a single-period interest rate swap
    Swap(SwapArgs),

    /// Inspect and validate configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}

/// Interpolation policy choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyChoice {
    /// Linear in rate
    #[value(name = "linear")]
    Linear,
    /// Linear in log discount factor
    #[value(name = "log-linear")]
    LogLinear,
    /// Natural cubic spline
    #[value(name = "cubic", alias = "cubic-spline")]
    Cubic,
    /// Left point's rate held flat
    #[value(name = "step", alias = "step-forward")]
    Step,
    /// Step under 90 days, log-linear beyond
    #[value(name = "hybrid")]
    Hybrid,
}

impl From<PolicyChoice> for InterpolationPolicy {
    fn from(choice: PolicyChoice) -> Self {
        match choice {
            PolicyChoice::Linear => InterpolationPolicy::Linear,
            PolicyChoice::LogLinear => InterpolationPolicy::LogLinear,
            PolicyChoice::Cubic => InterpolationPolicy::CubicSpline,
            PolicyChoice::Step => InterpolationPolicy::StepForward,
            PolicyChoice::Hybrid => InterpolationPolicy::Hybrid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_source_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ratecurve",
            "dv01",
            "--quotes",
            "1Y:5.0,2Y:4.5",
            "--policy",
            "step",
        ])
        .unwrap();
        assert_eq!(cli.source.quotes.as_deref(), Some("1Y:5.0,2Y:4.5"));
        assert_eq!(cli.source.policy, Some(PolicyChoice::Step));
        assert_eq!(cli.source.curve, "USD_SOFR");
    }
}
