//! Config command implementation.
//!
//! Shows the effective configuration and validates configuration files.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use ratecurve_config::{ConfigFormat, CurveConfig, EngineConfig, Validate};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{print_error, print_key_values, print_output, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration (built-ins plus --config)
    Show,

    /// Validate a configuration file, reporting every problem
    Validate(ValidateArgs),
}

/// Arguments for validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// File to validate. Defaults to --config.
    pub path: Option<PathBuf>,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Validate(validate_args) => execute_validate(validate_args, ctx),
    }
}

#[derive(Tabled, Serialize)]
struct CurveRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Index")]
    index: String,
    #[tabled(rename = "Interpolation")]
    interpolation: String,
    #[tabled(rename = "Active")]
    active: bool,
    #[tabled(rename = "Quotes")]
    quotes: usize,
}

impl From<&CurveConfig> for CurveRow {
    fn from(config: &CurveConfig) -> Self {
        Self {
            name: config.name.clone(),
            currency: config.currency.clone(),
            index: config.index.clone(),
            interpolation: config.interpolation.to_string(),
            active: config.active,
            quotes: config.quotes.len(),
        }
    }
}

/// Execute the show subcommand.
fn execute_show(ctx: &Context) -> Result<()> {
    let config = ctx.manager()?.to_config();

    match ctx.format {
        OutputFormat::Json => println!("{}", config.render(ConfigFormat::Json)?),
        OutputFormat::Minimal => print!("{}", config.render(ConfigFormat::Toml)?),
        OutputFormat::Table | OutputFormat::Csv => {
            if ctx.format == OutputFormat::Table {
                let settings = vec![
                    KeyValue::new("risk.bump_size_pct", config.risk.bump_size_pct.to_string()),
                    KeyValue::new(
                        "risk.reference_notional",
                        config.risk.reference_notional.to_string(),
                    ),
                    KeyValue::new(
                        "forwards.jump_threshold_pct",
                        config.forwards.jump_threshold_pct.to_string(),
                    ),
                ];
                print_key_values(&settings, "Settings", ctx.format)?;
                ctx.header("Curves");
            }
            let rows: Vec<CurveRow> = config.curves.iter().map(CurveRow::from).collect();
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}

/// Execute the validate subcommand.
fn execute_validate(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let path = args
        .path
        .or_else(|| ctx.source.config.clone())
        .ok_or_else(|| CliError::MissingArgument("configuration file path".to_string()))?;

    let format = ConfigFormat::from_path(&path)?;
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = EngineConfig::parse(&text, format)?;

    let errors = config.validate();
    if errors.is_empty() {
        if !ctx.quiet {
            print_success(&format!(
                "{} is valid ({} curves)",
                path.display(),
                config.curves.len()
            ));
        }
        return Ok(());
    }

    for err in &errors {
        print_error(&err.to_string());
    }
    bail!("{} has {} validation errors", path.display(), errors.len());
}
