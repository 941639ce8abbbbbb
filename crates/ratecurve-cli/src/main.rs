//! Ratecurve CLI - Command-line interface for yield curves and rate risk.
//!
//! # Usage
//!
//! ```bash
//! # Show the built-in SOFR curve with forwards and DV01
//! ratecurve curve show
//!
//! # Query an interpolated rate on inline quotes
//! ratecurve --quotes 1Y:5.445,2Y:4.99 --policy linear curve query --days 547
//!
//! # Daily forwards and the jumps between them
//! ratecurve forwards --daily --start 2025-01-01 --end 2025-12-31 --jumps
//!
//! # Price a swap from a configured curve
//! ratecurve --config rates.toml swap --maturity 5Y --fixed-rate 4.25 --direction receive
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
        source: cli.source,
    };

    match cli.command {
        Commands::Curve(args) => commands::curve::execute(args, &ctx)?,
        Commands::Forwards(args) => commands::forwards::execute(args, &ctx)?,
        Commands::Dv01(args) => commands::dv01::execute(args, &ctx)?,
        Commands::Swap(args) => commands::swap::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
