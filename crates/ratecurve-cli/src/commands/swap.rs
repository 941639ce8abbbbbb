//! Swap command implementation.
//!
//! Prices a single-period fixed-for-floating swap on the resolved curve.

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use ratecurve_risk::swap::{value_swap, Direction, SwapDetails};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::{CliError, CliResult};
use crate::output::{format_amount, format_df, print_json, print_key_values, print_table, KeyValue};

/// Arguments for the swap command.
#[derive(Args, Debug)]
pub struct SwapArgs {
    /// Notional amount
    #[arg(long, default_value = "10000000")]
    pub notional: f64,

    /// Maturity tenor, e.g. 5Y
    #[arg(long)]
    pub maturity: String,

    /// Fixed rate in percent
    #[arg(long)]
    pub fixed_rate: f64,

    /// PAY or RECEIVE fixed
    #[arg(long, default_value = "pay")]
    pub direction: Direction,

    /// Floating index name
    #[arg(long, default_value = "SOFR")]
    pub index: String,

    /// Show DV01 per quoted tenor
    #[arg(long)]
    pub breakdown: bool,
}

/// Validates a notional amount.
pub fn validate_notional(notional: f64) -> CliResult<f64> {
    if !notional.is_finite() || notional <= 0.0 {
        return Err(CliError::InvalidNotional(notional));
    }
    Ok(notional)
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "DV01")]
    dv01: String,
}

/// Execute the swap command.
pub fn execute(args: SwapArgs, ctx: &Context) -> Result<()> {
    let notional = validate_notional(args.notional)?;
    let session = ctx.session()?;

    let swap = SwapDetails::new(notional, &args.maturity, args.fixed_rate, args.direction)
        .with_floating_index(&args.index);
    let valuation = value_swap(&session.curve, &swap, &session.risk.dv01_settings())?;
    let metrics = &valuation.metrics;

    match ctx.format {
        OutputFormat::Json => print_json(&valuation)?,
        OutputFormat::Minimal => println!("{:.6}", metrics.pv),
        OutputFormat::Table | OutputFormat::Csv => {
            let results = vec![
                KeyValue::new("Curve", session.name.as_str()),
                KeyValue::new("Direction", swap.direction.to_string()),
                KeyValue::new("Floating Index", swap.floating_index.as_str()),
                KeyValue::from_amount("Notional", swap.notional),
                KeyValue::new(
                    "Maturity",
                    format!("{} ({} days)", swap.maturity, valuation.maturity_days),
                ),
                KeyValue::from_rate("Fixed Rate", swap.fixed_rate),
                KeyValue::from_rate("Curve Rate", valuation.rate),
                KeyValue::new("Discount Factor", format_df(valuation.discount_factor)),
                KeyValue::from_amount("Floating Leg PV", valuation.floating_leg_pv),
                KeyValue::from_amount("Fixed Leg PV", valuation.fixed_leg_pv),
                KeyValue::from_amount("PV", metrics.pv),
                KeyValue::from_amount("DV01", metrics.dv01),
                KeyValue::from_amount("Convexity", metrics.convexity),
            ];
            print_key_values(&results, "Swap Valuation", ctx.format)?;

            if args.breakdown && ctx.format == OutputFormat::Table {
                ctx.header("DV01 by Tenor");
                let rows: Vec<BreakdownRow> = metrics
                    .dv01_by_tenor
                    .iter()
                    .map(|t| BreakdownRow {
                        tenor: t.tenor.clone(),
                        dv01: format_amount(t.dv01),
                    })
                    .collect();
                print_table(&rows)?;
            }
        }
    }

    Ok(())
}
