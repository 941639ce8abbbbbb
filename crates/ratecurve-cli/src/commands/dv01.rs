//! DV01 command implementation.

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use ratecurve_risk::dv01::{compute_dv01_with, Dv01Settings};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_amount, print_csv, print_json, print_table};

/// Arguments for the DV01 command.
#[derive(Args, Debug)]
pub struct Dv01Args {
    /// Bump size in percent, overriding the configured one
    #[arg(long)]
    pub bump: Option<f64>,

    /// Reference portfolio notional, overriding the configured one
    #[arg(long)]
    pub notional: Option<f64>,
}

#[derive(Tabled)]
struct Dv01Row {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Days")]
    days: String,
    #[tabled(rename = "DV01")]
    dv01: String,
}

/// Execute the DV01 command.
pub fn execute(args: Dv01Args, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;

    let configured = session.risk.dv01_settings();
    let settings = Dv01Settings {
        bump_pct: args.bump.unwrap_or(configured.bump_pct),
        reference_notional: args.notional.unwrap_or(configured.reference_notional),
    };
    let risk = compute_dv01_with(&session.curve, &settings)?;
    let total: f64 = risk.iter().map(|t| t.dv01).sum();

    match ctx.format {
        OutputFormat::Table => {
            ctx.header(&format!(
                "DV01: {} (bump {}%, notional {})",
                session.name,
                settings.bump_pct,
                format_amount(settings.reference_notional)
            ));
            let mut rows: Vec<Dv01Row> = risk
                .iter()
                .map(|t| Dv01Row {
                    tenor: t.tenor.clone(),
                    days: t.days.to_string(),
                    dv01: format_amount(t.dv01),
                })
                .collect();
            rows.push(Dv01Row {
                tenor: "Total".to_string(),
                days: String::new(),
                dv01: format_amount(total),
            });
            print_table(&rows)?;
        }
        OutputFormat::Json => print_json(&risk)?,
        OutputFormat::Csv => print_csv(&risk)?,
        OutputFormat::Minimal => println!("{total:.6}"),
    }

    Ok(())
}
