//! Forwards command implementation.
//!
//! Forward rates between quoted tenors, or the daily overnight series with
//! optional jump detection.

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use ratecurve_curves::RateCurve;
use ratecurve_risk::forward::{detect_jumps, forward_rates, DailyForward, DailyForwardSeries};

use crate::cli::OutputFormat;
use crate::commands::{parse_date, Context};
use crate::output::{format_rate, print_csv, print_json, print_output, print_table};

/// Arguments for the forwards command.
#[derive(Args, Debug)]
pub struct ForwardsArgs {
    /// Produce the daily overnight forward series
    #[arg(long)]
    pub daily: bool,

    /// First date of the daily series (YYYY-MM-DD). Defaults to the valuation date.
    #[arg(long, requires = "daily")]
    pub start: Option<String>,

    /// Last date of the daily series (YYYY-MM-DD). Defaults to one year after start.
    #[arg(long, requires = "daily")]
    pub end: Option<String>,

    /// Report only day-over-day moves larger than the threshold
    #[arg(long, requires = "daily")]
    pub jumps: bool,

    /// Jump threshold in percent, overriding the configured one
    #[arg(long, requires = "jumps")]
    pub threshold: Option<f64>,
}

/// Execute the forwards command.
pub fn execute(args: ForwardsArgs, ctx: &Context) -> Result<()> {
    if args.daily {
        execute_daily(args, ctx)
    } else {
        execute_tenor(ctx)
    }
}

#[derive(Tabled)]
struct TenorRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Days")]
    days: u32,
    #[tabled(rename = "Spot")]
    spot_rate: String,
    #[tabled(rename = "Forward")]
    forward_rate: String,
}

fn execute_tenor(ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let forwards = forward_rates(&session.curve)?;

    match ctx.format {
        OutputFormat::Table => {
            ctx.header(&format!("Tenor Forwards: {}", session.name));
            let rows: Vec<TenorRow> = forwards
                .iter()
                .map(|f| TenorRow {
                    tenor: f.tenor.clone(),
                    days: f.days,
                    spot_rate: format_rate(f.spot_rate),
                    forward_rate: format_rate(f.forward_rate),
                })
                .collect();
            print_table(&rows)?;
        }
        OutputFormat::Json => print_json(&forwards)?,
        OutputFormat::Csv => print_csv(&forwards)?,
        OutputFormat::Minimal => {
            for f in &forwards {
                println!("{} {:.6}", f.tenor, f.forward_rate);
            }
        }
    }

    Ok(())
}

#[derive(Tabled, serde::Serialize)]
struct JumpRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Previous")]
    previous: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Jump")]
    jump: String,
}

fn execute_daily(args: ForwardsArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let valuation = session.curve.valuation_date();

    let start = match &args.start {
        Some(s) => parse_date(s)?,
        None => valuation,
    };
    let end = match &args.end {
        Some(e) => parse_date(e)?,
        None => start.add_days(365),
    };

    let series = DailyForwardSeries::new(session.curve, start, end)?;
    let forwards: Vec<DailyForward> = series.collect::<Result<_, _>>()?;

    if args.jumps {
        let threshold = args
            .threshold
            .unwrap_or(session.forwards.jump_threshold_pct);
        let jumps = detect_jumps(&forwards, threshold);

        if jumps.is_empty() {
            ctx.warn(&format!("No daily moves above {threshold}%"));
        }
        match ctx.format {
            OutputFormat::Json => print_json(&jumps)?,
            OutputFormat::Csv => print_csv(&jumps)?,
            _ => {
                ctx.header(&format!("Forward Jumps above {threshold}%"));
                let rows: Vec<JumpRow> = jumps
                    .iter()
                    .map(|j| JumpRow {
                        date: j.date.to_string(),
                        previous: format_rate(j.previous),
                        current: format_rate(j.current),
                        jump: format!("{:+.4}", j.jump),
                    })
                    .collect();
                print_output(&rows, ctx.format)?;
            }
        }
        return Ok(());
    }

    match ctx.format {
        OutputFormat::Table => {
            ctx.header(&format!("Daily Forwards: {start} to {end}"));
            #[derive(Tabled)]
            struct DailyRow {
                #[tabled(rename = "Date")]
                date: String,
                #[tabled(rename = "Days")]
                days: i64,
                #[tabled(rename = "Forward")]
                forward_rate: String,
            }
            let rows: Vec<DailyRow> = forwards
                .iter()
                .map(|f| DailyRow {
                    date: f.date.to_string(),
                    days: f.days,
                    forward_rate: format_rate(f.forward_rate),
                })
                .collect();
            print_table(&rows)?;
        }
        OutputFormat::Json => print_json(&forwards)?,
        OutputFormat::Csv => print_csv(&forwards)?,
        OutputFormat::Minimal => {
            for f in &forwards {
                println!("{} {:.6}", f.date, f.forward_rate);
            }
        }
    }

    Ok(())
}
