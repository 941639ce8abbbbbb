//! Curve command implementation.
//!
//! Displays, queries and samples yield curves.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use ratecurve_core::tenor_to_days;
use ratecurve_curves::profile::spot_profile;
use ratecurve_curves::{CurvePoint, RateCurve};
use ratecurve_risk::report::curve_report;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, Context};
use crate::error::CliError;
use crate::output::{
    format_df, format_rate, print_csv, print_json, print_key_values, print_table, KeyValue,
};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(subcommand)]
    pub command: CurveCommand,
}

/// Curve subcommands.
#[derive(Subcommand, Debug)]
pub enum CurveCommand {
    /// Display the quoted points with forwards and DV01
    Show,

    /// Query the rate and discount factor at one point
    Query(QueryArgs),

    /// Sample the spot rate daily for a year, then weekly
    Profile(ProfileArgs),
}

/// Arguments for querying a curve.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Day offset from the valuation date
    #[arg(long, conflicts_with_all = ["tenor", "at"])]
    pub days: Option<f64>,

    /// Tenor label, e.g. 18M
    #[arg(long, conflicts_with = "at")]
    pub tenor: Option<String>,

    /// Calendar date (YYYY-MM-DD)
    #[arg(long)]
    pub at: Option<String>,
}

/// Arguments for the spot profile.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Last date to sample (YYYY-MM-DD). Defaults to the longest tenor.
    #[arg(long)]
    pub end: Option<String>,
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CurveCommand::Show => execute_show(ctx),
        CurveCommand::Query(query_args) => execute_query(query_args, ctx),
        CurveCommand::Profile(profile_args) => execute_profile(profile_args, ctx),
    }
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Days")]
    days: u32,
    #[tabled(rename = "Type")]
    instrument: &'static str,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
    #[tabled(rename = "Forward")]
    forward_rate: String,
    #[tabled(rename = "DV01")]
    dv01: String,
}

impl From<&CurvePoint> for PointRow {
    fn from(point: &CurvePoint) -> Self {
        Self {
            tenor: point.tenor.clone(),
            days: point.days,
            instrument: point.instrument().label(),
            rate: format_rate(point.rate),
            discount_factor: format_df(point.discount_factor),
            forward_rate: point.forward_rate.map(format_rate).unwrap_or_default(),
            dv01: point.dv01.map(|v| format!("{v:.2}")).unwrap_or_default(),
        }
    }
}

/// Execute the show subcommand.
fn execute_show(ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let points = curve_report(&session.curve, &session.risk.dv01_settings())?;

    match ctx.format {
        OutputFormat::Table => {
            ctx.header(&format!("Yield Curve: {}", session.name));
            if !ctx.quiet {
                println!("Valuation Date: {}", session.curve.valuation_date());
                println!("Interpolation: {}", session.curve.policy());
                println!();
            }
            let rows: Vec<PointRow> = points.iter().map(PointRow::from).collect();
            print_table(&rows)?;
        }
        OutputFormat::Json => print_json(&points)?,
        OutputFormat::Csv => print_csv(&points)?,
        OutputFormat::Minimal => {
            for point in &points {
                println!("{} {:.4}", point.tenor, point.rate);
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct QueryResult {
    days: f64,
    rate: f64,
    discount_factor: f64,
}

/// Execute the query subcommand.
fn execute_query(args: QueryArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let curve = &session.curve;

    let days = if let Some(days) = args.days {
        days
    } else if let Some(tenor) = &args.tenor {
        f64::from(tenor_to_days(tenor)?)
    } else if let Some(at) = &args.at {
        curve.valuation_date().days_between(&parse_date(at)?) as f64
    } else {
        return Err(CliError::MissingArgument("--days, --tenor or --at".to_string()).into());
    };

    let result = QueryResult {
        days,
        rate: curve.rate_at(days)?,
        discount_factor: curve.discount_factor_at(days)?,
    };

    match ctx.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Csv => print_csv(&[result])?,
        OutputFormat::Minimal => println!("{:.6}", result.rate),
        OutputFormat::Table => {
            let results = vec![
                KeyValue::new("Curve", session.name.as_str()),
                KeyValue::new("Interpolation", curve.policy().to_string()),
                KeyValue::new("Days", format!("{days}")),
                KeyValue::from_rate("Rate", result.rate),
                KeyValue::new("Discount Factor", format_df(result.discount_factor)),
            ];
            print_key_values(&results, "Curve Query Result", ctx.format)?;
        }
    }

    Ok(())
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
}

/// Execute the profile subcommand.
fn execute_profile(args: ProfileArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let curve = &session.curve;

    let end = match &args.end {
        Some(end) => parse_date(end)?,
        None => {
            let last = curve.points().last().map_or(0, |p| p.days);
            curve.valuation_date().add_days(i64::from(last))
        }
    };
    let profile = spot_profile(curve, end)?;

    match ctx.format {
        OutputFormat::Table => {
            ctx.header(&format!("Spot Profile: {} to {}", curve.valuation_date(), end));
            let rows: Vec<ProfileRow> = profile
                .iter()
                .map(|p| ProfileRow {
                    date: p.date.to_string(),
                    days: p.days,
                    rate: format_rate(p.rate),
                    discount_factor: format_df(p.discount_factor),
                })
                .collect();
            print_table(&rows)?;
        }
        OutputFormat::Json => print_json(&profile)?,
        OutputFormat::Csv => print_csv(&profile)?,
        OutputFormat::Minimal => {
            for p in &profile {
                println!("{} {:.6}", p.date, p.rate);
            }
        }
    }

    Ok(())
}
