//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints a list of rows in the requested format.
///
/// Tables use the `Tabled` rendering; JSON and CSV serialize the rows as they
/// are; minimal prints one JSON line per row.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => {
            for item in data {
                println!("{}", serde_json::to_string(item)?);
            }
            Ok(())
        }
    }
}

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
pub fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints key-value results under a title.
pub fn print_key_values(
    results: &[KeyValue],
    title: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(title);
            print_table(results)?;
        }
        OutputFormat::Json => {
            let output: serde_json::Map<String, serde_json::Value> = results
                .iter()
                .filter(|r| !r.key.is_empty())
                .map(|r| (r.key.clone(), serde_json::Value::String(r.value.clone())))
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Csv => print_csv(results)?,
        OutputFormat::Minimal => {
            for r in results.iter().filter(|r| !r.value.is_empty()) {
                println!("{}", r.value);
            }
        }
    }
    Ok(())
}

/// Formats a rate already expressed in percent.
pub fn format_rate(value: f64) -> String {
    format!("{:.4}%", value)
}

/// Formats a discount factor.
pub fn format_df(value: f64) -> String {
    format!("{:.8}", value)
}

/// Formats a currency amount.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair formatted as a percent rate.
    pub fn from_rate(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_rate(value))
    }

    /// Creates a key-value pair formatted as an amount.
    pub fn from_amount(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_amount(value))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
