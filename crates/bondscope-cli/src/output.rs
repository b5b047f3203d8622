//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints rows in the given format.
///
/// `minimal` renders one line per row for [`OutputFormat::Minimal`].
pub fn print_rows<T, F>(rows: &[T], format: OutputFormat, minimal: F) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
    F: Fn(&T) -> String,
{
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => print_json(rows),
        OutputFormat::Csv => print_csv(rows),
        OutputFormat::Minimal => {
            for row in rows {
                println!("{}", minimal(row));
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

/// Prints data as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV with a header row.
pub fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message);
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

    /// Creates a key-value pair from a float with fixed precision.
    pub fn from_f64(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self::new(key, format!("{:.prec$}", value, prec = precision))
    }

    /// Creates a key-value pair formatted as a percentage.
    pub fn from_percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_percent(value))
    }
}

/// Formats a value already in percent.
pub fn format_percent(value: f64) -> String {
    format!("{:.4}%", value)
}

/// Formats a signed value already in percent.
pub fn format_signed_percent(value: &f64) -> String {
    format!("{:+.4}%", value)
}

/// Four decimals, for table columns.
pub fn fixed4(value: &f64) -> String {
    format!("{:.4}", value)
}

/// Two decimals, for money columns.
pub fn fixed2(value: &f64) -> String {
    format!("{:.2}", value)
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
