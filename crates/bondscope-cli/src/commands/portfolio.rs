//! Portfolio command implementation.
//!
//! Weights the selected bonds by market value and reports the
//! portfolio averages.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondscope_portfolio::{Portfolio, PortfolioEntry};

use crate::cli::OutputFormat;
use crate::commands::{Context, SelectionArgs};
use crate::output::{
    fixed2, fixed4, print_csv, print_header, print_json, print_table, KeyValue,
};

/// Arguments for the portfolio command.
#[derive(Args, Debug)]
pub struct PortfolioArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct EntryRow {
    #[tabled(rename = "Bond")]
    bond_id: String,
    #[tabled(rename = "Market Value", display_with = "fixed2")]
    market_value: f64,
    #[tabled(rename = "Weight %", display_with = "percent_of_one")]
    weight: f64,
    #[tabled(rename = "YTM %", display_with = "fixed4")]
    ytm: f64,
    #[tabled(rename = "Duration", display_with = "fixed4")]
    duration: f64,
    #[tabled(rename = "Convexity", display_with = "fixed4")]
    convexity: f64,
}

impl From<&PortfolioEntry> for EntryRow {
    fn from(entry: &PortfolioEntry) -> Self {
        Self {
            bond_id: entry.bond_id.to_string(),
            market_value: entry.market_value,
            weight: entry.weight,
            ytm: entry.ytm,
            duration: entry.duration,
            convexity: entry.convexity,
        }
    }
}

fn percent_of_one(value: &f64) -> String {
    format!("{:.2}", value * 100.0)
}

fn summary(portfolio: &Portfolio) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Bonds", portfolio.len().to_string()),
        KeyValue::from_f64("Total Market Value", portfolio.total_market_value(), 2),
        KeyValue::from_f64("Weighted Duration", portfolio.weighted_duration(), 4),
        KeyValue::from_percent("Weighted YTM", portfolio.weighted_ytm()),
        KeyValue::from_f64("Weighted Convexity", portfolio.weighted_convexity(), 4),
        KeyValue::new(
            "Duration Range",
            format!(
                "{:.4} - {:.4}",
                portfolio.min_duration(),
                portfolio.max_duration()
            ),
        ),
    ]
}

/// Execute the portfolio command.
pub fn execute(args: PortfolioArgs, ctx: &Context) -> Result<()> {
    let bonds = args.selection.select(ctx)?;
    let portfolio = Portfolio::from_bonds(&bonds)?;
    let rows: Vec<EntryRow> = portfolio.entries().iter().map(EntryRow::from).collect();

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Portfolio Holdings");
            }
            print_table(&rows)?;
            if !ctx.quiet {
                print_header("Portfolio Summary");
            }
            print_table(&summary(&portfolio))?;
        }
        OutputFormat::Json => print_json(&portfolio)?,
        OutputFormat::Csv => print_csv(&rows)?,
        OutputFormat::Minimal => println!("{:.4}", portfolio.weighted_duration()),
    }

    Ok(())
}
