//! Simulate command implementation.
//!
//! Projects each selected bond's price under a parallel rate shock.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondscope_portfolio::{run_scenario, Portfolio, PortfolioScenario, ScenarioResult, ShockGrid};

use crate::cli::OutputFormat;
use crate::commands::{Context, SelectionArgs};
use crate::error::{CliError, CliResult};
use crate::output::{
    fixed2, format_signed_percent, print_csv, print_header, print_json, print_table, KeyValue,
};

/// Arguments for the simulate command.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Parallel rate shock in percentage points (0.5 = +50bp)
    #[arg(short, long, allow_hyphen_values = true)]
    pub shock: f64,

    /// Accept shocks outside the configured range
    #[arg(long)]
    pub unbounded: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct ResultRow {
    #[tabled(rename = "Bond")]
    bond_id: String,
    #[tabled(rename = "Shock", display_with = "format_signed_percent")]
    rate_shock: f64,
    #[tabled(rename = "Price", display_with = "fixed2")]
    price: f64,
    #[tabled(rename = "Change", display_with = "format_signed_percent")]
    price_change_pct: f64,
    #[tabled(rename = "New Price", display_with = "fixed2")]
    new_price: f64,
}

impl From<&ScenarioResult> for ResultRow {
    fn from(result: &ScenarioResult) -> Self {
        Self {
            bond_id: result.bond_id.to_string(),
            rate_shock: result.rate_shock,
            price: result.price,
            price_change_pct: result.price_change_pct,
            new_price: result.new_price,
        }
    }
}

/// Rejects a shock outside the configured range unless `unbounded`.
pub fn check_shock(shock: f64, ctx: &Context, unbounded: bool) -> CliResult<()> {
    if unbounded {
        return Ok(());
    }
    let range = &ctx.config.shock;
    let bounds = ShockGrid {
        min: range.min,
        max: range.max,
        step: range.step,
    };
    if bounds.contains(shock) {
        Ok(())
    } else {
        Err(CliError::ShockOutOfRange {
            shock,
            min: range.min,
            max: range.max,
        })
    }
}

fn summary(scenario: &PortfolioScenario) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Rate Shock", format_signed_percent(&scenario.rate_shock)),
        KeyValue::from_f64("Initial Value", scenario.initial_value, 2),
        KeyValue::from_f64("Stressed Value", scenario.stressed_value, 2),
        KeyValue::new("P&L", format!("{:+.2}", scenario.pnl)),
        KeyValue::new("P&L %", format_signed_percent(&scenario.pnl_pct)),
    ]
}

/// Execute the simulate command.
pub fn execute(args: SimulateArgs, ctx: &Context) -> Result<()> {
    check_shock(args.shock, ctx, args.unbounded)?;
    let bonds = args.selection.select(ctx)?;
    let portfolio = Portfolio::from_bonds(&bonds)?;
    let scenario = run_scenario(&portfolio, args.shock)?;
    let rows: Vec<ResultRow> = scenario.results.iter().map(ResultRow::from).collect();

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Rate Shock Scenario");
            }
            print_table(&rows)?;
            if !ctx.quiet {
                print_header("Portfolio Impact");
            }
            print_table(&summary(&scenario))?;
        }
        OutputFormat::Json => print_json(&scenario)?,
        OutputFormat::Csv => print_csv(&rows)?,
        OutputFormat::Minimal => println!("{:.2}", scenario.pnl),
    }

    Ok(())
}
