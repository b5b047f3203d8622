//! Ladder command implementation.
//!
//! Runs the portfolio through every shock on a grid.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondscope_portfolio::{shock_ladder, Portfolio, PortfolioScenario, ShockGrid};

use crate::cli::OutputFormat;
use crate::commands::{Context, SelectionArgs};
use crate::output::{fixed2, format_signed_percent, print_header, print_rows};

/// Arguments for the ladder command.
#[derive(Args, Debug)]
pub struct LadderArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Lowest shock [default: from config]
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<f64>,

    /// Highest shock [default: from config]
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<f64>,

    /// Shock spacing [default: from config]
    #[arg(long)]
    pub step: Option<f64>,
}

#[derive(Debug, Serialize, Tabled)]
struct LadderRow {
    #[tabled(rename = "Shock", display_with = "format_signed_percent")]
    rate_shock: f64,
    #[tabled(rename = "Initial Value", display_with = "fixed2")]
    initial_value: f64,
    #[tabled(rename = "Stressed Value", display_with = "fixed2")]
    stressed_value: f64,
    #[tabled(rename = "P&L", display_with = "fixed2")]
    pnl: f64,
    #[tabled(rename = "P&L %", display_with = "format_signed_percent")]
    pnl_pct: f64,
}

impl From<&PortfolioScenario> for LadderRow {
    fn from(scenario: &PortfolioScenario) -> Self {
        Self {
            rate_shock: scenario.rate_shock,
            initial_value: scenario.initial_value,
            stressed_value: scenario.stressed_value,
            pnl: scenario.pnl,
            pnl_pct: scenario.pnl_pct,
        }
    }
}

impl LadderArgs {
    fn grid(&self, ctx: &Context) -> Result<ShockGrid> {
        let range = &ctx.config.shock;
        Ok(ShockGrid::new(
            self.min.unwrap_or(range.min),
            self.max.unwrap_or(range.max),
            self.step.unwrap_or(range.step),
        )?)
    }
}

/// Execute the ladder command.
pub fn execute(args: LadderArgs, ctx: &Context) -> Result<()> {
    let grid = args.grid(ctx)?;
    let bonds = args.selection.select(ctx)?;
    let portfolio = Portfolio::from_bonds(&bonds)?;
    let ladder = shock_ladder(&portfolio, &grid)?;
    let rows: Vec<LadderRow> = ladder.iter().map(LadderRow::from).collect();

    if !ctx.quiet && ctx.format == OutputFormat::Table {
        print_header(&format!(
            "Shock Ladder ({:+}% to {:+}% by {}%)",
            grid.min, grid.max, grid.step
        ));
    }
    print_rows(&rows, ctx.format, |row| {
        format!("{} {:.2}", row.rate_shock, row.stressed_value)
    })
}
