//! Metrics command implementation.
//!
//! Calculates yield, duration and convexity for each selected bond.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use bondscope_core::BondRecord;
use bondscope_portfolio::PortfolioError;
use bondscope_risk::compute_metrics;

use crate::cli::OutputFormat;
use crate::commands::{Context, SelectionArgs};
use crate::output::{fixed4, print_header, print_rows};

/// Arguments for the metrics command.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct MetricsRow {
    #[tabled(rename = "Bond")]
    bond_id: String,
    #[tabled(rename = "Coupon %")]
    coupon_rate: Decimal,
    #[tabled(rename = "Maturity (Y)")]
    maturity_years: u32,
    #[tabled(rename = "Price")]
    price: Decimal,
    #[tabled(rename = "YTM %", display_with = "fixed4")]
    ytm: f64,
    #[tabled(rename = "Duration", display_with = "fixed4")]
    duration: f64,
    #[tabled(rename = "Convexity", display_with = "fixed4")]
    convexity: f64,
}

fn metrics_row(bond: &BondRecord) -> Result<MetricsRow, PortfolioError> {
    let metrics =
        compute_metrics(bond).map_err(|e| PortfolioError::metrics(bond.id.as_str(), e))?;
    Ok(MetricsRow {
        bond_id: bond.id.to_string(),
        coupon_rate: bond.coupon_rate,
        maturity_years: bond.maturity_years,
        price: bond.price,
        ytm: metrics.ytm,
        duration: metrics.duration,
        convexity: metrics.convexity,
    })
}

/// Execute the metrics command.
pub fn execute(args: MetricsArgs, ctx: &Context) -> Result<()> {
    let bonds = args.selection.select(ctx)?;
    let rows = bonds
        .iter()
        .map(metrics_row)
        .collect::<Result<Vec<_>, _>>()?;

    if !ctx.quiet && ctx.format == OutputFormat::Table {
        print_header("Bond Risk Metrics");
    }
    print_rows(&rows, ctx.format, |row| {
        format!(
            "{} {:.4} {:.4} {:.4}",
            row.bond_id, row.ytm, row.duration, row.convexity
        )
    })
}
