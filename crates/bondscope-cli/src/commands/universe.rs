//! Universe command implementation.
//!
//! Lists the bonds a selection can draw from.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use bondscope_core::BondRecord;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_rows};

#[derive(Debug, Serialize, Tabled)]
struct UniverseRow {
    #[tabled(rename = "Bond")]
    id: String,
    #[tabled(rename = "Issuer")]
    issuer: String,
    #[tabled(rename = "Coupon %")]
    coupon_rate: Decimal,
    #[tabled(rename = "Maturity (Y)")]
    maturity_years: u32,
    #[tabled(rename = "Price")]
    price: Decimal,
    #[tabled(rename = "Face")]
    face_value: Decimal,
    #[tabled(rename = "Rating")]
    rating: String,
}

impl From<&BondRecord> for UniverseRow {
    fn from(bond: &BondRecord) -> Self {
        Self {
            id: bond.id.to_string(),
            issuer: bond.issuer.clone(),
            coupon_rate: bond.coupon_rate,
            maturity_years: bond.maturity_years,
            price: bond.price,
            face_value: bond.face_value,
            rating: bond.rating.label().to_string(),
        }
    }
}

/// Execute the universe command.
pub fn execute(ctx: &Context) -> Result<()> {
    let rows: Vec<UniverseRow> = ctx.universe.records().iter().map(UniverseRow::from).collect();

    if !ctx.quiet && ctx.format == OutputFormat::Table {
        print_header(&format!("Bond Universe ({} bonds)", rows.len()));
    }
    print_rows(&rows, ctx.format, |row| row.id.clone())
}
