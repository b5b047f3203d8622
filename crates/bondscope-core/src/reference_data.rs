//! File-based bond reference data.
//!
//! A universe can be loaded from CSV instead of the embedded table. The
//! columns mirror [`BondRecord`]:
//!
//! ```text
//! id,issuer,coupon_rate,maturity_years,price,face_value,rating
//! B1,Aurora Capital,5.0,5,980,1000,AAA
//! ```
//!
//! `issuer`, `face_value` and `rating` may be left empty; face value then
//! defaults to 1000.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::types::{BondRecord, CreditRating};
use crate::universe::BondUniverse;

/// CSV record for bonds.
#[derive(Debug, Deserialize)]
struct CsvBondRow {
    id: String,
    #[serde(default)]
    issuer: Option<String>,
    coupon_rate: String,
    maturity_years: String,
    price: String,
    #[serde(default)]
    face_value: Option<String>,
    #[serde(default)]
    rating: Option<String>,
}

impl CsvBondRow {
    fn into_record(self, line: u64) -> CoreResult<BondRecord> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(CoreError::parse(line, "empty id"));
        }

        let coupon_rate = parse_decimal(&self.coupon_rate, "coupon_rate", line)?;
        let price = parse_decimal(&self.price, "price", line)?;
        let maturity_years = self.maturity_years.trim().parse::<u32>().map_err(|e| {
            CoreError::parse(
                line,
                format!("maturity_years '{}': {}", self.maturity_years, e),
            )
        })?;

        let mut record = BondRecord::new(id, coupon_rate, maturity_years, price);

        if let Some(issuer) = self.issuer {
            record = record.with_issuer(issuer.trim());
        }
        if let Some(face) = self.face_value.filter(|s| !s.trim().is_empty()) {
            record = record.with_face_value(parse_decimal(&face, "face_value", line)?);
        }
        if let Some(rating) = self.rating {
            record = record.with_rating(CreditRating::parse(&rating));
        }

        Ok(record)
    }
}

fn parse_decimal(raw: &str, field: &str, line: u64) -> CoreResult<Decimal> {
    Decimal::from_str(raw.trim())
        .map_err(|e| CoreError::parse(line, format!("{} '{}': {}", field, raw, e)))
}

impl BondUniverse {
    /// Loads a universe from a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading bond universe");
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Loads a universe from any CSV source.
    pub fn from_csv_reader<R: Read>(reader: R) -> CoreResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in reader.deserialize::<CsvBondRow>() {
            let row = result?;
            // Header is line 1.
            let line = records.len() as u64 + 2;
            records.push(row.into_record(line)?);
        }

        tracing::debug!(count = records.len(), "bond universe loaded");
        Self::from_records(records)
    }
}
