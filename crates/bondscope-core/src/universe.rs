//! The bond universe: the fixed set of candidate bonds.
//!
//! The embedded table is built once on first access and never changes.
//! [`BondUniverse`] holds an owned table, either a copy of the embedded one
//! or one loaded through [`crate::reference_data`].

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use crate::error::{CoreError, CoreResult};
use crate::types::{BondId, BondRecord, CreditRating};

static EMBEDDED_UNIVERSE: Lazy<Vec<BondRecord>> = Lazy::new(embedded_records);

fn embedded_records() -> Vec<BondRecord> {
    vec![
        BondRecord::new("B1", dec!(5.0), 5, dec!(980))
            .with_issuer("Aurora Capital")
            .with_rating(CreditRating::AAA),
        BondRecord::new("B2", dec!(3.5), 10, dec!(1020))
            .with_issuer("Beacon Industries")
            .with_rating(CreditRating::BBB),
        BondRecord::new("B3", dec!(6.0), 3, dec!(950))
            .with_issuer("Crestline Holdings")
            .with_rating(CreditRating::AA),
        BondRecord::new("B4", dec!(4.0), 7, dec!(1000))
            .with_issuer("Delta Financial")
            .with_rating(CreditRating::A),
        BondRecord::new("B5", dec!(4.5), 8, dec!(990))
            .with_issuer("Northwind Utilities")
            .with_rating(CreditRating::AA),
        BondRecord::new("B6", dec!(2.75), 2, dec!(985))
            .with_issuer("Cascade Rail")
            .with_rating(CreditRating::A),
        BondRecord::new("B7", dec!(0.0), 6, dec!(760))
            .with_issuer("Harbor Municipal Trust")
            .with_rating(CreditRating::AA),
        BondRecord::new("B8", dec!(7.25), 4, dec!(1040))
            .with_issuer("Summit Telecom")
            .with_rating(CreditRating::BB),
        BondRecord::new("B9", dec!(5.5), 12, dec!(1005))
            .with_issuer("Meridian Energy")
            .with_rating(CreditRating::BBB),
        BondRecord::new("B10", dec!(3.0), 15, dec!(880))
            .with_issuer("Atlas Sovereign Fund")
            .with_rating(CreditRating::AAA),
    ]
}

/// Returns the embedded reference table in its natural order.
pub fn load_universe() -> &'static [BondRecord] {
    &EMBEDDED_UNIVERSE
}

/// Selects the records whose id is in `ids`.
///
/// The universe's order is kept, whatever order `ids` comes in. Ids that
/// match nothing are ignored, and a repeated id selects its record once.
pub fn select_portfolio<S: AsRef<str>>(universe: &[BondRecord], ids: &[S]) -> Vec<BondRecord> {
    let wanted: HashSet<&str> = ids.iter().map(|s| s.as_ref()).collect();
    universe
        .iter()
        .filter(|bond| wanted.contains(bond.id.as_str()))
        .cloned()
        .collect()
}

/// An owned, read-only bond universe.
#[derive(Debug, Clone, PartialEq)]
pub struct BondUniverse {
    records: Vec<BondRecord>,
}

impl BondUniverse {
    /// A copy of the embedded reference table.
    pub fn embedded() -> Self {
        Self {
            records: load_universe().to_vec(),
        }
    }

    /// Builds a universe from records, rejecting duplicate ids.
    pub fn from_records(records: Vec<BondRecord>) -> CoreResult<Self> {
        let mut seen: HashSet<&BondId> = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(CoreError::duplicate_id(record.id.as_str()));
            }
        }
        Ok(Self { records })
    }

    /// All records in natural order.
    pub fn records(&self) -> &[BondRecord] {
        &self.records
    }

    /// Looks up a single record.
    pub fn get(&self, id: &str) -> Option<&BondRecord> {
        self.records.iter().find(|b| b.id.as_str() == id)
    }

    /// Returns true if `id` is in the universe.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// See [`select_portfolio`].
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Vec<BondRecord> {
        select_portfolio(&self.records, ids)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for BondUniverse {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(bonds: &[BondRecord]) -> Vec<&str> {
        bonds.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_embedded_universe() {
        let universe = load_universe();
        assert!(universe.len() >= 10);
        assert_eq!(universe[0].id.as_str(), "B1");
        assert_eq!(universe[0].coupon_rate, dec!(5.0));
        assert_eq!(universe[0].maturity_years, 5);
        assert_eq!(universe[0].price, dec!(980));
        assert_eq!(universe[1].price, dec!(1020));
        assert_eq!(universe[2].rating, CreditRating::AA);
        assert!(universe.iter().all(|b| b.face_value == dec!(1000)));
    }

    #[test]
    fn test_embedded_ids_unique() {
        assert!(BondUniverse::from_records(load_universe().to_vec()).is_ok());
    }

    #[test]
    fn test_select_keeps_natural_order() {
        let selected = select_portfolio(load_universe(), &["B4", "B2", "B1"]);
        assert_eq!(ids(&selected), vec!["B1", "B2", "B4"]);
    }

    #[test]
    fn test_select_omits_unknown_ids() {
        let selected = select_portfolio(load_universe(), &["B1", "NOPE"]);
        assert_eq!(ids(&selected), vec!["B1"]);

        let none = select_portfolio(load_universe(), &["NOPE"]);
        assert!(none.is_empty());
    }

    #[test]
    fn test_select_duplicate_ids_once() {
        let selected = select_portfolio(load_universe(), &["B3", "B3"]);
        assert_eq!(ids(&selected), vec!["B3"]);
    }

    #[test]
    fn test_select_empty_request() {
        let empty: [&str; 0] = [];
        assert!(select_portfolio(load_universe(), &empty).is_empty());
    }

    #[test]
    fn test_universe_rejects_duplicates() {
        let records = vec![
            BondRecord::new("X", dec!(1), 1, dec!(100)),
            BondRecord::new("X", dec!(2), 2, dec!(100)),
        ];
        let err = BondUniverse::from_records(records).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateId { ref id } if id == "X"));
    }

    #[test]
    fn test_universe_lookup() {
        let universe = BondUniverse::embedded();
        assert_eq!(universe.len(), load_universe().len());
        assert!(!universe.is_empty());
        assert!(universe.contains("B7"));
        assert!(!universe.contains("B99"));
        assert_eq!(universe.get("B7").map(|b| b.maturity_years), Some(6));
        assert_eq!(ids(&universe.select(&["B10", "B6"])), vec!["B6", "B10"]);
    }
}
