//! Portfolio type.

use serde::{Deserialize, Serialize};

use bondscope_core::BondRecord;

use super::aggregation::{aggregate, Aggregation};
use super::entry::{build_entries, PortfolioEntry};
use crate::error::{PortfolioError, PortfolioResult};

/// An analysed, value-weighted selection of bonds.
///
/// A `Portfolio` always has at least one entry: construction from an empty
/// selection fails with [`crate::PortfolioError::EmptyPortfolio`].
/// Deserialization goes through [`Portfolio::from_entries`], so stored
/// weights and aggregates are recomputed rather than trusted.
///
/// # Example
///
/// ```rust
/// use bondscope_core::{load_universe, select_portfolio};
/// use bondscope_portfolio::Portfolio;
///
/// let bonds = select_portfolio(load_universe(), &["B1", "B2"]);
/// let portfolio = Portfolio::from_bonds(&bonds).unwrap();
///
/// assert_eq!(portfolio.len(), 2);
/// assert!((portfolio.entries()[0].weight - 0.49).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PortfolioData")]
pub struct Portfolio {
    entries: Vec<PortfolioEntry>,
    aggregation: Aggregation,
}

#[derive(Deserialize)]
struct PortfolioData {
    entries: Vec<PortfolioEntry>,
}

impl TryFrom<PortfolioData> for Portfolio {
    type Error = PortfolioError;

    fn try_from(data: PortfolioData) -> Result<Self, Self::Error> {
        Self::from_entries(data.entries)
    }
}

impl Portfolio {
    /// Analyses and weights the given bonds, keeping their order.
    pub fn from_bonds(bonds: &[BondRecord]) -> PortfolioResult<Self> {
        let entries = build_entries(bonds)?;
        Self::from_entries(entries)
    }

    /// Builds a portfolio from precomputed entries.
    ///
    /// Entry weights are replaced with the market-value weights.
    pub fn from_entries(mut entries: Vec<PortfolioEntry>) -> PortfolioResult<Self> {
        let aggregation = aggregate(&entries)?;
        for (entry, weight) in entries.iter_mut().zip(&aggregation.weights) {
            entry.weight = *weight;
        }
        Ok(Self {
            entries,
            aggregation,
        })
    }

    /// Entries in selection order.
    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    /// Looks up an entry by bond id.
    pub fn entry(&self, bond_id: &str) -> Option<&PortfolioEntry> {
        self.entries.iter().find(|e| e.bond_id.as_str() == bond_id)
    }

    /// Portfolio-level aggregates.
    pub fn aggregation(&self) -> &Aggregation {
        &self.aggregation
    }

    /// Value-weighted average duration.
    pub fn weighted_duration(&self) -> f64 {
        self.aggregation.weighted_duration
    }

    /// Value-weighted average yield in percent.
    pub fn weighted_ytm(&self) -> f64 {
        self.aggregation.weighted_ytm
    }

    /// Value-weighted average convexity.
    pub fn weighted_convexity(&self) -> f64 {
        self.aggregation.weighted_convexity
    }

    /// Sum of market values.
    pub fn total_market_value(&self) -> f64 {
        self.aggregation.total_market_value
    }

    /// Shortest individual duration.
    pub fn min_duration(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.duration)
            .fold(f64::INFINITY, f64::min)
    }

    /// Longest individual duration.
    pub fn max_duration(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.duration)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false, since construction rejects empty selections.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondscope_core::{load_universe, select_portfolio, BondId};

    #[test]
    fn test_from_bonds() {
        let bonds = select_portfolio(load_universe(), &["B1", "B2", "B3", "B4", "B5"]);
        let portfolio = Portfolio::from_bonds(&bonds).unwrap();

        assert_eq!(portfolio.len(), 5);
        assert!(!portfolio.is_empty());
        let sum: f64 = portfolio.entries().iter().map(|e| e.weight).sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
        assert_relative_eq!(portfolio.total_market_value(), 980.0 + 1020.0 + 950.0 + 1000.0 + 990.0);
        assert!(portfolio.weighted_duration() >= portfolio.min_duration());
        assert!(portfolio.weighted_duration() <= portfolio.max_duration());
    }

    #[test]
    fn test_entry_lookup() {
        let bonds = select_portfolio(load_universe(), &["B1", "B3"]);
        let portfolio = Portfolio::from_bonds(&bonds).unwrap();
        assert!(portfolio.entry("B3").is_some());
        assert!(portfolio.entry("B2").is_none());
    }

    #[test]
    fn test_from_entries_resets_weights() {
        let entries = vec![
            PortfolioEntry {
                bond_id: BondId::new("A"),
                ytm: 4.0,
                duration: 3.0,
                convexity: 0.1,
                market_value: 300.0,
                weight: 0.0,
            },
            PortfolioEntry {
                bond_id: BondId::new("B"),
                ytm: 6.0,
                duration: 7.0,
                convexity: 0.5,
                market_value: 100.0,
                weight: 0.0,
            },
        ];
        let portfolio = Portfolio::from_entries(entries).unwrap();
        assert_eq!(portfolio.entries()[0].weight, 0.75);
        assert_eq!(portfolio.entries()[1].weight, 0.25);
        assert_relative_eq!(portfolio.weighted_duration(), 4.0);
        assert_relative_eq!(portfolio.weighted_ytm(), 4.5);
        assert_relative_eq!(portfolio.weighted_convexity(), 0.2);
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            Portfolio::from_bonds(&[]).unwrap_err(),
            PortfolioError::EmptyPortfolio
        );
        assert_eq!(
            Portfolio::from_entries(Vec::new()).unwrap_err(),
            PortfolioError::EmptyPortfolio
        );
    }

    #[test]
    fn test_deserialize_recomputes_weights() {
        let bonds = select_portfolio(load_universe(), &["B1", "B2", "B3"]);
        let portfolio = Portfolio::from_bonds(&bonds).unwrap();
        let json = serde_json::to_string(&portfolio).unwrap();
        let restored: Portfolio = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, portfolio);

        let tampered = r#"{"entries":[
            {"bond_id":"A","ytm":4.0,"duration":3.0,"convexity":0.1,"market_value":300.0,"weight":0.9},
            {"bond_id":"B","ytm":6.0,"duration":7.0,"convexity":0.5,"market_value":100.0,"weight":0.9}
        ],"aggregation":{"weights":[0.5,0.5],"weighted_duration":0.0,"weighted_ytm":0.0,
            "weighted_convexity":0.0,"total_market_value":1.0}}"#;
        let portfolio: Portfolio = serde_json::from_str(tampered).unwrap();
        assert_eq!(portfolio.entries()[0].weight, 0.75);
        assert_relative_eq!(portfolio.total_market_value(), 400.0);
        assert_relative_eq!(portfolio.weighted_duration(), 4.0);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Portfolio>(r#"{"entries":[]}"#).is_err());
        let negative = r#"{"entries":[{"bond_id":"A","ytm":4.0,"duration":3.0,
            "convexity":0.1,"market_value":-5.0,"weight":1.0}]}"#;
        assert!(serde_json::from_str::<Portfolio>(negative).is_err());
    }
}
