//! Per-bond portfolio entries.

use serde::{Deserialize, Serialize};

use bondscope_core::{BondId, BondRecord};
use bondscope_risk::{BondMetrics, BondRiskCalculator};

use super::aggregation::market_value_weights;
use crate::error::{PortfolioError, PortfolioResult};

/// Computed view of one selected bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    /// Bond identifier.
    pub bond_id: BondId,
    /// Approximate yield to maturity in percent.
    pub ytm: f64,
    /// Macaulay duration in years.
    pub duration: f64,
    /// Scaled convexity.
    pub convexity: f64,
    /// Market value (the bond's price).
    pub market_value: f64,
    /// Market value over the selection's total market value.
    pub weight: f64,
}

impl PortfolioEntry {
    /// The risk metrics of this entry.
    #[must_use]
    pub fn metrics(&self) -> BondMetrics {
        BondMetrics {
            ytm: self.ytm,
            duration: self.duration,
            convexity: self.convexity,
        }
    }
}

/// Computes metrics and market-value weights for each bond, in order.
///
/// # Errors
///
/// - [`PortfolioError::EmptyPortfolio`] for an empty selection
/// - [`PortfolioError::Metrics`] naming the first bond whose metrics fail
pub fn build_entries(bonds: &[BondRecord]) -> PortfolioResult<Vec<PortfolioEntry>> {
    if bonds.is_empty() {
        return Err(PortfolioError::EmptyPortfolio);
    }

    let mut computed = Vec::with_capacity(bonds.len());
    for bond in bonds {
        let calc = BondRiskCalculator::from_bond(bond)
            .map_err(|e| PortfolioError::metrics(bond.id.as_str(), e))?;
        let metrics = calc
            .all_metrics()
            .map_err(|e| PortfolioError::metrics(bond.id.as_str(), e))?;
        computed.push((bond.id.clone(), metrics, calc.inputs().price()));
    }

    let market_values: Vec<f64> = computed.iter().map(|(_, _, mv)| *mv).collect();
    let weights = market_value_weights(&market_values)?;

    tracing::debug!(count = computed.len(), "portfolio entries built");

    Ok(computed
        .into_iter()
        .zip(weights)
        .map(|((bond_id, metrics, market_value), weight)| PortfolioEntry {
            bond_id,
            ytm: metrics.ytm,
            duration: metrics.duration,
            convexity: metrics.convexity,
            market_value,
            weight,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondscope_core::{load_universe, select_portfolio};
    use bondscope_risk::RiskError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_build_entries_order_and_weights() {
        let bonds = select_portfolio(load_universe(), &["B2", "B1"]);
        let entries = build_entries(&bonds).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].bond_id.as_str(), "B1");
        assert_eq!(entries[1].bond_id.as_str(), "B2");
        assert_relative_eq!(entries[0].market_value, 980.0);
        assert_relative_eq!(entries[0].weight, 0.49, epsilon = 1e-12);
        assert_relative_eq!(entries[1].weight, 0.51, epsilon = 1e-12);
    }

    #[test]
    fn test_entry_metrics_match_risk_crate() {
        let bond = BondRecord::new("B1", dec!(5.0), 5, dec!(980));
        let entries = build_entries(std::slice::from_ref(&bond)).unwrap();
        let expected = bondscope_risk::compute_metrics(&bond).unwrap();

        assert_eq!(entries[0].metrics(), expected);
        assert_eq!(entries[0].weight, 1.0);
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(build_entries(&[]).unwrap_err(), PortfolioError::EmptyPortfolio);
    }

    #[test]
    fn test_bad_bond_is_named() {
        let bonds = vec![
            BondRecord::new("OK", dec!(5.0), 5, dec!(980)),
            BondRecord::new("BAD", dec!(5.0), 0, dec!(980)),
        ];
        match build_entries(&bonds).unwrap_err() {
            PortfolioError::Metrics { bond_id, source } => {
                assert_eq!(bond_id, "BAD");
                assert!(matches!(source, RiskError::InvalidInput { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_price_bond_rejected() {
        let bonds = vec![BondRecord::new("Z", dec!(5.0), 5, Decimal::ZERO)];
        let err = build_entries(&bonds).unwrap_err();
        assert!(matches!(err, PortfolioError::Metrics { .. }));
    }
}
