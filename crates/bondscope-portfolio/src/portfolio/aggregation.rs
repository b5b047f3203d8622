//! Market-value weighting and weighted averages.

use serde::{Deserialize, Serialize};

use super::entry::PortfolioEntry;
use crate::error::{PortfolioError, PortfolioResult};

/// Portfolio-level aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Weight of each entry, in entry order. Sums to 1.
    pub weights: Vec<f64>,
    /// Σ weight × duration.
    pub weighted_duration: f64,
    /// Σ weight × ytm.
    pub weighted_ytm: f64,
    /// Σ weight × convexity.
    pub weighted_convexity: f64,
    /// Σ market value.
    pub total_market_value: f64,
}

/// Normalizes market values into weights.
///
/// # Errors
///
/// - [`PortfolioError::EmptyPortfolio`] for no values
/// - [`PortfolioError::InvalidInput`] if any value is not a positive finite number
pub fn market_value_weights(market_values: &[f64]) -> PortfolioResult<Vec<f64>> {
    if market_values.is_empty() {
        return Err(PortfolioError::EmptyPortfolio);
    }
    if let Some(bad) = market_values.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
        return Err(PortfolioError::invalid_input(format!(
            "market value must be positive, got {bad}"
        )));
    }

    let total: f64 = market_values.iter().sum();
    if !total.is_finite() {
        return Err(PortfolioError::invalid_input("total market value overflows"));
    }

    Ok(market_values.iter().map(|v| v / total).collect())
}

/// Weights entries by market value and computes the weighted averages.
///
/// Weights are recomputed from `market_value`; the entries' own `weight`
/// fields are not read.
///
/// # Errors
///
/// - [`PortfolioError::EmptyPortfolio`] for no entries
/// - [`PortfolioError::InvalidInput`] for a non-positive market value
pub fn aggregate(entries: &[PortfolioEntry]) -> PortfolioResult<Aggregation> {
    let market_values: Vec<f64> = entries.iter().map(|e| e.market_value).collect();
    let weights = market_value_weights(&market_values)?;

    let weighted_duration = weighted_sum(entries, &weights, |e| e.duration);
    let weighted_ytm = weighted_sum(entries, &weights, |e| e.ytm);
    let weighted_convexity = weighted_sum(entries, &weights, |e| e.convexity);

    Ok(Aggregation {
        total_market_value: market_values.iter().sum(),
        weights,
        weighted_duration,
        weighted_ytm,
        weighted_convexity,
    })
}

fn weighted_sum<F>(entries: &[PortfolioEntry], weights: &[f64], metric: F) -> f64
where
    F: Fn(&PortfolioEntry) -> f64,
{
    entries
        .iter()
        .zip(weights)
        .map(|(e, w)| w * metric(e))
        .sum()
}
