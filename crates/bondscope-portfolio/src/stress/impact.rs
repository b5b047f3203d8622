//! Rate shock impact calculations.
//!
//! Projects the price of each bond under a parallel shock using
//! duration and convexity:
//!
//! ```text
//! ΔP/P (%) ≈ -D × s + 0.5 × C × s²
//! new price = P × (1 + ΔP/P / 100)
//! ```
//!
//! where `s` is the shock in percentage points.

use serde::{Deserialize, Serialize};

use bondscope_core::BondId;
use bondscope_risk::price_change_pct;

use super::scenarios::ShockGrid;
use crate::error::{PortfolioError, PortfolioResult};
use crate::portfolio::{Portfolio, PortfolioEntry};

/// Projected price of one bond under one shock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Bond identifier.
    pub bond_id: BondId,
    /// Shock applied, in percentage points.
    pub rate_shock: f64,
    /// Price before the shock.
    pub price: f64,
    /// Estimated price change in percent.
    pub price_change_pct: f64,
    /// Estimated price after the shock.
    pub new_price: f64,
}

/// Portfolio-wide outcome of one shock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioScenario {
    /// Shock applied, in percentage points.
    pub rate_shock: f64,
    /// Per-bond results in portfolio order.
    pub results: Vec<ScenarioResult>,
    /// Total market value before the shock.
    pub initial_value: f64,
    /// Total estimated value after the shock.
    pub stressed_value: f64,
    /// Absolute P&L.
    pub pnl: f64,
    /// P&L as a percentage of initial value.
    pub pnl_pct: f64,
}

impl PortfolioScenario {
    /// Returns true if this is a gain.
    #[must_use]
    pub fn is_gain(&self) -> bool {
        self.pnl > 0.0
    }

    /// Returns true if this is a loss.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.pnl < 0.0
    }
}

/// Projects one entry under `rate_shock`.
///
/// A zero shock leaves the price unchanged exactly.
#[must_use]
pub fn simulate(entry: &PortfolioEntry, rate_shock: f64) -> ScenarioResult {
    let change = price_change_pct(entry.duration, entry.convexity, rate_shock);
    ScenarioResult {
        bond_id: entry.bond_id.clone(),
        rate_shock,
        price: entry.market_value,
        price_change_pct: change,
        new_price: entry.market_value * (1.0 + change / 100.0),
    }
}

/// Projects every entry under `rate_shock`, in order.
///
/// # Errors
///
/// - [`PortfolioError::EmptyPortfolio`] for no entries
/// - [`PortfolioError::InvalidInput`] for a non-finite shock
pub fn simulate_shock(
    entries: &[PortfolioEntry],
    rate_shock: f64,
) -> PortfolioResult<Vec<ScenarioResult>> {
    if entries.is_empty() {
        return Err(PortfolioError::EmptyPortfolio);
    }
    if !rate_shock.is_finite() {
        return Err(PortfolioError::invalid_input(format!(
            "rate shock must be finite, got {rate_shock}"
        )));
    }

    Ok(entries.iter().map(|e| simulate(e, rate_shock)).collect())
}

/// Applies `rate_shock` to the whole portfolio and totals the result.
///
/// # Errors
///
/// Returns [`PortfolioError::InvalidInput`] for a non-finite shock or a
/// non-positive portfolio value.
pub fn run_scenario(portfolio: &Portfolio, rate_shock: f64) -> PortfolioResult<PortfolioScenario> {
    let results = simulate_shock(portfolio.entries(), rate_shock)?;

    let initial_value = portfolio.total_market_value();
    if initial_value <= 0.0 {
        return Err(PortfolioError::invalid_input(format!(
            "portfolio value must be positive, got {initial_value}"
        )));
    }
    let stressed_value: f64 = results.iter().map(|r| r.new_price).sum();
    let pnl = stressed_value - initial_value;
    let pnl_pct = pnl / initial_value * 100.0;

    tracing::debug!(rate_shock, pnl, "scenario run");

    Ok(PortfolioScenario {
        rate_shock,
        results,
        initial_value,
        stressed_value,
        pnl,
        pnl_pct,
    })
}

/// Runs [`run_scenario`] for every shock on `grid`.
///
/// # Errors
///
/// Returns [`PortfolioError::InvalidInput`] for an invalid grid.
pub fn shock_ladder(portfolio: &Portfolio, grid: &ShockGrid) -> PortfolioResult<Vec<PortfolioScenario>> {
    grid.validate()?;
    let scenarios = grid
        .shocks()
        .into_iter()
        .map(|shock| run_scenario(portfolio, shock))
        .collect::<PortfolioResult<Vec<_>>>()?;

    tracing::debug!(points = scenarios.len(), "shock ladder built");
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondscope_core::{load_universe, select_portfolio};

    fn entry(duration: f64, convexity: f64, market_value: f64) -> PortfolioEntry {
        PortfolioEntry {
            bond_id: BondId::new("T"),
            ytm: 5.0,
            duration,
            convexity,
            market_value,
            weight: 1.0,
        }
    }

    fn sample_portfolio() -> Portfolio {
        let bonds = select_portfolio(load_universe(), &["B1", "B2", "B3", "B4", "B5"]);
        Portfolio::from_bonds(&bonds).unwrap()
    }

    #[test]
    fn test_simulate_formula() {
        let result = simulate(&entry(4.5, 0.25, 980.0), 1.0);
        assert_relative_eq!(result.price_change_pct, -4.5 + 0.125, epsilon = 1e-12);
        assert_relative_eq!(result.new_price, 980.0 * (1.0 - 0.04375), epsilon = 1e-9);
        assert_eq!(result.price, 980.0);
        assert_eq!(result.rate_shock, 1.0);
    }

    #[test]
    fn test_zero_shock_is_identity() {
        let result = simulate(&entry(7.3, 0.61, 1020.0), 0.0);
        assert_eq!(result.price_change_pct, 0.0);
        assert_eq!(result.new_price, 1020.0);
    }

    #[test]
    fn test_shock_direction() {
        let e = entry(6.0, 0.4, 1000.0);
        assert!(simulate(&e, 0.5).new_price < 1000.0);
        assert!(simulate(&e, -0.5).new_price > 1000.0);
    }

    #[test]
    fn test_simulate_shock_errors() {
        assert_eq!(simulate_shock(&[], 1.0).unwrap_err(), PortfolioError::EmptyPortfolio);
        let err = simulate_shock(&[entry(1.0, 0.0, 100.0)], f64::NAN).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidInput { .. }));
    }

    #[test]
    fn test_run_scenario_totals() {
        let portfolio = sample_portfolio();
        let scenario = run_scenario(&portfolio, 1.0).unwrap();

        assert_eq!(scenario.results.len(), 5);
        assert_relative_eq!(scenario.initial_value, portfolio.total_market_value());
        let total: f64 = scenario.results.iter().map(|r| r.new_price).sum();
        assert_relative_eq!(scenario.stressed_value, total);
        assert!(scenario.is_loss());
        assert!(!scenario.is_gain());
        assert_relative_eq!(
            scenario.pnl_pct,
            scenario.pnl / scenario.initial_value * 100.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_run_scenario_zero_shock() {
        let portfolio = sample_portfolio();
        let scenario = run_scenario(&portfolio, 0.0).unwrap();
        for (result, entry) in scenario.results.iter().zip(portfolio.entries()) {
            assert_eq!(result.new_price, entry.market_value);
        }
        assert!(!scenario.is_gain());
        assert!(!scenario.is_loss());
    }

    #[test]
    fn test_shock_ladder() {
        let portfolio = sample_portfolio();
        let ladder = shock_ladder(&portfolio, &ShockGrid::default()).unwrap();

        assert_eq!(ladder.len(), 41);
        assert_eq!(ladder[20].rate_shock, 0.0);
        assert!(ladder[0].is_gain());
        assert!(ladder[40].is_loss());
    }

    #[test]
    fn test_shock_ladder_invalid_grid() {
        let portfolio = sample_portfolio();
        let grid = ShockGrid {
            min: 1.0,
            max: -1.0,
            step: 0.1,
        };
        assert!(shock_ladder(&portfolio, &grid).is_err());
    }

    #[test]
    fn test_shock_ladder_rejects_oversized_grid() {
        let portfolio = sample_portfolio();
        let grid = ShockGrid {
            min: -2.0,
            max: 2.0,
            step: 1e-300,
        };
        let err = shock_ladder(&portfolio, &grid).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidInput { .. }));
    }
}
