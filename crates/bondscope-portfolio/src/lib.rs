//! # Bondscope Portfolio
//!
//! Value-weighted portfolio analytics and rate shock scenarios.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every calculation takes explicit inputs and returns new values
//! - **Market-value weights**: each bond's weight is its price over the total
//! - **Approximation only**: shocks use duration and convexity, bonds are never repriced
//!
//! ## Quick Start
//!
//! ```rust
//! use bondscope_core::{load_universe, select_portfolio};
//! use bondscope_portfolio::prelude::*;
//!
//! let bonds = select_portfolio(load_universe(), &["B1", "B2", "B3", "B4", "B5"]);
//! let portfolio = Portfolio::from_bonds(&bonds).unwrap();
//!
//! let scenario = run_scenario(&portfolio, 0.5).unwrap();
//! assert!(scenario.is_loss());
//!
//! let ladder = shock_ladder(&portfolio, &ShockGrid::default()).unwrap();
//! assert_eq!(ladder.len(), 41);
//! ```
//!
//! ## Module Overview
//!
//! - [`portfolio`] - Entries, weighting and the [`Portfolio`] type
//! - [`stress`] - Shock grids and scenario projection

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod portfolio;
pub mod stress;

pub use error::{ErrorKind, PortfolioError, PortfolioResult};
pub use portfolio::{
    aggregate, build_entries, market_value_weights, Aggregation, Portfolio, PortfolioEntry,
};
pub use stress::{
    run_scenario, shock_ladder, simulate, simulate_shock, PortfolioScenario, ScenarioResult,
    ShockGrid, MAX_GRID_POINTS,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ErrorKind, PortfolioError, PortfolioResult};
    pub use crate::portfolio::*;
    pub use crate::stress::*;
}
