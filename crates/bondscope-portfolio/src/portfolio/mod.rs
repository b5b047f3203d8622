//! Portfolio construction and aggregation.
//!
//! Selection → per-bond metrics ([`build_entries`]) → value weighting
//! ([`aggregate`]) → [`Portfolio`]. Each step returns new values; nothing is
//! updated in place.

mod aggregation;
mod entry;
#[allow(clippy::module_inception)]
mod portfolio;

pub use aggregation::{aggregate, market_value_weights, Aggregation};
pub use entry::{build_entries, PortfolioEntry};
pub use portfolio::Portfolio;
