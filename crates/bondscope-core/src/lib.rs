//! # Bondscope Core
//!
//! Reference data for the Bondscope bond risk analytics workspace.
//!
//! This crate holds the immutable inputs every other crate works from:
//!
//! - **Types**: [`BondRecord`], [`BondId`], [`CreditRating`]
//! - **Universe**: the embedded reference table of candidate bonds and
//!   selection by identifier
//! - **Reference data**: loading a universe from a CSV file with the same columns
//!
//! ## Design Philosophy
//!
//! - **Read-only**: the universe is built once and exposed through accessors only
//! - **No validation at load**: records are accepted as given; analytics reject
//!   bad rows when they are actually used
//!
//! ## Example
//!
//! ```rust
//! use bondscope_core::prelude::*;
//!
//! let universe = load_universe();
//! let selected = select_portfolio(universe, &["B3", "B1", "XX"]);
//!
//! // Natural order is kept, unknown ids are dropped
//! let ids: Vec<&str> = selected.iter().map(|b| b.id.as_str()).collect();
//! assert_eq!(ids, vec!["B1", "B3"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod reference_data;
pub mod types;
pub mod universe;

pub use error::{CoreError, CoreResult};
pub use types::{BondId, BondRecord, CreditRating};
pub use universe::{load_universe, select_portfolio, BondUniverse};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{BondId, BondRecord, CreditRating};
    pub use crate::universe::{load_universe, select_portfolio, BondUniverse};
    pub use rust_decimal::Decimal;
}
