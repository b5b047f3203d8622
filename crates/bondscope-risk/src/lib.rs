//! # bondscope-risk
//!
//! Risk analytics for annual-coupon bonds with whole-year maturities.
//!
//! This crate provides the per-bond calculations:
//!
//! - **Yield**: closed-form approximate yield to maturity
//! - **Duration**: Macaulay duration discounted at the approximate yield
//! - **Convexity**: discounted at the approximate yield, scaled by [`CONVEXITY_SCALE`]
//! - **Calculator**: all three for a [`bondscope_core::BondRecord`] in one call
//!
//! Every function is pure. Invalid inputs and degenerate discount rates are
//! returned as [`RiskError`] values, never as NaN or infinity.
//!
//! ## Example
//!
//! ```rust
//! use bondscope_risk::prelude::*;
//!
//! let ytm = approximate_ytm(980.0, 1000.0, 5.0, 5).unwrap();
//! assert!((ytm - 5.4545).abs() < 1e-4);
//!
//! let duration = macaulay_duration(980.0, 1000.0, 5.0, 5).unwrap();
//! assert!(duration > 1.0 && duration <= 5.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod calculator;
pub mod convexity;
pub mod duration;
mod error;
mod inputs;
pub mod yields;

pub use calculator::{compute_metrics, BondMetrics, BondRiskCalculator};
pub use convexity::{convexity, price_change_pct, CONVEXITY_SCALE};
pub use duration::macaulay_duration;
pub use error::{RiskError, RiskResult};
pub use inputs::BondInputs;
pub use yields::approximate_ytm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::*;
    pub use crate::convexity::*;
    pub use crate::duration::*;
    pub use crate::yields::*;
    pub use crate::{BondInputs, RiskError, RiskResult};
}
