//! Integrated risk calculator for bonds.
//!
//! [`BondRiskCalculator`] validates a bond's inputs once and computes the
//! yield, duration and convexity from them. [`compute_metrics`] is the
//! one-call version for a reference record.
//!
//! # Example
//!
//! ```rust
//! use bondscope_core::load_universe;
//! use bondscope_risk::compute_metrics;
//!
//! let b1 = &load_universe()[0];
//! let metrics = compute_metrics(b1).unwrap();
//!
//! assert!(metrics.ytm > 5.0);
//! assert!(metrics.duration <= f64::from(b1.maturity_years));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bondscope_core::BondRecord;

use crate::convexity::{convexity_from_inputs, price_change_pct};
use crate::duration::duration_from_inputs;
use crate::error::{RiskError, RiskResult};
use crate::inputs::BondInputs;
use crate::yields::ytm_from_inputs;

/// Risk metrics for one bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondMetrics {
    /// Approximate yield to maturity in percent.
    pub ytm: f64,
    /// Macaulay duration in years.
    pub duration: f64,
    /// Convexity, scaled by [`crate::CONVEXITY_SCALE`].
    pub convexity: f64,
}

impl BondMetrics {
    /// Estimated price change in percent for a parallel shock in percent.
    pub fn price_change_pct(&self, rate_shock_pct: f64) -> f64 {
        price_change_pct(self.duration, self.convexity, rate_shock_pct)
    }
}

/// Calculator for bond risk metrics.
#[derive(Debug, Clone, Copy)]
pub struct BondRiskCalculator {
    inputs: BondInputs,
}

impl BondRiskCalculator {
    /// Creates a calculator from raw inputs.
    pub fn new(price: f64, face_value: f64, coupon_rate: f64, maturity: u32) -> RiskResult<Self> {
        Ok(Self {
            inputs: BondInputs::new(price, face_value, coupon_rate, maturity)?,
        })
    }

    /// Creates a calculator for a reference record.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidInput`] if the record's numbers are
    /// outside the formulas' domain.
    pub fn from_bond(bond: &BondRecord) -> RiskResult<Self> {
        Self::new(
            to_f64(bond.price, "price")?,
            to_f64(bond.face_value, "face_value")?,
            to_f64(bond.coupon_rate, "coupon_rate")?,
            bond.maturity_years,
        )
    }

    /// Approximate yield to maturity in percent.
    pub fn ytm(&self) -> f64 {
        ytm_from_inputs(&self.inputs)
    }

    /// Macaulay duration in years.
    pub fn duration(&self) -> RiskResult<f64> {
        duration_from_inputs(&self.inputs)
    }

    /// Scaled convexity.
    pub fn convexity(&self) -> RiskResult<f64> {
        convexity_from_inputs(&self.inputs)
    }

    /// Calculates all risk metrics at once.
    pub fn all_metrics(&self) -> RiskResult<BondMetrics> {
        Ok(BondMetrics {
            ytm: self.ytm(),
            duration: self.duration()?,
            convexity: self.convexity()?,
        })
    }

    /// Returns the validated inputs.
    pub fn inputs(&self) -> &BondInputs {
        &self.inputs
    }
}

/// Computes yield, duration and convexity for a reference record.
///
/// # Errors
///
/// - [`RiskError::InvalidInput`] when maturity < 1, price <= 0, face value <= 0
///   or coupon < 0
/// - [`RiskError::DegenerateRate`] when `1 + y <= 0`
pub fn compute_metrics(bond: &BondRecord) -> RiskResult<BondMetrics> {
    BondRiskCalculator::from_bond(bond)?.all_metrics()
}

fn to_f64(value: Decimal, field: &'static str) -> RiskResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| RiskError::invalid_input(field, value, "not representable as f64"))
}
