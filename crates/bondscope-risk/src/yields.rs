//! Approximate yield to maturity.
//!
//! ## Formula
//!
//! ```text
//! YTM ≈ (C + (F − P) / n) / ((F + P) / 2)
//! ```
//!
//! where:
//! - C = annual coupon (coupon rate × F)
//! - F = face value
//! - P = market price
//! - n = years to maturity
//!
//! This is the textbook closed-form approximation, not the root of the
//! pricing equation. No solver is involved.

use crate::error::RiskResult;
use crate::inputs::BondInputs;

/// Approximate yield to maturity in percent.
///
/// # Arguments
///
/// * `price` - Market price
/// * `face_value` - Face value
/// * `coupon_rate` - Annual coupon rate in percent (5.0 for 5%)
/// * `maturity` - Whole years to maturity (at least 1)
///
/// # Example
///
/// ```rust
/// use bondscope_risk::approximate_ytm;
///
/// // (50 + 20 / 5) / 990 × 100
/// let ytm = approximate_ytm(980.0, 1000.0, 5.0, 5).unwrap();
/// assert!((ytm - 54.0 / 990.0 * 100.0).abs() < 1e-12);
/// ```
pub fn approximate_ytm(
    price: f64,
    face_value: f64,
    coupon_rate: f64,
    maturity: u32,
) -> RiskResult<f64> {
    let inputs = BondInputs::new(price, face_value, coupon_rate, maturity)?;
    Ok(ytm_from_inputs(&inputs))
}

pub(crate) fn ytm_from_inputs(inputs: &BondInputs) -> f64 {
    let face = inputs.face_value();
    let price = inputs.price();
    let amortization = (face - price) / f64::from(inputs.maturity());
    let average_price = (face + price) / 2.0;

    (inputs.annual_coupon() + amortization) / average_price * 100.0
}
