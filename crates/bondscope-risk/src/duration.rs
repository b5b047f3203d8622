//! Macaulay duration.
//!
//! Duration is the present-value weighted average time to the bond's cash
//! flows. Cash flows are annual coupons in years 1..=n plus the face value
//! at n, all discounted at the approximate yield from [`crate::yields`].
//!
//! ## Formula
//!
//! ```text
//! D = [ Σ_{t=1}^{n} t × C / (1+y)^t  +  n × F / (1+y)^n ] / P
//! ```
//!
//! The divisor is the market price, not the sum of discounted cash flows.
//! Because the approximate yield does not reprice the bond exactly, D is
//! not bounded by n in general. It equals n for a zero-coupon bond trading
//! at face value.

use crate::error::{RiskError, RiskResult};
use crate::inputs::BondInputs;
use crate::yields::ytm_from_inputs;

/// Macaulay duration in years.
///
/// # Arguments
///
/// * `price` - Market price
/// * `face_value` - Face value
/// * `coupon_rate` - Annual coupon rate in percent
/// * `maturity` - Whole years to maturity (at least 1)
///
/// # Errors
///
/// - [`RiskError::InvalidInput`] for inputs outside the formula's domain
/// - [`RiskError::DegenerateRate`] when `1 + y <= 0`
pub fn macaulay_duration(
    price: f64,
    face_value: f64,
    coupon_rate: f64,
    maturity: u32,
) -> RiskResult<f64> {
    let inputs = BondInputs::new(price, face_value, coupon_rate, maturity)?;
    duration_from_inputs(&inputs)
}

pub(crate) fn duration_from_inputs(inputs: &BondInputs) -> RiskResult<f64> {
    let ytm_pct = ytm_from_inputs(inputs);
    let base = discount_base(ytm_pct)?;

    let coupon = inputs.annual_coupon();
    let n = inputs.maturity();

    let mut weighted_pv = 0.0;
    let mut df = 1.0;
    for t in 1..=n {
        df /= base;
        weighted_pv += f64::from(t) * coupon * df;
    }
    // df is now (1+y)^-n
    weighted_pv += f64::from(n) * inputs.face_value() * df;

    finite_or_degenerate(weighted_pv / inputs.price(), ytm_pct)
}

/// Returns `1 + y` for a yield in percent, rejecting non-positive bases.
pub(crate) fn discount_base(ytm_pct: f64) -> RiskResult<f64> {
    let base = 1.0 + ytm_pct / 100.0;
    if base.is_finite() && base > 0.0 {
        Ok(base)
    } else {
        Err(RiskError::degenerate_rate(ytm_pct))
    }
}

/// A base just above zero can overflow the discount factors.
pub(crate) fn finite_or_degenerate(value: f64, ytm_pct: f64) -> RiskResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RiskError::degenerate_rate(ytm_pct))
    }
}
