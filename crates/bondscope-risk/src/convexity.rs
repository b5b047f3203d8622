//! Convexity and the duration-convexity price approximation.
//!
//! ## Formula
//!
//! ```text
//! C = [ Σ_{t=1}^{n} t(t+1) × C_f / (1+y)^(t+2)  +  n(n+1) × F / (1+y)^(n+2) ] / (P × CONVEXITY_SCALE)
//! ```
//!
//! with `C_f` the annual coupon and `y` the approximate yield as a decimal.
//!
//! ## Scaling
//!
//! The raw sum divided by price is the convexity for yield changes measured
//! as decimals. [`CONVEXITY_SCALE`] divides it by a further 100 so that
//! [`price_change_pct`] can take the rate shock in percent and return the
//! price change in percent with a single formula for both terms.

use crate::duration::{discount_base, finite_or_degenerate};
use crate::error::RiskResult;
use crate::inputs::BondInputs;
use crate::yields::ytm_from_inputs;

/// Extra divisor applied to `raw_sum / price`.
///
/// `1.0` gives the per-decimal convexity; `100.0` (the value used here)
/// gives convexity per percentage point, matching shocks quoted in percent.
pub const CONVEXITY_SCALE: f64 = 100.0;

/// Convexity, scaled by [`CONVEXITY_SCALE`].
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
/// - [`crate::RiskError::InvalidInput`] for inputs outside the formula's domain
/// - [`crate::RiskError::DegenerateRate`] when `1 + y <= 0`
pub fn convexity(price: f64, face_value: f64, coupon_rate: f64, maturity: u32) -> RiskResult<f64> {
    let inputs = BondInputs::new(price, face_value, coupon_rate, maturity)?;
    convexity_from_inputs(&inputs)
}

pub(crate) fn convexity_from_inputs(inputs: &BondInputs) -> RiskResult<f64> {
    let ytm_pct = ytm_from_inputs(inputs);
    let base = discount_base(ytm_pct)?;
    let base_sq = base * base;

    let coupon = inputs.annual_coupon();
    let n = inputs.maturity();

    let mut sum = 0.0;
    let mut df = 1.0;
    for t in 1..=n {
        df /= base;
        let t = f64::from(t);
        sum += t * (t + 1.0) * coupon * df / base_sq;
    }
    let n = f64::from(n);
    sum += n * (n + 1.0) * inputs.face_value() * df / base_sq;

    finite_or_degenerate(sum / (inputs.price() * CONVEXITY_SCALE), ytm_pct)
}

/// Second-order price change in percent for a parallel rate shock.
///
/// # Formula
///
/// ```text
/// ΔP/P (%) ≈ −D × Δr + ½ × C × Δr²
/// ```
///
/// with Δr the shock in percent (0.5 = +50 bp), D in years and C scaled by
/// [`CONVEXITY_SCALE`]. A zero shock returns exactly `0.0`.
pub fn price_change_pct(duration: f64, convexity: f64, rate_shock_pct: f64) -> f64 {
    if rate_shock_pct == 0.0 {
        return 0.0;
    }
    let duration_effect = -duration * rate_shock_pct;
    let convexity_effect = 0.5 * convexity * rate_shock_pct * rate_shock_pct;
    duration_effect + convexity_effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RiskError;
    use approx::assert_relative_eq;

    fn reference_convexity(price: f64, face: f64, coupon_rate: f64, n: i32) -> f64 {
        let c = coupon_rate / 100.0 * face;
        let y = (c + (face - price) / f64::from(n)) / ((face + price) / 2.0);
        let coupons: f64 = (1..=n)
            .map(|t| f64::from(t * (t + 1)) * c / (1.0 + y).powi(t + 2))
            .sum();
        let principal = f64::from(n * (n + 1)) * face / (1.0 + y).powi(n + 2);
        (coupons + principal) / price
    }

    #[test]
    fn test_matches_direct_evaluation() {
        for (p, f, c, n) in [
            (980.0, 1000.0, 5.0, 5),
            (1020.0, 1000.0, 3.5, 10),
            (950.0, 1000.0, 6.0, 3),
            (880.0, 1000.0, 3.0, 15),
        ] {
            let conv = convexity(p, f, c, n).unwrap();
            let expected = reference_convexity(p, f, c, n as i32) / CONVEXITY_SCALE;
            assert_relative_eq!(conv, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_zero_coupon_at_face() {
        // y = 0, so C = n(n+1) × F / P / scale
        let conv = convexity(1000.0, 1000.0, 0.0, 4).unwrap();
        assert_relative_eq!(conv, 20.0 / CONVEXITY_SCALE, epsilon = 1e-12);
    }

    #[test]
    fn test_positive_and_grows_with_maturity() {
        let short = convexity(1000.0, 1000.0, 4.0, 3).unwrap();
        let long = convexity(1000.0, 1000.0, 4.0, 10).unwrap();
        assert!(short > 0.0);
        assert!(long > short);
    }

    #[test]
    fn test_errors() {
        assert!(convexity(980.0, 1000.0, 5.0, 0).unwrap_err().is_invalid_input());
        assert!(convexity(0.0, 1000.0, 5.0, 5).unwrap_err().is_invalid_input());
        assert!(matches!(
            convexity(5000.0, 1000.0, 0.0, 1).unwrap_err(),
            RiskError::DegenerateRate { .. }
        ));
    }

    #[test]
    fn test_price_change_zero_shock() {
        assert_eq!(price_change_pct(4.5, 0.25, 0.0), 0.0);
        assert_eq!(price_change_pct(4.5, 0.25, -0.0), 0.0);
    }

    #[test]
    fn test_price_change_pct() {
        // -5 × 1 + 0.5 × 0.5 × 1
        assert_relative_eq!(price_change_pct(5.0, 0.5, 1.0), -4.75, epsilon = 1e-12);
        // -5 × -1 + 0.5 × 0.5 × 1
        assert_relative_eq!(price_change_pct(5.0, 0.5, -1.0), 5.25, epsilon = 1e-12);
    }
}
