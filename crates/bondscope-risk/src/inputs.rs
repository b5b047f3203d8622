//! Validated bond inputs shared by the yield, duration and convexity routines.

use serde::{Deserialize, Serialize};

use crate::error::{RiskError, RiskResult};

/// The four numbers every metric needs, checked once.
///
/// Construction fails with [`RiskError::InvalidInput`] when:
/// - `maturity < 1`
/// - `price <= 0` or not finite
/// - `face_value <= 0` or not finite
/// - `coupon_rate < 0` or not finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondInputs {
    price: f64,
    face_value: f64,
    coupon_rate: f64,
    maturity: u32,
}

impl BondInputs {
    /// Validates and wraps the inputs.
    ///
    /// # Arguments
    ///
    /// * `price` - Market price in currency units
    /// * `face_value` - Redemption value in currency units
    /// * `coupon_rate` - Annual coupon in percent (5.0 for 5%)
    /// * `maturity` - Whole years to maturity
    pub fn new(price: f64, face_value: f64, coupon_rate: f64, maturity: u32) -> RiskResult<Self> {
        if maturity < 1 {
            return Err(RiskError::invalid_input(
                "maturity",
                maturity,
                "must be at least 1 year",
            ));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(RiskError::invalid_input("price", price, "must be positive"));
        }
        if !face_value.is_finite() || face_value <= 0.0 {
            return Err(RiskError::invalid_input(
                "face_value",
                face_value,
                "must be positive",
            ));
        }
        if !coupon_rate.is_finite() || coupon_rate < 0.0 {
            return Err(RiskError::invalid_input(
                "coupon_rate",
                coupon_rate,
                "must be non-negative",
            ));
        }

        Ok(Self {
            price,
            face_value,
            coupon_rate,
            maturity,
        })
    }

    /// Market price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Face value.
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Coupon rate in percent.
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Years to maturity.
    pub fn maturity(&self) -> u32 {
        self.maturity
    }

    /// Annual coupon cash flow, `coupon_rate / 100 × face_value`.
    pub fn annual_coupon(&self) -> f64 {
        self.coupon_rate / 100.0 * self.face_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs() {
        let inputs = BondInputs::new(980.0, 1000.0, 5.0, 5).unwrap();
        assert_eq!(inputs.price(), 980.0);
        assert_eq!(inputs.face_value(), 1000.0);
        assert_eq!(inputs.coupon_rate(), 5.0);
        assert_eq!(inputs.maturity(), 5);
        assert_eq!(inputs.annual_coupon(), 50.0);
    }

    #[test]
    fn test_zero_maturity_rejected() {
        let err = BondInputs::new(980.0, 1000.0, 5.0, 0).unwrap_err();
        assert!(matches!(err, RiskError::InvalidInput { field: "maturity", .. }));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = BondInputs::new(price, 1000.0, 5.0, 5).unwrap_err();
            assert!(matches!(err, RiskError::InvalidInput { field: "price", .. }));
        }
    }

    #[test]
    fn test_non_positive_face_rejected() {
        let err = BondInputs::new(980.0, 0.0, 5.0, 5).unwrap_err();
        assert!(matches!(err, RiskError::InvalidInput { field: "face_value", .. }));
    }

    #[test]
    fn test_negative_coupon_rejected() {
        let err = BondInputs::new(980.0, 1000.0, -0.5, 5).unwrap_err();
        assert!(matches!(err, RiskError::InvalidInput { field: "coupon_rate", .. }));
    }

    #[test]
    fn test_zero_coupon_allowed() {
        assert!(BondInputs::new(800.0, 1000.0, 0.0, 5).is_ok());
    }
}
