//! Bond reference record.

use std::borrow::Borrow;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::CreditRating;

/// Face value used when a record does not state one.
pub const DEFAULT_FACE_VALUE: Decimal = dec!(1000);

/// Unique bond identifier (e.g. `"B1"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BondId(String);

impl BondId {
    /// Create a new bond ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BondId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BondId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BondId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for BondId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BondId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One row of the bond reference table.
///
/// Coupons are annual, maturities are whole years from today. The record is
/// plain data: nothing here checks that maturity, price or face value are
/// usable for analytics. The risk engine rejects such rows when asked to
/// compute on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
    /// Unique identifier.
    pub id: BondId,

    /// Issuer name (descriptive only).
    pub issuer: String,

    /// Annual coupon rate in percent (5.0 = 5%).
    pub coupon_rate: Decimal,

    /// Years to maturity.
    pub maturity_years: u32,

    /// Market price in currency units.
    pub price: Decimal,

    /// Face (redemption) value in currency units.
    pub face_value: Decimal,

    /// Credit rating (descriptive only).
    pub rating: CreditRating,
}

impl BondRecord {
    /// Creates a record with the default face value, no issuer and no rating.
    pub fn new(
        id: impl Into<BondId>,
        coupon_rate: Decimal,
        maturity_years: u32,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            issuer: String::new(),
            coupon_rate,
            maturity_years,
            price,
            face_value: DEFAULT_FACE_VALUE,
            rating: CreditRating::NotRated,
        }
    }

    /// Sets the issuer name.
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Sets the face value.
    #[must_use]
    pub fn with_face_value(mut self, face_value: Decimal) -> Self {
        self.face_value = face_value;
        self
    }

    /// Sets the credit rating.
    #[must_use]
    pub fn with_rating(mut self, rating: CreditRating) -> Self {
        self.rating = rating;
        self
    }

    /// Market value of one unit of the bond (its price).
    #[must_use]
    pub fn market_value(&self) -> Decimal {
        self.price
    }

    /// Annual coupon cash flow in currency units.
    #[must_use]
    pub fn annual_coupon(&self) -> Decimal {
        self.coupon_rate / dec!(100) * self.face_value
    }

    /// Returns true for a zero-coupon bond.
    #[must_use]
    pub fn is_zero_coupon(&self) -> bool {
        self.coupon_rate.is_zero()
    }
}

impl fmt::Display for BondRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}% {}Y @ {}",
            self.id, self.coupon_rate, self.maturity_years, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let bond = BondRecord::new("B1", dec!(5.0), 5, dec!(980));
        assert_eq!(bond.id.as_str(), "B1");
        assert_eq!(bond.face_value, dec!(1000));
        assert_eq!(bond.rating, CreditRating::NotRated);
        assert!(bond.issuer.is_empty());
    }

    #[test]
    fn test_builder_methods() {
        let bond = BondRecord::new("B2", dec!(3.5), 10, dec!(1020))
            .with_issuer("Beacon Industries")
            .with_face_value(dec!(100))
            .with_rating(CreditRating::BBB);

        assert_eq!(bond.issuer, "Beacon Industries");
        assert_eq!(bond.face_value, dec!(100));
        assert_eq!(bond.rating, CreditRating::BBB);
    }

    #[test]
    fn test_annual_coupon_and_market_value() {
        let bond = BondRecord::new("B1", dec!(5.0), 5, dec!(980));
        assert_eq!(bond.annual_coupon(), dec!(50));
        assert_eq!(bond.market_value(), dec!(980));
        assert!(!bond.is_zero_coupon());
        assert!(BondRecord::new("Z", Decimal::ZERO, 3, dec!(900)).is_zero_coupon());
    }

    #[test]
    fn test_display() {
        let bond = BondRecord::new("B1", dec!(5.0), 5, dec!(980));
        assert_eq!(bond.to_string(), "B1 5.0% 5Y @ 980");
    }

    #[test]
    fn test_bond_id_serde_transparent() {
        let id = BondId::new("B7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"B7\"");
        let parsed: BondId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
