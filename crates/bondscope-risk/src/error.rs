//! Error types for risk calculations.

use thiserror::Error;

/// Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// Input outside the domain of the formulas (maturity < 1, price or
    /// face value not positive, negative coupon, non-finite numbers).
    #[error("invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        /// Name of the offending input.
        field: &'static str,
        /// The value as supplied.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The discount base `1 + y` is not positive, so present values are
    /// undefined or change sign.
    #[error("degenerate discount rate: yield {ytm_pct}% gives 1 + y <= 0")]
    DegenerateRate {
        /// The approximate yield in percent.
        ytm_pct: f64,
    },
}

impl RiskError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidInput {
            field,
            value: value.to_string(),
            reason,
        }
    }

    /// Create a degenerate rate error.
    #[must_use]
    pub fn degenerate_rate(ytm_pct: f64) -> Self {
        Self::DegenerateRate { ytm_pct }
    }

    /// Returns true for [`RiskError::InvalidInput`].
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns true for [`RiskError::DegenerateRate`].
    #[must_use]
    pub fn is_degenerate_rate(&self) -> bool {
        matches!(self, Self::DegenerateRate { .. })
    }
}
