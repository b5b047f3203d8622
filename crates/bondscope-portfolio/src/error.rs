//! Error types for portfolio analytics.
//!
//! This module defines the error types used throughout the portfolio crate.

use bondscope_risk::RiskError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Aggregation or simulation was asked to work on no entries.
    #[error("Portfolio has no holdings")]
    EmptyPortfolio,

    /// A bond's metrics could not be computed.
    #[error("Metrics failed for bond '{bond_id}': {source}")]
    Metrics {
        /// The bond that failed.
        bond_id: String,
        /// The underlying risk error.
        #[source]
        source: RiskError,
    },

    /// Input rejected at portfolio level (non-finite shock, bad grid,
    /// non-positive total market value).
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected.
        reason: String,
    },
}

/// The three kinds of failure callers need to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad data.
    InvalidInput,
    /// Discount base `1 + y` not positive.
    DegenerateRate,
    /// Called with nothing to work on.
    EmptyPortfolio,
}

impl PortfolioError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Wrap a risk error for a given bond.
    #[must_use]
    pub fn metrics(bond_id: impl Into<String>, source: RiskError) -> Self {
        Self::Metrics {
            bond_id: bond_id.into(),
            source,
        }
    }

    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyPortfolio => ErrorKind::EmptyPortfolio,
            Self::Metrics {
                source: RiskError::DegenerateRate { .. },
                ..
            } => ErrorKind::DegenerateRate,
            Self::Metrics { .. } | Self::InvalidInput { .. } => ErrorKind::InvalidInput,
        }
    }
}
