//! Error types for reference data.

use thiserror::Error;

/// Result type for reference data operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or loading a bond universe.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Two records share the same identifier.
    #[error("Duplicate bond id: {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },

    /// A reference data row could not be parsed.
    #[error("Invalid reference data at line {line}: {reason}")]
    Parse {
        /// 1-based line number in the source, header included.
        line: u64,
        /// What was wrong with the row.
        reason: String,
    },

    /// CSV reader failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Create a duplicate id error.
    #[must_use]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Create a parse error for a given line.
    #[must_use]
    pub fn parse(line: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::duplicate_id("B1");
        assert_eq!(err.to_string(), "Duplicate bond id: B1");

        let err = CoreError::parse(3, "price is not a number");
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("price is not a number"));
    }
}
