//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("Cannot read configuration file {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has the wrong shape.
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] toml::de::Error),

    /// Configuration could not be written as TOML.
    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),

    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {}", join(.0))]
    MultipleValidationErrors(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
    /// Validation rule that was violated.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref rule) = self.rule {
            write!(f, "{}: {} (rule: {})", self.field, self.message, rule)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Validates the configuration.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}
