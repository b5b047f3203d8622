//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Fewer bonds selected than the configured minimum.
    #[error("Only {selected} bond(s) selected, at least {required} required")]
    SelectionTooSmall {
        /// Bonds that survived selection.
        selected: usize,
        /// Configured minimum.
        required: usize,
        /// Ids the user can still choose from.
        available: Vec<String>,
    },

    /// Shock outside the configured range.
    #[error("Rate shock {shock}% is outside the configured range [{min}%, {max}%]. Use --unbounded to allow it.")]
    ShockOutOfRange {
        /// Requested shock.
        shock: f64,
        /// Lowest allowed shock.
        min: f64,
        /// Highest allowed shock.
        max: f64,
    },

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] bondscope_config::ConfigError),

    /// Universe loading error.
    #[error(transparent)]
    Universe(#[from] bondscope_core::CoreError),

    /// Portfolio or scenario error.
    #[error(transparent)]
    Portfolio(#[from] bondscope_portfolio::PortfolioError),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::SelectionTooSmall { .. } => 2,
            _ => 1,
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
