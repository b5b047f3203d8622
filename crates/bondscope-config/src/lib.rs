//! Bondscope Configuration Layer
//!
//! Loads the `bondscope.toml` settings shared by the command-line tool:
//! which universe to read, how many bonds a selection needs, the shock
//! range, and the default output format.
//!
//! # Example
//!
//! ```rust
//! use bondscope_config::{AppConfig, Validate};
//!
//! let config = AppConfig::from_toml_str("min_selection = 3").unwrap();
//! assert_eq!(config.min_selection, 3);
//! assert_eq!(config.shock.max, 2.0);
//! assert!(config.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod app;
mod error;

pub use app::{
    AppConfig, OutputFormatSetting, ShockConfig, DEFAULT_CONFIG_FILE, DEFAULT_MIN_SELECTION,
};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
