//! Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "bondscope.toml";

/// Default minimum number of bonds a selection must contain.
pub const DEFAULT_MIN_SELECTION: usize = 5;

/// Output format preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormatSetting {
    /// Human-readable tables.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// CSV rows.
    Csv,
    /// Bare values.
    Minimal,
}

/// Shock range used for ladders and for checking user-supplied shocks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShockConfig {
    /// Lowest shock in percentage points.
    pub min: f64,
    /// Highest shock in percentage points.
    pub max: f64,
    /// Ladder spacing in percentage points.
    pub step: f64,
}

impl Default for ShockConfig {
    fn default() -> Self {
        Self {
            min: -2.0,
            max: 2.0,
            step: 0.1,
        }
    }
}

impl Validate for ShockConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("shock.min", self.min),
            ("shock.max", self.max),
            ("shock.step", self.step),
        ] {
            if !value.is_finite() {
                errors.push(ValidationError::with_rule(field, "must be a finite number", "finite"));
            }
        }
        if self.min > self.max {
            errors.push(ValidationError::with_rule(
                "shock.min",
                format!("{} exceeds shock.max {}", self.min, self.max),
                "min_le_max",
            ));
        }
        if self.step <= 0.0 {
            errors.push(ValidationError::with_rule(
                "shock.step",
                format!("must be positive, got {}", self.step),
                "positive",
            ));
        }

        errors
    }
}

/// Top-level `bondscope.toml` contents.
///
/// Every field is optional in the file:
///
/// ```toml
/// universe_file = "data/bonds.csv"
/// min_selection = 3
/// default_format = "json"
///
/// [shock]
/// min = -1.0
/// max = 1.0
/// step = 0.25
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV universe to load instead of the embedded table.
    ///
    /// A relative path read by [`AppConfig::from_file`] is taken relative
    /// to the configuration file's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universe_file: Option<PathBuf>,

    /// Fewest bonds a selection may contain before analysis runs.
    pub min_selection: usize,

    /// Output format when none is given on the command line.
    pub default_format: OutputFormatSetting,

    /// Shock range.
    pub shock: ShockConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            universe_file: None,
            min_selection: DEFAULT_MIN_SELECTION,
            default_format: OutputFormatSetting::default(),
            shock: ShockConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }
        Ok(config)
    }

    /// Joins a relative `universe_file` onto `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if let Some(file) = self.universe_file.as_mut() {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// the working directory is used if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::from_file(path)
            }
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    tracing::debug!(path = DEFAULT_CONFIG_FILE, "loading configuration");
                    Self::from_file(fallback)
                } else {
                    tracing::debug!("no configuration file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.min_selection == 0 {
            errors.push(ValidationError::with_rule(
                "min_selection",
                "must be at least 1",
                "positive",
            ));
        }
        if let Some(ref file) = self.universe_file {
            if file.as_os_str().is_empty() {
                errors.push(ValidationError::new("universe_file", "must not be empty"));
            }
        }
        errors.extend(self.shock.validate());

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.min_selection, 5);
        assert_eq!(config.shock, ShockConfig { min: -2.0, max: 2.0, step: 0.1 });
        assert_eq!(config.default_format, OutputFormatSetting::Table);
        assert!(config.universe_file.is_none());
        assert!(config.is_valid());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            min_selection = 2
            default_format = "json"

            [shock]
            step = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.min_selection, 2);
        assert_eq!(config.default_format, OutputFormatSetting::Json);
        assert_eq!(config.shock.step, 0.5);
        assert_eq!(config.shock.min, -2.0);
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_toml_str("min_selection = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "min_selection"));

        let err = AppConfig::from_toml_str("[shock]\nmin = 3.0\nstep = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::MultipleValidationErrors(ref v) if v.len() == 2));
    }

    #[test]
    fn test_bad_format_name() {
        let err = AppConfig::from_toml_str(r#"default_format = "xml""#).unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_resolve_paths() {
        let mut config = AppConfig {
            universe_file: Some(PathBuf::from("data/bonds.csv")),
            ..AppConfig::default()
        };
        config.resolve_paths(Path::new("/etc/bondscope"));
        assert_eq!(
            config.universe_file.as_deref(),
            Some(Path::new("/etc/bondscope/data/bonds.csv"))
        );

        let mut absolute = AppConfig {
            universe_file: Some(PathBuf::from("/srv/bonds.csv")),
            ..AppConfig::default()
        };
        absolute.resolve_paths(Path::new("/etc/bondscope"));
        assert_eq!(absolute.universe_file.as_deref(), Some(Path::new("/srv/bonds.csv")));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig {
            universe_file: Some(PathBuf::from("bonds.csv")),
            min_selection: 3,
            ..AppConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
    }
}
