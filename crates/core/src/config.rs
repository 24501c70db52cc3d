//! Configuration management for TourDesk.
//!
//! Configuration is optional: every section has defaults, a TOML file can
//! override any subset of them, and a few environment variables override the
//! file at runtime.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Appended to formatted prices in the table, never stored
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Require `YYYY-MM-DD` start dates so lexical order matches calendar order
    #[serde(default)]
    pub strict_dates: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("tours.db")
}

fn default_window_title() -> String {
    "Tour Operator - Tour Management".to_string()
}

fn default_currency_suffix() -> String {
    "RUB".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            currency_suffix: default_currency_suffix(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        let config = config.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Trim the currency suffix; displayed prices are matched against it
    fn normalized(mut self) -> Self {
        self.display.currency_suffix = self.display.currency_suffix.trim().to_string();
        self
    }

    /// Load from `path` when given, defaults otherwise, then apply env overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.with_runtime_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn with_runtime_overrides(mut self) -> Self {
        if let Ok(db_path) = std::env::var("TOURDESK_DB_PATH") {
            if !db_path.trim().is_empty() {
                self.storage.db_path = PathBuf::from(db_path);
            }
        }

        if let Ok(suffix) = std::env::var("TOURDESK_CURRENCY") {
            if !suffix.trim().is_empty() {
                self.display.currency_suffix = suffix.trim().to_string();
            }
        }

        if let Ok(json) = std::env::var("TOURDESK_LOG_JSON") {
            let lowered = json.to_ascii_lowercase();
            self.logging.json = matches!(lowered.as_str(), "1" | "true" | "yes" | "on");
        }

        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.db_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "storage.db_path cannot be empty".to_string(),
            ));
        }

        // The suffix is stripped back off displayed prices, so it has to be
        // distinguishable from the number itself.
        let suffix = self.display.currency_suffix.trim();
        if suffix.is_empty() || suffix.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::ValidationError(format!(
                "display.currency_suffix must be non-empty and contain no digits (got {:?})",
                self.display.currency_suffix
            )));
        }

        Ok(())
    }
}
