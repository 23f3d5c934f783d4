//! Configuration module.
//!
//! Provides configuration file support via `saham.toml`, environment
//! variables, and runtime overrides.
//!
//! # Priority (highest to lowest)
//!
//! 1. Environment variables (`SAHAM_*`)
//! 2. Configuration file (`saham.toml`)
//! 3. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::groups::BrokerGroups;
use crate::screener::ScreenerLimits;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Data location section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the export files.
    pub data_dir: String,
    /// Default screener workbook file name.
    pub screener_file: String,
    /// Default daily snapshot workbook file name.
    pub snapshot_file: String,
    /// Default all-broker transaction CSV file name.
    pub transactions_file: String,
    /// Default daily broker summary CSV file name.
    pub summary_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            screener_file: "stock-screener.xlsx".to_string(),
            snapshot_file: "ringkasan-saham.xlsx".to_string(),
            transactions_file: "allbrokertrx.csv".to_string(),
            summary_file: "broksum.csv".to_string(),
        }
    }
}

/// Display section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows per table page.
    pub per_page: usize,
    /// Rows shown on the net buy/sell boards.
    pub top_flows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            per_page: 10,
            top_flows: 20,
        }
    }
}

/// Logging section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace.
    pub level: String,
    /// Log format: text or json.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SahamConfig {
    /// Data locations.
    pub data: DataConfig,
    /// Display settings.
    pub display: DisplayConfig,
    /// Screener qualification thresholds.
    pub screener: ScreenerLimits,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Broker-group classification table.
    pub groups: BrokerGroups,
}

impl SahamConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < `saham.toml` < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("saham.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("SAHAM_").split("_").lowercase(false));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.per_page == 0 || self.display.per_page > 500 {
            return Err(ConfigError::InvalidValue {
                key: "display.per_page".to_string(),
                message: format!("value {} is out of range [1, 500]", self.display.per_page),
            });
        }

        if self.display.top_flows == 0 {
            return Err(ConfigError::InvalidValue {
                key: "display.top_flows".to_string(),
                message: "value must be at least 1".to_string(),
            });
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.format".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.format, valid_formats
                ),
            });
        }

        if self.groups.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "groups".to_string(),
                message: "broker-group table must not be empty".to_string(),
            });
        }

        for limit in [
            ("screener.max_per", self.screener.max_per),
            ("screener.min_roe", self.screener.min_roe),
            ("screener.max_pbv", self.screener.max_pbv),
            ("screener.max_der", self.screener.max_der),
        ] {
            if !limit.1.is_finite() {
                return Err(ConfigError::InvalidValue {
                    key: limit.0.to_string(),
                    message: "threshold must be finite".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
