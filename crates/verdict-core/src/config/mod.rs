//! Configuration management for Verdict.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `verdict.toml` file
//! 3. User config `~/.config/verdict/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

use crate::format::validate_pattern;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Date, time and icon formatting.
    pub format: FormatConfig,

    /// Report page settings.
    pub report: PageConfig,
}

impl ReportConfig {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./verdict.toml` (project local)
    /// 2. `~/.config/verdict/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(PROJECT_CONFIG_FILE).exists() {
            return Self::from_file(PROJECT_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = Self::read_file(path)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Read a config file as written, without environment overrides or
    /// validation.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(format) = std::env::var("VERDICT_DATE_TIME_FORMAT") {
            self.format.date_time_format = format;
        }
        if let Ok(format) = std::env::var("VERDICT_TIME_FORMAT") {
            self.format.time_format = format;
        }
        if let Ok(prefix) = std::env::var("VERDICT_ICON_PREFIX") {
            self.format.icon_prefix = prefix;
        }
        if let Ok(title) = std::env::var("VERDICT_REPORT_TITLE") {
            self.report.title = title;
        }
    }

    /// Checks values that would otherwise fail mid-render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_pattern("format.date_time_format", &self.format.date_time_format)?;
        validate_pattern("format.time_format", &self.format.time_format)?;
        if self.format.icon_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(
                "format.icon_prefix must not contain whitespace".to_string(),
            ));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = ReportConfig::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Formatting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// strftime pattern for test start and end times.
    pub date_time_format: String,

    /// strftime pattern for log row timestamps.
    pub time_format: String,

    /// Prefix applied to icon names, e.g. `fa-`.
    pub icon_prefix: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date_time_format: DEFAULT_DATE_TIME_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            icon_prefix: DEFAULT_ICON_PREFIX.to_string(),
        }
    }
}

/// Report page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Title of the rendered page.
    pub title: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
        }
    }
}
