//! Configuration module for MOREDENT.

use serde::Deserialize;
use std::path::Path;

use crate::{MoredentError, Result};

/// Site information configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Display name of the clinic.
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Timezone used when formatting stored timestamps for display.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_site_name() -> String {
    "포트폴리오병원".to_string()
}

fn default_timezone() -> String {
    "Asia/Seoul".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            timezone: default_timezone(),
        }
    }
}

/// Data storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding the per-board JSON stores.
    #[serde(default = "default_data_dir")]
    pub dir: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// Holiday source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayConfig {
    /// Endpoint of the external holiday source.
    #[serde(default = "default_holiday_endpoint")]
    pub endpoint: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_holiday_timeout")]
    pub timeout_secs: u64,
}

fn default_holiday_endpoint() -> String {
    "https://tools.olaf.kr/api/holidays".to_string()
}

fn default_holiday_timeout() -> u64 {
    10
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_holiday_endpoint(),
            timeout_secs: default_holiday_timeout(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/moredent.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Site information.
    #[serde(default)]
    pub site: SiteConfig,
    /// Data storage settings.
    #[serde(default)]
    pub data: DataConfig,
    /// Holiday source settings.
    #[serde(default)]
    pub holiday: HolidayConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| MoredentError::Config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| MoredentError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
