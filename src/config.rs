//! Configuration module
//!
//! Reads the TOML configuration (`~/.config/room-pricing/config.toml` by
//! default, or the path in `ROOM_PRICING_CONFIG`). The file carries the
//! logging settings and the tariff rows the repository is seeded with.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::tariff::TariffRow;
use crate::shared::errors::ConfigError;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "ROOM_PRICING_CONFIG";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `room_pricing=debug`
    pub level: String,
    /// `text` or `json`
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

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    /// Seed rows for the tariff repository
    pub tariffs: Vec<TariffRow>,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Config file location: `ROOM_PRICING_CONFIG` if set, otherwise the default path
    pub fn resolve_path() -> PathBuf {
        std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path())
    }
}

/// Default config path: `<config dir>/room-pricing/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("room-pricing")
        .join("config.toml")
}
