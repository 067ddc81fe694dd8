//! Configuration management for Nutrilens.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main application configuration.
///
/// This is loaded from `~/.config/nutrilens/config.toml` (or platform
/// equivalent). If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Barcode lookup settings
    pub lookup: LookupConfig,
    /// Name search settings
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `NUTRILENS_TIMEOUT_SECS`: Override the per-request timeout
    /// - `NUTRILENS_EAN_SEARCH_TOKEN`: Supply the EAN-Search API token
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        if let Ok(val) = std::env::var("NUTRILENS_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                config.lookup.timeout_secs = secs;
                tracing::debug!("Override lookup.timeout_secs from env: {}", secs);
            }
        }

        if let Ok(val) = std::env::var("NUTRILENS_EAN_SEARCH_TOKEN") {
            if !val.is_empty() {
                config.lookup.ean_search_token = Some(val);
                tracing::debug!("Override lookup.ean_search_token from env");
            }
        }

        Ok(config)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist. The EAN-Search
    /// token is never written back.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/nutrilens/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("org", "nutrilens", "nutrilens").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Barcode lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string sent to provider APIs
    pub user_agent: String,
    /// EAN-Search API token (supplied via env, not stored on disk)
    #[serde(skip)]
    pub ean_search_token: Option<String>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "Nutrilens/0.1.0 (+https://github.com/nutrilens/nutrilens)".to_string(),
            ean_search_token: None,
        }
    }
}

/// Name search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Page size requested from the search endpoint
    pub page_size: u32,
    /// Maximum number of results returned to the caller
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            max_results: 5,
        }
    }
}
