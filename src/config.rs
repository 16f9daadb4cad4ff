//! Configuration handling for the catalog backend.
//!
//! Configuration is stored in `.stockroom/config.yaml` and includes:
//! - The backend base URL
//! - Search tunables (debounce quiet period)

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, StockroomError};

/// Directory holding the config file, relative to the working directory.
pub const CONFIG_DIR: &str = ".stockroom";

/// Quiet period applied to search input before filtering recomputes.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Search behavior settings
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

/// Backend connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog backend
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Search behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Debounce quiet period in milliseconds
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Resolve the backend base URL.
    ///
    /// The `STOCKROOM_API_URL` environment variable takes precedence over
    /// the config file. The result is validated as an absolute URL.
    pub fn base_url(&self) -> Result<Url> {
        let raw = match env::var("STOCKROOM_API_URL") {
            Ok(value) if !value.is_empty() => value,
            _ => self.api.base_url.clone(),
        };

        Url::parse(&raw)
            .map_err(|e| StockroomError::Config(format!("invalid base URL '{}': {}", raw, e)))
    }

    /// Set the backend base URL after validating it
    pub fn set_base_url(&mut self, raw: &str) -> Result<()> {
        Url::parse(raw)
            .map_err(|e| StockroomError::Config(format!("invalid base URL '{}': {}", raw, e)))?;
        self.api.base_url = raw.to_string();
        Ok(())
    }

    /// Debounce quiet period as a `Duration`
    pub fn debounce_period(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}
