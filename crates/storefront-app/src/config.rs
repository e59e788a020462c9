//! Application configuration.
//!
//! Resolution order for the config file:
//!
//! 1. `--config <path>`
//! 2. `$STOREFRONT_CONFIG`
//! 3. `<config dir>/storefront/config.toml`
//!
//! A path given by (1) or (2) must exist. The default path (3) is optional;
//! when it is missing the built-in defaults apply. Environment overrides are
//! applied last.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use storefront_catalog::CatalogConfig;
use storefront_core::{Error, Result};

/// Project name used for the config directory.
pub const PROJECT_NAME: &str = "storefront";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "STOREFRONT_CONFIG";

/// Environment variable overriding `catalog.base_url`.
pub const CATALOG_URL_ENV: &str = "STOREFRONT_CATALOG_URL";

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level configuration for the storefront binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog endpoint settings.
    pub catalog: CatalogConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Path explicitly requested via flag or environment, if any.
    pub fn requested_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        explicit
            .map(PathBuf::from)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
    }

    /// The config file that [`AppConfig::load`] would read.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        Self::requested_config_path(explicit).or_else(Self::default_config_path)
    }

    /// Load configuration using the full resolution order.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let mut config = Self::load_file(Self::requested_config_path(explicit))?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load from a requested path, or from the default path when `None`.
    pub fn load_file(requested: Option<PathBuf>) -> Result<Self> {
        match requested {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config(format!(
                        "Config file not found at {}",
                        path.display()
                    )));
                }
                Self::from_file(&path)
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(CATALOG_URL_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("catalog.base_url overridden by {CATALOG_URL_ENV}");
            self.catalog.base_url = url;
        }
    }

    /// Check settings that would otherwise fail later.
    pub fn validate(&self) -> Result<()> {
        self.catalog
            .validate()
            .map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
