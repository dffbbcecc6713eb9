//! Configuration file parsing for the API server.
//!
//! Loads settings from TOML files: bind address, log level, store backend
//! and engine tunables. Every field has a default, so an empty file is a
//! valid configuration.

use closet_engine::EngineConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// API configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Field present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// API configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (default: 8000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Log filter used when `RUST_LOG` is unset (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Inventory backend
    #[serde(default)]
    pub store: StoreConfig,

    /// Recommendation tunables
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Which inventory backend to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Volatile in-memory inventory
    #[default]
    Memory,

    /// SQLite file at `store.path`
    Sqlite,
}

/// Store configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Backend kind
    #[serde(default)]
    pub backend: StoreBackend,

    /// Database path, required for the sqlite backend
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Default port: 8000, where the mobile client expects the API
fn default_bind_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            log_level: default_log_level(),
            store: StoreConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ApiConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field requirements
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::MissingField("bind_address".to_string()));
        }

        if self.store.backend == StoreBackend::Sqlite && self.store.path.is_none() {
            return Err(ConfigError::MissingField("store.path".to_string()));
        }

        self.engine
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use closet_engine::OuterwearPolicy;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_bind_addr() {
        assert_eq!(ApiConfig::default().bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ApiConfig::from_toml("").unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            log_level = "debug"

            [store]
            backend = "sqlite"
            path = "/var/lib/closet/closet.db"

            [engine]
            cold_threshold_c = 12.0
            outerwear = "weather_only"
        "#;

        let config = ApiConfig::from_toml(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.store.backend, StoreBackend::Sqlite);
        assert_eq!(
            config.store.path.as_deref(),
            Some(Path::new("/var/lib/closet/closet.db"))
        );
        assert_eq!(config.engine.cold_threshold_c, 12.0);
        assert_eq!(config.engine.outerwear, OuterwearPolicy::WeatherOnly);
    }

    #[test]
    fn test_sqlite_requires_path() {
        let err = ApiConfig::from_toml("[store]\nbackend = \"sqlite\"").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(field) if field == "store.path"));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let err = ApiConfig::from_toml("[store]\nbackend = \"postgres\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_blank_bind_address_rejected() {
        let err = ApiConfig::from_toml("bind_address = \" \"").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ApiConfig::from_file("/nonexistent/closet.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_)));
    }
}
