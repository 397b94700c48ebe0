//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AppConfig, LoggingConfig, ReferenceDataConfig, ServerConfig};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "B2B_CONFIG";

/// Configuration file used when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "./config/calculator.yaml";

/// Loads and provides access to the service configuration.
///
/// # File Structure
///
/// ```text
/// server:
///   bind_address: "127.0.0.1:8000"
///   allowed_origins: ["http://localhost:5173"]
/// reference_data:
///   year: 2025
///   url_template: "https://...-w-{year}-r."
///   salary_pattern: "...w\\s+{year}\\s+roku\\s+wynosi\\s+([\\d\\s.,]+)\\s*zł"
///   request_timeout_secs: 10
///   cache_ttl_secs: 3600
/// logging:
///   filter: "b2b_contributions=info"
///   json: false
/// ```
///
/// # Example
///
/// ```no_run
/// use b2b_contributions::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/calculator.yaml")?;
/// println!("Listening on {}", loader.server().bind_address);
/// # Ok::<(), b2b_contributions::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the file
    /// is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config = serde_yaml::from_str::<AppConfig>(content).map_err(|e| {
            EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the reference data settings.
    pub fn reference_data(&self) -> &ReferenceDataConfig {
        &self.config.reference_data
    }

    /// Returns the logging settings.
    pub fn logging(&self) -> &LoggingConfig {
        &self.config.logging
    }
}
