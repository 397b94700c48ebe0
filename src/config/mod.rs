//! Configuration loading and management for the contribution calculator.
//!
//! This module provides functionality to load the service configuration from a
//! YAML file: server address and allowed origins, reference data source and
//! cache settings, and logging.
//!
//! # Example
//!
//! ```no_run
//! use b2b_contributions::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/calculator.yaml").unwrap();
//! println!("Reference year: {}", config.reference_data().year);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{
    AppConfig, DEFAULT_REFERENCE_YEAR, DEFAULT_SALARY_PATTERN, DEFAULT_URL_TEMPLATE,
    LoggingConfig, ReferenceDataConfig, ServerConfig,
};
