//! Application state for the calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::reference::ReferenceDataProvider;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded configuration and the cached reference data provider.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
    /// The reference data provider, shared so every request sees one cache.
    reference_data: Arc<ReferenceDataProvider>,
}

impl AppState {
    /// Creates a new application state from a configuration and a provider.
    pub fn new(config: ConfigLoader, reference_data: ReferenceDataProvider) -> Self {
        Self {
            config: Arc::new(config),
            reference_data: Arc::new(reference_data),
        }
    }

    /// Creates application state with an HTTP-backed provider built from the
    /// configuration.
    pub fn from_config(config: ConfigLoader) -> EngineResult<Self> {
        let provider = ReferenceDataProvider::from_config(config.reference_data())?;
        Ok(Self::new(config, provider))
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the reference data provider.
    pub fn reference_data(&self) -> &ReferenceDataProvider {
        &self.reference_data
    }

    /// Returns true if browsers on `origin` may call the API.
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.config
            .server()
            .allowed_origins
            .iter()
            .any(|allowed| allowed == origin)
    }
}
