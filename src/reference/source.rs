//! Remote source of the reference page.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ReferenceDataConfig;
use crate::error::{EngineError, EngineResult};

/// Supplies the raw text of the page announcing a year's average salary.
///
/// Implementations make a single attempt per call; retries are left to the
/// caller.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Fetches the page for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReferenceFetch`] on transport failure or a
    /// non-success status.
    async fn fetch_raw_reference_text(&self, year: i32) -> EngineResult<String>;
}

/// Fetches the reference page over HTTP.
#[derive(Debug, Clone)]
pub struct HttpReferenceSource {
    client: Client,
    url_template: String,
}

impl HttpReferenceSource {
    /// Creates a source for `url_template` (with a `{year}` placeholder) whose
    /// requests give up after `timeout`.
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> EngineResult<Self> {
        let url_template = url_template.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::ReferenceFetch {
                url: url_template.clone(),
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            url_template,
        })
    }

    /// Creates a source from the reference data settings.
    pub fn from_config(config: &ReferenceDataConfig) -> EngineResult<Self> {
        Self::new(
            config.url_template.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Returns the page URL for `year`.
    pub fn url_for(&self, year: i32) -> String {
        self.url_template.replace("{year}", &year.to_string())
    }
}

#[async_trait]
impl ReferenceSource for HttpReferenceSource {
    async fn fetch_raw_reference_text(&self, year: i32) -> EngineResult<String> {
        let url = self.url_for(year);
        let fetch_error = |e: reqwest::Error| EngineError::ReferenceFetch {
            url: url.clone(),
            message: e.to_string(),
        };

        debug!(url = %url, "Requesting reference page");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(fetch_error)?
            .error_for_status()
            .map_err(fetch_error)?;

        response.text().await.map_err(fetch_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_substitutes_year() {
        let source =
            HttpReferenceSource::new("http://localhost/skladki-{year}", Duration::from_secs(1))
                .unwrap();
        assert_eq!(source.url_for(2025), "http://localhost/skladki-2025");
    }

    #[test]
    fn test_from_config_uses_template() {
        let config = ReferenceDataConfig::default();
        let source = HttpReferenceSource::from_config(&config).unwrap();
        assert_eq!(source.url_for(config.year), config.url());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        // Port 9 (discard) on localhost is not expected to be listening.
        let source =
            HttpReferenceSource::new("http://127.0.0.1:9/{year}", Duration::from_secs(2)).unwrap();
        let err = source.fetch_raw_reference_text(2025).await.unwrap_err();
        assert!(matches!(err, EngineError::ReferenceFetch { url, .. } if url == "http://127.0.0.1:9/2025"));
    }
}
