//! Cached access to the yearly reference data.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::ReferenceDataConfig;
use crate::error::EngineResult;
use crate::models::ReferenceData;

use super::cache::{Clock, ReferenceCache, SystemClock};
use super::parser::SalaryPattern;
use super::source::{HttpReferenceSource, ReferenceSource};

/// Provides the current [`ReferenceData`], fetching it only when the cached
/// copy is missing, stale, or a refresh is forced.
///
/// Failures are never cached: the returned data carries an error message and
/// the next call fetches again.
///
/// # Example
///
/// ```no_run
/// use b2b_contributions::config::ReferenceDataConfig;
/// use b2b_contributions::reference::ReferenceDataProvider;
///
/// # async fn run() -> b2b_contributions::error::EngineResult<()> {
/// let provider = ReferenceDataProvider::from_config(&ReferenceDataConfig::default())?;
/// let data = provider.get_reference_data(false).await;
/// println!("{:?}", data.contribution_base());
/// # Ok(())
/// # }
/// ```
pub struct ReferenceDataProvider {
    source: Arc<dyn ReferenceSource>,
    pattern: SalaryPattern,
    year: i32,
    cache: ReferenceCache,
    clock: Arc<dyn Clock>,
}

impl ReferenceDataProvider {
    /// Creates a provider reading from `source` with the year, pattern and TTL
    /// taken from `config`, using the system clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured salary pattern is not a valid regex.
    pub fn new(source: Arc<dyn ReferenceSource>, config: &ReferenceDataConfig) -> EngineResult<Self> {
        Ok(Self {
            source,
            pattern: SalaryPattern::for_year(&config.salary_pattern, config.year)?,
            year: config.year,
            cache: ReferenceCache::new(config.cache_ttl_secs),
            clock: Arc::new(SystemClock),
        })
    }

    /// Creates a provider fetching over HTTP as configured.
    pub fn from_config(config: &ReferenceDataConfig) -> EngineResult<Self> {
        let source = HttpReferenceSource::from_config(config)?;
        Self::new(Arc::new(source), config)
    }

    /// Replaces the clock used for cache expiry.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The year this provider fetches figures for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the reference data, from cache when possible.
    ///
    /// With `force_refresh` false, a value fetched less than the TTL ago is
    /// returned without network access. Otherwise a single fetch is made:
    /// - transport failure: data with an error message, cache untouched;
    /// - figure not found: data with an error message, cache untouched;
    /// - figure found: data with salary and base, stored in the cache.
    pub async fn get_reference_data(&self, force_refresh: bool) -> ReferenceData {
        let year = self.year;
        let now = self.clock.now_epoch_seconds();

        if !force_refresh {
            if let Some(cached) = self.cache.get_fresh(now) {
                debug!(year, "Returning cached reference data");
                return cached;
            }
        }

        info!(year, force_refresh, "Fetching reference data");

        let page = match self.source.fetch_raw_reference_text(year).await {
            Ok(page) => page,
            Err(err) => {
                warn!(year, error = %err, "Reference page fetch failed");
                return ReferenceData::unavailable(year, err.to_string());
            }
        };

        match self.pattern.find_average_salary(&page) {
            Some(avg_salary) => {
                let data = ReferenceData::fetched(year, avg_salary);
                info!(
                    year,
                    avg_salary = %avg_salary,
                    zus_base = ?data.contribution_base(),
                    "Fetched and cached reference data"
                );
                self.cache.store(data.clone(), now);
                data
            }
            None => {
                let message =
                    format!("Could not find average salary data for {} on the page.", year);
                warn!(year, page_len = page.len(), "{}", message);
                ReferenceData::unavailable(year, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::reference::ManualClock;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const PAGE: &str = "<p>Kwota prognozowanego przeciętnego wynagrodzenia w 2025 roku wynosi 8 673,00 zł.</p>";

    /// Replays scripted responses and counts calls.
    struct ScriptedSource {
        responses: Mutex<VecDeque<EngineResult<String>>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(responses: Vec<EngineResult<String>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReferenceSource for ScriptedSource {
        async fn fetch_raw_reference_text(&self, _year: i32) -> EngineResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(PAGE.to_string()))
        }
    }

    fn transport_error() -> EngineResult<String> {
        Err(EngineError::ReferenceFetch {
            url: "http://zus.test/2025".to_string(),
            message: "connection refused".to_string(),
        })
    }

    fn provider(
        source: Arc<ScriptedSource>,
        clock: Arc<ManualClock>,
    ) -> ReferenceDataProvider {
        ReferenceDataProvider::new(source, &ReferenceDataConfig::default())
            .unwrap()
            .with_clock(clock)
    }

    #[tokio::test]
    async fn test_successful_fetch_derives_base() {
        let source = Arc::new(ScriptedSource::new(vec![]));
        let provider = provider(source.clone(), Arc::new(ManualClock::new(0)));

        let data = provider.get_reference_data(false).await;

        assert_eq!(data.year(), 2025);
        assert_eq!(data.avg_salary(), Some(dec!(8673.00)));
        assert_eq!(data.contribution_base(), Some(dec!(5203.80)));
        assert_eq!(data.error_message(), None);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_second_call_within_ttl_uses_cache() {
        let source = Arc::new(ScriptedSource::new(vec![]));
        let clock = Arc::new(ManualClock::new(0));
        let provider = provider(source.clone(), clock.clone());

        let first = provider.get_reference_data(false).await;
        clock.advance(3599);
        let second = provider.get_reference_data(false).await;

        assert_eq!(first, second);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_expired_cache_fetches_again() {
        let source = Arc::new(ScriptedSource::new(vec![]));
        let clock = Arc::new(ManualClock::new(0));
        let provider = provider(source.clone(), clock.clone());

        provider.get_reference_data(false).await;
        clock.advance(3600);
        provider.get_reference_data(false).await;

        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_force_refresh_bypasses_fresh_cache() {
        let source = Arc::new(ScriptedSource::new(vec![]));
        let provider = provider(source.clone(), Arc::new(ManualClock::new(0)));

        provider.get_reference_data(false).await;
        provider.get_reference_data(true).await;

        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_cached() {
        let source = Arc::new(ScriptedSource::new(vec![transport_error()]));
        let provider = provider(source.clone(), Arc::new(ManualClock::new(0)));

        let failed = provider.get_reference_data(false).await;
        assert_eq!(failed.avg_salary(), None);
        assert_eq!(failed.contribution_base(), None);
        assert!(failed.error_message().unwrap().contains("connection refused"));

        let retried = provider.get_reference_data(false).await;
        assert_eq!(retried.contribution_base(), Some(dec!(5203.80)));
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_missing_pattern_is_not_cached() {
        let source = Arc::new(ScriptedSource::new(vec![Ok("<p>Brak danych</p>".to_string())]));
        let provider = provider(source.clone(), Arc::new(ManualClock::new(0)));

        let failed = provider.get_reference_data(false).await;
        assert_eq!(
            failed.error_message(),
            Some("Could not find average salary data for 2025 on the page.")
        );
        assert_eq!(failed.contribution_base(), None);

        provider.get_reference_data(false).await;
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_failed_forced_refresh_keeps_previous_cache() {
        let source = Arc::new(ScriptedSource::new(vec![
            Ok(PAGE.to_string()),
            transport_error(),
        ]));
        let provider = provider(source.clone(), Arc::new(ManualClock::new(0)));

        provider.get_reference_data(false).await;
        let forced = provider.get_reference_data(true).await;
        assert!(forced.error_message().is_some());

        let cached = provider.get_reference_data(false).await;
        assert_eq!(cached.contribution_base(), Some(dec!(5203.80)));
        assert_eq!(source.calls(), 2);
    }
}
