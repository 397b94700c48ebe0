//! Time-bounded cache for reference data.
//!
//! The cache holds at most one successfully fetched [`ReferenceData`] together
//! with the time it was fetched. Time comes from a [`Clock`] so tests can
//! control expiry.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use crate::models::ReferenceData;

/// A source of the current time in whole seconds since the Unix epoch.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now_epoch_seconds(&self) -> i64;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock that only moves when told to.
///
/// # Example
///
/// ```
/// use b2b_contributions::reference::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1_000);
/// clock.advance(60);
/// assert_eq!(clock.now_epoch_seconds(), 1_060);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Creates a clock stopped at `epoch_seconds`.
    pub fn new(epoch_seconds: i64) -> Self {
        Self {
            now: AtomicI64::new(epoch_seconds),
        }
    }

    /// Moves the clock forward by `seconds`.
    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_epoch_seconds(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: ReferenceData,
    fetched_at_epoch_seconds: i64,
}

/// Holds the last successful fetch for a fixed time-to-live.
///
/// Concurrent refreshes are not coordinated; the last store wins.
#[derive(Debug)]
pub struct ReferenceCache {
    entry: RwLock<Option<CacheEntry>>,
    ttl_seconds: i64,
}

impl ReferenceCache {
    /// Creates an empty cache.
    pub fn new(ttl_seconds: i64) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl_seconds,
        }
    }

    /// Returns the cached value if it was fetched less than the TTL before `now`.
    pub fn get_fresh(&self, now: i64) -> Option<ReferenceData> {
        let entry = self.entry.read().unwrap_or_else(PoisonError::into_inner);
        entry
            .as_ref()
            .filter(|e| now - e.fetched_at_epoch_seconds < self.ttl_seconds)
            .map(|e| e.value.clone())
    }

    /// Replaces the cached value.
    pub fn store(&self, value: ReferenceData, fetched_at_epoch_seconds: i64) {
        let mut entry = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        *entry = Some(CacheEntry {
            value,
            fetched_at_epoch_seconds,
        });
    }

    /// Returns true if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}
