//! Keyed TTL cache for fetched price histories.
//!
//! Interactive callers re-request the same ticker many times in a session;
//! one network round-trip per ticker per hour is plenty. The cache is a plain
//! keyed map with wall-clock expiry: no eviction policy beyond staleness, no
//! size bound (the key space is operator-supplied ticker strings).
//!
//! The cache is injected into [`SeriesFetcher`](crate::fetcher::SeriesFetcher)
//! rather than hidden behind the fetch call, so tests and batch runs can opt
//! out by constructing one with a zero TTL.

use std::{
    collections::HashMap,
    sync::Mutex,
    time::{Duration, Instant},
};

use crate::models::bar::PriceSeries;

struct CacheEntry {
    stored_at: Instant,
    series: PriceSeries,
}

/// Symbol-keyed cache of [`PriceSeries`] values with a fixed time-to-live.
pub struct SeriesCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl SeriesCache {
    /// The expiry the interactive dashboard used.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// A cache with the default one-hour TTL.
    pub fn with_default_ttl() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }

    /// Returns the cached series for `symbol` if present and fresh.
    ///
    /// Stale entries are dropped on access; a zero TTL therefore disables
    /// caching entirely.
    pub fn get(&self, symbol: &str) -> Option<PriceSeries> {
        let key = symbol.to_uppercase();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(&key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.series.clone()),
            Some(_) => {
                entries.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Stores `series` under the upper-cased `symbol`, replacing any prior
    /// entry.
    pub fn insert(&self, symbol: &str, series: PriceSeries) {
        let key = symbol.to_uppercase();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            key,
            CacheEntry {
                stored_at: Instant::now(),
                series,
            },
        );
    }

    /// Drops every entry. Useful for tests.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }
}
