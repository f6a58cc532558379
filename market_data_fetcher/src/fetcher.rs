//! The fetch boundary: provider + cache, with errors swallowed into an
//! empty series.
//!
//! Everything above this layer treats an empty [`PriceSeries`] as the sole
//! fetch-failure signal; provider errors never propagate past here. The call
//! is single-shot by design: no retry, no backoff — a failed request stays
//! failed until the caller re-triggers it.

use std::sync::Arc;

use tracing::{debug, error};

use crate::{
    cache::SeriesCache,
    models::bar::PriceSeries,
    providers::DataProvider,
};

/// Cached, error-swallowing front door for daily price history.
pub struct SeriesFetcher {
    provider: Arc<dyn DataProvider>,
    cache: SeriesCache,
}

impl SeriesFetcher {
    pub fn new(provider: Arc<dyn DataProvider>, cache: SeriesCache) -> Self {
        Self { provider, cache }
    }

    /// Fetches the full daily history for `symbol`.
    ///
    /// On a cache hit the provider is not contacted. On any provider failure
    /// (network error, unknown ticker, rate limit) the error is logged and an
    /// empty series is returned; failed lookups are not cached, so the next
    /// call retries the network.
    pub async fn fetch(&self, symbol: &str) -> PriceSeries {
        if let Some(series) = self.cache.get(symbol) {
            debug!(symbol, bars = series.len(), "series served from cache");
            return series;
        }

        match self.provider.fetch_daily(symbol).await {
            Ok(series) => {
                self.cache.insert(symbol, series.clone());
                series
            }
            Err(err) => {
                error!(symbol, %err, "failed to fetch daily history");
                PriceSeries::empty(symbol)
            }
        }
    }
}
