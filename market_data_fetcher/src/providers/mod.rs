//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, which serves as a unified
//! interface for fetching daily price history from any market data vendor.
//!
//! Each concrete provider implementation (such as Alpha Vantage) should
//! implement [`DataProvider`] to handle vendor-specific API logic and field
//! normalization.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`) for runtime selection of providers.

pub mod alpha_vantage;
pub mod errors;

use async_trait::async_trait;

pub use errors::{ProviderError, ProviderInitError};

use crate::models::bar::PriceSeries;

/// Trait for fetching daily price history from a market data provider.
///
/// Implementations request the full available history for one symbol and
/// return it in the canonical [`PriceSeries`] shape, oldest bar first.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches the full daily history for `symbol`.
    ///
    /// # Returns
    ///
    /// * `Ok(PriceSeries)` - The normalized history, sorted ascending by date.
    /// * `Err(ProviderError)` - If the request or the vendor payload fails.
    async fn fetch_daily(&self, symbol: &str) -> Result<PriceSeries, ProviderError>;
}
