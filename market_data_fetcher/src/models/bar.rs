//! Canonical in-memory representation of a daily price bar (OHLCV + adjusted close).
//!
//! This struct is used as the standard output for all [`DataProvider`](crate::providers::DataProvider)
//! implementations, regardless of which vendor supplied the raw data.

use chrono::NaiveDate;

/// A single daily price bar for one calendar trading day.
///
/// This struct is vendor-agnostic and is used throughout the analysis pipeline.
/// The adjusted close is the canonical price signal for return and indicator
/// computation; when a vendor does not supply one, providers substitute the
/// plain close.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    /// The trading day this bar covers.
    pub date: NaiveDate,

    /// Opening price.
    pub open: f64,

    /// Highest price during the day.
    pub high: f64,

    /// Lowest price during the day.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Closing price corrected for dividends and splits.
    pub adjusted_close: f64,

    /// Shares traded during the day.
    pub volume: u64,
}

/// A complete daily history for a single symbol.
///
/// Bars are strictly ascending by date. Gaps (weekends, holidays, halts) are
/// tolerated and never filled here. An empty `bars` vector is the sole signal
/// that fetching failed — see [`SeriesFetcher`](crate::fetcher::SeriesFetcher).
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    /// The symbol this history represents (e.g., "MSFT").
    pub symbol: String,
    /// The collection of daily bars, oldest first.
    pub bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// An empty series for `symbol`, used as the fetch-failure signal.
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bars: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// First and last trading day covered, or `None` for an empty series.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.bars.first(), self.bars.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// A copy restricted to bars within `[start, end]` (both inclusive,
    /// either side optional).
    pub fn slice_by_date(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let bars = self
            .bars
            .iter()
            .filter(|bar| {
                start.is_none_or(|s| bar.date >= s) && end.is_none_or(|e| bar.date <= e)
            })
            .cloned()
            .collect();
        Self {
            symbol: self.symbol.clone(),
            bars,
        }
    }
}
