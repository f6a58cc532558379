//! Universal parameters for one analysis request.
//!
//! The original interactive tool kept these knobs in ambient UI state; here
//! they are an explicit value struct handed to every pipeline stage, so the
//! same request can drive an interactive session or a batch report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    /// The requested date range has `start` after `end`.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// The ticker symbol is empty after trimming.
    #[error("Ticker symbol must not be empty")]
    EmptySymbol,
}

/// Parameters for one analysis run over a single ticker.
///
/// The date range is inclusive on both ends; either side may be left open to
/// mean "from the first bar" / "to the last bar". Window sizes and the level
/// prominence default to the values the interactive dashboard used.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Ticker symbol, upper-cased by convention (e.g. "MSFT").
    pub symbol: String,

    /// First trading day to include (inclusive), if restricted.
    pub start: Option<NaiveDate>,

    /// Last trading day to include (inclusive), if restricted.
    pub end: Option<NaiveDate>,

    /// Window for the short simple moving average.
    pub short_window: usize,

    /// Window for the long simple moving average.
    pub long_window: usize,

    /// Window for the Bollinger band envelope.
    pub bollinger_window: usize,

    /// Minimum prominence for a support/resistance level to count.
    pub prominence: f64,
}

impl AnalysisRequest {
    /// A request for `symbol` with the standard window sizes (SMA 20/50,
    /// Bollinger 20, prominence 5) over the full available history.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into().trim().to_uppercase(),
            start: None,
            end: None,
            short_window: 20,
            long_window: 50,
            bollinger_window: 20,
            prominence: 5.0,
        }
    }

    /// Checks the request before any computation runs.
    ///
    /// A start date after the end date is the one user input combination that
    /// halts the request outright; everything else (short history, unknown
    /// symbol) degrades later in the pipeline instead.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.symbol.is_empty() {
            return Err(RequestError::EmptySymbol);
        }
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(RequestError::InvalidDateRange { start, end });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_controls() {
        let req = AnalysisRequest::new("msft");
        assert_eq!(req.symbol, "MSFT");
        assert_eq!(req.short_window, 20);
        assert_eq!(req.long_window, 50);
        assert_eq!(req.bollinger_window, 20);
        assert_eq!(req.prominence, 5.0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn start_after_end_is_rejected() {
        let mut req = AnalysisRequest::new("MSFT");
        req.start = Some("2024-06-01".parse().unwrap());
        req.end = Some("2024-01-01".parse().unwrap());
        assert!(matches!(
            req.validate(),
            Err(RequestError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn equal_start_and_end_is_allowed() {
        let mut req = AnalysisRequest::new("MSFT");
        req.start = Some("2024-06-01".parse().unwrap());
        req.end = Some("2024-06-01".parse().unwrap());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn blank_symbol_is_rejected() {
        let req = AnalysisRequest::new("   ");
        assert_eq!(req.validate(), Err(RequestError::EmptySymbol));
    }
}
