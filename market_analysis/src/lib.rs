//! Numeric pipeline and report assembly for daily price histories.
//!
//! Every transformation here is a pure, single-pass function over a
//! [`PriceSeries`](market_data_fetcher::models::bar::PriceSeries) or a
//! return slice: no shared state, no I/O except the report writer.

pub mod config;
pub mod indicators;
pub mod levels;
pub mod report;
pub mod request;
pub mod resample;
pub mod returns;
pub mod stats;
