//! Property tests for the return derivation.

use chrono::NaiveDate;
use market_analysis::returns::compute_returns;
use market_data_fetcher::models::bar::{PriceBar, PriceSeries};
use proptest::prelude::*;

fn series_from_prices(prices: &[f64]) -> PriceSeries {
    let start: NaiveDate = "2023-01-02".parse().unwrap();
    PriceSeries {
        symbol: "TEST".into(),
        bars: prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PriceBar {
                date: start + chrono::Days::new(i as u64),
                open: price,
                high: price,
                low: price,
                close: price,
                adjusted_close: price,
                volume: 1_000,
            })
            .collect(),
    }
}

proptest! {
    #[test]
    fn record_count_is_one_less_than_bar_count(
        prices in proptest::collection::vec(0.01f64..10_000.0, 1..120)
    ) {
        let records = compute_returns(&series_from_prices(&prices));
        prop_assert_eq!(records.len(), prices.len() - 1);
    }

    #[test]
    fn log_return_matches_ln_of_one_plus_simple(
        prices in proptest::collection::vec(0.01f64..10_000.0, 2..120)
    ) {
        let records = compute_returns(&series_from_prices(&prices));
        for record in &records {
            let reconstructed = (1.0 + record.simple_return).ln();
            prop_assert!((record.log_return - reconstructed).abs() < 1e-9);
        }
    }
}
