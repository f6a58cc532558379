//! Daily return derivation from the adjusted-close signal.

use chrono::NaiveDate;
use market_data_fetcher::models::bar::PriceSeries;

/// Simple and logarithmic return for one trading day, derived from the
/// previous bar's adjusted close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnRecord {
    pub date: NaiveDate,
    pub simple_return: f64,
    pub log_return: f64,
}

/// Derives daily returns from consecutive adjusted closes.
///
/// The first bar has no prior bar to diff against and produces no record, so
/// the output holds exactly `series.len() - 1` entries (and none for an
/// empty or single-bar series).
pub fn compute_returns(series: &PriceSeries) -> Vec<ReturnRecord> {
    series
        .bars
        .windows(2)
        .map(|pair| {
            let ratio = pair[1].adjusted_close / pair[0].adjusted_close;
            ReturnRecord {
                date: pair[1].date,
                simple_return: ratio - 1.0,
                log_return: ratio.ln(),
            }
        })
        .collect()
}

/// Restricts records to `[start, end]`, both sides inclusive and optional.
pub fn filter_by_range(
    records: &[ReturnRecord],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<ReturnRecord> {
    records
        .iter()
        .filter(|r| start.is_none_or(|s| r.date >= s) && end.is_none_or(|e| r.date <= e))
        .copied()
        .collect()
}

/// The log-return column of `records`, in order.
pub fn log_returns(records: &[ReturnRecord]) -> Vec<f64> {
    records.iter().map(|r| r.log_return).collect()
}

#[cfg(test)]
mod tests {
    use market_data_fetcher::models::bar::PriceBar;

    use super::*;

    fn series(adjusted: &[f64]) -> PriceSeries {
        let start: NaiveDate = "2024-01-01".parse().unwrap();
        PriceSeries {
            symbol: "TEST".into(),
            bars: adjusted
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

    #[test]
    fn known_values() {
        // adjustedClose = [100, 110, 99] -> simple [0.10, -0.10],
        // log ~ [0.0953, -0.1054]
        let records = compute_returns(&series(&[100.0, 110.0, 99.0]));

        assert_eq!(records.len(), 2);
        assert!((records[0].simple_return - 0.10).abs() < 1e-12);
        assert!((records[1].simple_return + 0.10).abs() < 1e-12);
        assert!((records[0].log_return - 0.0953).abs() < 1e-4);
        assert!((records[1].log_return + 0.1054).abs() < 1e-4);
    }

    #[test]
    fn output_is_one_shorter_than_input() {
        for n in [0usize, 1, 2, 5, 60] {
            let prices: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
            let records = compute_returns(&series(&prices));
            assert_eq!(records.len(), n.saturating_sub(1));
        }
    }

    #[test]
    fn log_matches_ln_of_one_plus_simple() {
        let records = compute_returns(&series(&[100.0, 103.5, 101.2, 108.9, 97.4]));
        for r in records {
            assert!((r.log_return - (1.0 + r.simple_return).ln()).abs() < 1e-12);
        }
    }

    #[test]
    fn range_filter_is_inclusive() {
        let records = compute_returns(&series(&[100.0, 101.0, 102.0, 103.0]));
        let filtered = filter_by_range(
            &records,
            Some("2024-01-02".parse().unwrap()),
            Some("2024-01-03".parse().unwrap()),
        );
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].date, "2024-01-02".parse().unwrap());
    }
}
