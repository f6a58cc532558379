//! Rolling indicators over the adjusted-close signal.
//!
//! All columns are bar-aligned with the input series: index `i` of a column
//! describes bar `i`, and the first `window - 1` entries are `None` because
//! too little history exists there. That is the intended shape, not an
//! error, so a series shorter than the window simply yields all-`None`
//! columns.
//!
//! Both computations keep running window accumulators (sum, sum of squares)
//! so the whole pass is O(n) regardless of window size.

use market_data_fetcher::models::bar::PriceSeries;

/// Short/long simple-moving-average columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingAverages {
    pub sma_short: Vec<Option<f64>>,
    pub sma_long: Vec<Option<f64>>,
}

/// Bollinger band columns: middle = SMA(window), upper/lower = middle ± 2σ
/// where σ is the trailing *sample* standard deviation over the same window.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub middle: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Simple moving average of the adjusted close over a trailing `window`,
/// inclusive of the current bar.
pub fn rolling_sma(series: &PriceSeries, window: usize) -> Vec<Option<f64>> {
    let values: Vec<f64> = series.bars.iter().map(|b| b.adjusted_close).collect();
    rolling_mean(&values, window)
}

/// The SMA pair the dashboard overlays (defaults 20/50).
pub fn moving_averages(
    series: &PriceSeries,
    short_window: usize,
    long_window: usize,
) -> MovingAverages {
    MovingAverages {
        sma_short: rolling_sma(series, short_window),
        sma_long: rolling_sma(series, long_window),
    }
}

/// Bollinger bands over the adjusted close (default window 20, k = 2).
pub fn bollinger_bands(series: &PriceSeries, window: usize) -> BollingerBands {
    let values: Vec<f64> = series.bars.iter().map(|b| b.adjusted_close).collect();
    let n = values.len();

    let mut middle = vec![None; n];
    let mut upper = vec![None; n];
    let mut lower = vec![None; n];

    if window < 2 {
        // A 1-bar window has no dispersion; leave the columns undefined.
        return BollingerBands { middle, upper, lower };
    }

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for i in 0..n {
        sum += values[i];
        sum_sq += values[i] * values[i];
        if i >= window {
            let old = values[i - window];
            sum -= old;
            sum_sq -= old * old;
        }
        if i + 1 >= window {
            let w = window as f64;
            let mean = sum / w;
            // Sample variance (n-1 divisor), floored at zero against
            // floating-point cancellation on near-constant windows.
            let variance = ((sum_sq - sum * sum / w) / (w - 1.0)).max(0.0);
            let two_sigma = 2.0 * variance.sqrt();
            middle[i] = Some(mean);
            upper[i] = Some(mean + two_sigma);
            lower[i] = Some(mean - two_sigma);
        }
    }

    BollingerBands { middle, upper, lower }
}

fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }

    let mut sum = 0.0;
    for i in 0..values.len() {
        sum += values[i];
        if i >= window {
            sum -= values[i - window];
        }
        if i + 1 >= window {
            out[i] = Some(sum / window as f64);
        }
    }
    out
}
