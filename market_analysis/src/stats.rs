//! Descriptive and risk statistics over a daily return series.
//!
//! Conventions match the pandas defaults the original report used: sample
//! standard deviation (n−1), adjusted Fisher–Pearson skewness, excess
//! kurtosis with bias correction, annualization by √252.

use indexmap::IndexMap;

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// The seven report metrics, raw.
///
/// On a zero-variance input the Sharpe ratio is the raw `mean / 0.0`
/// division: IEEE NaN for a zero mean, ±infinity otherwise. That
/// passthrough is deliberate — the original rendered whatever the float
/// division produced — and [`StatsReport::is_degenerate`] exposes the
/// condition for callers that want to annotate it.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub annualized_volatility: f64,
    pub skewness: f64,
    pub excess_kurtosis: f64,
    pub sharpe_ratio: f64,
}

impl StatsReport {
    /// True when the Sharpe ratio came out non-finite (zero-variance input).
    pub fn is_degenerate(&self) -> bool {
        !self.sharpe_ratio.is_finite()
    }

    /// The metrics as display strings with 6 decimal places, in report
    /// order. The formatting is part of the public contract: downstream
    /// consumers render these strings directly, including `NaN`/`inf` from
    /// a degenerate Sharpe.
    pub fn formatted(&self) -> IndexMap<&'static str, String> {
        let mut out = IndexMap::with_capacity(7);
        out.insert("Mean (Daily)", format!("{:.6}", self.mean));
        out.insert("Median", format!("{:.6}", self.median));
        out.insert("Std Dev (Daily Volatility)", format!("{:.6}", self.std_dev));
        out.insert(
            "Annualized Volatility",
            format!("{:.6}", self.annualized_volatility),
        );
        out.insert("Skewness", format!("{:.6}", self.skewness));
        out.insert("Excess Kurtosis", format!("{:.6}", self.excess_kurtosis));
        out.insert(
            "Sharpe Ratio (Annualized)",
            format!("{:.6}", self.sharpe_ratio),
        );
        out
    }
}

/// Computes the full report over a return series (log returns by
/// convention, but any return-valued sequence works).
pub fn describe(returns: &[f64]) -> StatsReport {
    let m = mean(returns);
    let sd = std_dev(returns);
    let annual_factor = TRADING_DAYS_PER_YEAR.sqrt();

    StatsReport {
        mean: m,
        median: median(returns),
        std_dev: sd,
        annualized_volatility: sd * annual_factor,
        skewness: skewness(returns),
        excess_kurtosis: kurtosis_excess(returns),
        // Raw division on purpose: zero variance propagates NaN/Inf.
        sharpe_ratio: m / sd * annual_factor,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

fn skewness(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 3 {
        return f64::NAN;
    }
    let m = mean(values);
    let s = std_dev(values);
    if s == 0.0 {
        return 0.0;
    }
    let nf = n as f64;
    let m3: f64 = values.iter().map(|&x| ((x - m) / s).powi(3)).sum::<f64>() / nf;
    // Adjusted Fisher-Pearson (matches the pandas default)
    let adj = (nf * (nf - 1.0)).sqrt() / (nf - 2.0);
    adj * m3
}

fn kurtosis_excess(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 4 {
        return f64::NAN;
    }
    let m = mean(values);
    let s = std_dev(values);
    if s == 0.0 {
        return 0.0;
    }
    let nf = n as f64;
    let m4: f64 = values.iter().map(|&x| ((x - m) / s).powi(4)).sum::<f64>() / nf;
    // Excess kurtosis with bias correction (matches the pandas default)
    let raw = m4 - 3.0;
    (nf - 1.0) / ((nf - 2.0) * (nf - 3.0)) * ((nf + 1.0) * raw + 6.0)
}
