//! Support/resistance detection via prominence-filtered local extrema.
//!
//! Resistance levels are local maxima of the high-price sequence; support
//! levels are local minima of the lows, found by negating the sequence and
//! running the same maxima detector (a minimum of f is a maximum of −f).
//!
//! Prominence follows the usual peak-detection definition: walk outward from
//! a candidate peak to the nearest strictly-higher sample (or the boundary)
//! on each side, take the minimum of each walk, and measure the peak height
//! against the higher of the two minima. A candidate counts only when that
//! drop is at least the threshold, which filters noise extrema.

use market_data_fetcher::models::bar::PriceSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelKind {
    Support,
    Resistance,
}

/// One detected price level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub price: f64,
    pub kind: LevelKind,
}

/// Detected level prices, partitioned by kind, deduplicated by value
/// equality in order of first detection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelSet {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

impl LevelSet {
    /// All levels flattened into records, supports first.
    pub fn levels(&self) -> Vec<Level> {
        self.support
            .iter()
            .map(|&price| Level {
                price,
                kind: LevelKind::Support,
            })
            .chain(self.resistance.iter().map(|&price| Level {
                price,
                kind: LevelKind::Resistance,
            }))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.support.is_empty() && self.resistance.is_empty()
    }
}

/// Finds support and resistance levels in `series` with the given minimum
/// prominence.
///
/// A prominence larger than the series' total price range yields empty sets;
/// that is a quiet outcome, not an error.
pub fn find_levels(series: &PriceSeries, prominence: f64) -> LevelSet {
    let lows: Vec<f64> = series.bars.iter().map(|b| b.low).collect();
    let highs: Vec<f64> = series.bars.iter().map(|b| b.high).collect();

    let negated_lows: Vec<f64> = lows.iter().map(|&v| -v).collect();
    let support = dedup_values(
        find_peaks(&negated_lows, prominence)
            .into_iter()
            .map(|i| lows[i]),
    );
    let resistance = dedup_values(
        find_peaks(&highs, prominence)
            .into_iter()
            .map(|i| highs[i]),
    );

    LevelSet {
        support,
        resistance,
    }
}

/// Indices of local maxima in `values` whose prominence is at least
/// `min_prominence`.
///
/// A flat-topped peak counts once, at the plateau midpoint. Boundary samples
/// are never peaks.
pub fn find_peaks(values: &[f64], min_prominence: f64) -> Vec<usize> {
    let mut peaks = Vec::new();
    for peak in local_maxima(values) {
        if peak_prominence(values, peak) >= min_prominence {
            peaks.push(peak);
        }
    }
    peaks
}

fn local_maxima(values: &[f64]) -> Vec<usize> {
    let n = values.len();
    let mut maxima = Vec::new();

    let mut i = 1;
    while n >= 2 && i < n - 1 {
        if values[i - 1] < values[i] {
            // Scan across a possible plateau.
            let mut ahead = i + 1;
            while ahead < n - 1 && values[ahead] == values[i] {
                ahead += 1;
            }
            if values[ahead] < values[i] {
                // Plateau runs from i to ahead - 1; report its midpoint.
                maxima.push((i + ahead - 1) / 2);
            }
            i = ahead;
        } else {
            i += 1;
        }
    }
    maxima
}

/// Vertical drop from `peak` to the higher of its two base minima, each base
/// window ending at the nearest strictly-higher sample or the boundary.
fn peak_prominence(values: &[f64], peak: usize) -> f64 {
    let height = values[peak];

    let mut left_min = height;
    let mut i = peak;
    while i > 0 {
        i -= 1;
        if values[i] > height {
            break;
        }
        left_min = left_min.min(values[i]);
    }

    let mut right_min = height;
    let mut i = peak;
    while i + 1 < values.len() {
        i += 1;
        if values[i] > height {
            break;
        }
        right_min = right_min.min(values[i]);
    }

    height - left_min.max(right_min)
}

fn dedup_values(prices: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::new();
    for price in prices {
        if !out.contains(&price) {
            out.push(price);
        }
    }
    out
}
