//! Calendar-daily re-indexing of the adjusted-close signal.
//!
//! Seasonal-decomposition and forecasting collaborators want an observation
//! for every calendar day, not just trading days. This prep re-indexes the
//! series to each day between the first and last bar and forward-fills the
//! non-trading gaps. The analysis pipeline itself never fills gaps; only
//! this step does.

use chrono::{Days, NaiveDate};
use market_data_fetcher::models::bar::PriceSeries;
use tracing::warn;

/// History shorter than this is a weak basis for yearly seasonality.
const SEASONAL_MIN_DAYS: i64 = 730;

/// The adjusted close re-indexed to every calendar day in the series' span,
/// gaps forward-filled. Empty input yields empty output.
pub fn resample_calendar_daily(series: &PriceSeries) -> Vec<(NaiveDate, f64)> {
    let Some((first, last)) = series.date_range() else {
        return Vec::new();
    };

    if (last - first).num_days() < SEASONAL_MIN_DAYS {
        warn!(
            symbol = %series.symbol,
            days = (last - first).num_days(),
            "less than two years of history; seasonal analysis will be weak"
        );
    }

    let mut out = Vec::new();
    let mut bars = series.bars.iter().peekable();
    let mut current = f64::NAN;
    let mut day = first;
    while day <= last {
        if let Some(bar) = bars.peek() {
            if bar.date == day {
                current = bar.adjusted_close;
                bars.next();
            }
        }
        out.push((day, current));
        day = day + Days::new(1);
    }
    out
}
