//! Plotly figure assembly.
//!
//! The price chart mirrors the interactive dashboard: a candlestick layer
//! (with the adjusted close standing in for the close, so the candles agree
//! with every derived signal), SMA overlays, a shaded Bollinger envelope,
//! and one dotted horizontal line per detected level.

use market_data_fetcher::models::bar::PriceSeries;
use plotly::{
    Candlestick, Histogram, Layout, Plot, Scatter,
    color::{NamedColor, Rgba},
    common::{DashType, Fill, Line, Marker, Mode, Title},
    layout::{Axis, RangeSlider, Shape, ShapeLine, ShapeType},
};

use crate::{
    indicators::{BollingerBands, MovingAverages},
    levels::{LevelKind, LevelSet},
};

/// The combined price/indicator/level chart for one symbol.
pub fn price_chart(
    series: &PriceSeries,
    moving_averages: Option<&MovingAverages>,
    bands: Option<&BollingerBands>,
    levels: Option<&LevelSet>,
) -> Plot {
    let dates: Vec<String> = series.bars.iter().map(|b| b.date.to_string()).collect();

    let mut plot = Plot::new();

    plot.add_trace(
        Box::new(
            Candlestick::new(
                dates.clone(),
                series.bars.iter().map(|b| b.open).collect(),
                series.bars.iter().map(|b| b.high).collect(),
                series.bars.iter().map(|b| b.low).collect(),
                series.bars.iter().map(|b| b.adjusted_close).collect(),
            )
            .name("Price"),
        ),
    );

    if let Some(ma) = moving_averages {
        plot.add_trace(
            Scatter::new(dates.clone(), ma.sma_short.clone())
                .mode(Mode::Lines)
                .name("SMA short")
                .line(Line::new().color(NamedColor::Orange).width(1.5)),
        );
        plot.add_trace(
            Scatter::new(dates.clone(), ma.sma_long.clone())
                .mode(Mode::Lines)
                .name("SMA long")
                .line(Line::new().color(NamedColor::Purple).width(1.5)),
        );
    }

    if let Some(bands) = bands {
        plot.add_trace(
            Scatter::new(dates.clone(), bands.upper.clone())
                .mode(Mode::Lines)
                .name("BB upper")
                .line(Line::new().color(NamedColor::Gray).width(1.0).dash(DashType::Dash)),
        );
        // The lower band fills up to the previously added upper band,
        // shading the whole envelope.
        plot.add_trace(
            Scatter::new(dates.clone(), bands.lower.clone())
                .mode(Mode::Lines)
                .name("BB lower")
                .line(Line::new().color(NamedColor::Gray).width(1.0).dash(DashType::Dash))
                .fill(Fill::ToNextY)
                .fill_color(Rgba::new(128, 128, 128, 0.1)),
        );
    }

    let mut layout = Layout::new()
        .title(Title::with_text(format!(
            "Price and indicators for {}",
            series.symbol
        )))
        .height(600)
        .y_axis(Axis::new().title(Title::with_text("Price (USD)")))
        .x_axis(Axis::new().range_slider(RangeSlider::new().visible(false)));

    if let Some(levels) = levels {
        let shapes = levels
            .levels()
            .into_iter()
            .map(|level| {
                let color = match level.kind {
                    LevelKind::Support => NamedColor::Green,
                    LevelKind::Resistance => NamedColor::Red,
                };
                level_line(level.price, color)
            })
            .collect();
        layout = layout.shapes(shapes);
    }

    plot.set_layout(layout);
    plot
}

/// Distribution of log returns, 100 bins.
pub fn returns_histogram(log_returns: &[f64]) -> Plot {
    let mut plot = Plot::new();
    plot.add_trace(
        Histogram::new(log_returns.to_vec())
            .name("Frequency")
            .n_bins_x(100)
            .marker(Marker::new().color(NamedColor::Blue)),
    );
    plot.set_layout(
        Layout::new()
            .title(Title::with_text("Log return distribution"))
            .x_axis(Axis::new().title(Title::with_text("Log return")))
            .y_axis(Axis::new().title(Title::with_text("Frequency")))
            .show_legend(false),
    );
    plot
}

/// A dotted horizontal line across the full plot width at `price`.
fn level_line(price: f64, color: NamedColor) -> Shape {
    Shape::new()
        .shape_type(ShapeType::Line)
        .x_ref("paper")
        .y_ref("y")
        .x0(0.0)
        .x1(1.0)
        .y0(price)
        .y1(price)
        .line(ShapeLine::new().color(color).width(1.0).dash(DashType::Dot))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use market_data_fetcher::models::bar::PriceBar;

    use super::*;
    use crate::{indicators, levels};

    fn sample_series() -> PriceSeries {
        let start: NaiveDate = "2024-01-01".parse().unwrap();
        PriceSeries {
            symbol: "TEST".into(),
            bars: (0..30)
                .map(|i| {
                    let price = 100.0 + (i as f64 * 0.5).sin() * 10.0;
                    PriceBar {
                        date: start + chrono::Days::new(i as u64),
                        open: price - 0.5,
                        high: price + 1.0,
                        low: price - 1.0,
                        close: price,
                        adjusted_close: price,
                        volume: 1_000,
                    }
                })
                .collect(),
        }
    }

    #[test]
    fn price_chart_embeds_all_layers() {
        let series = sample_series();
        let ma = indicators::moving_averages(&series, 5, 10);
        let bands = indicators::bollinger_bands(&series, 5);
        let levels = levels::find_levels(&series, 2.0);

        let plot = price_chart(&series, Some(&ma), Some(&bands), Some(&levels));
        let html = plot.to_inline_html(Some("fig-price"));

        assert!(html.contains("fig-price"));
        assert!(html.contains("SMA short"));
        assert!(html.contains("BB lower"));
    }

    #[test]
    fn histogram_renders_without_legend() {
        let plot = returns_histogram(&[0.01, -0.02, 0.005, 0.0, 0.015]);
        let html = plot.to_inline_html(Some("fig-hist"));
        assert!(html.contains("fig-hist"));
    }
}
