use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use market_analysis::{
    config::ReportConfig,
    indicators, levels,
    report::{self, charts, html::ReportInputs},
    request::AnalysisRequest,
    returns, stats,
};
use market_data_fetcher::{
    SeriesCache, SeriesFetcher, providers::alpha_vantage::AlphaVantageProvider,
};

#[derive(Parser)]
#[command(version, about = "Generate a self-contained HTML analysis report for a ticker")]
struct Cli {
    /// Ticker symbol (e.g. "MSFT")
    symbol: String,

    /// Path to an optional report.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// First trading day to include, YYYY-MM-DD (inclusive)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last trading day to include, YYYY-MM-DD (inclusive)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Output directory for the HTML artifact (overrides the config file)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Minimum prominence for support/resistance levels (overrides the config file)
    #[arg(long)]
    prominence: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ReportConfig::from_path(path)?,
        None => ReportConfig::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(prominence) = cli.prominence {
        config.prominence = prominence;
    }

    let mut request = AnalysisRequest::new(cli.symbol.as_str());
    request.start = cli.start;
    request.end = cli.end;
    request.short_window = config.short_window;
    request.long_window = config.long_window;
    request.bollinger_window = config.bollinger_window;
    request.prominence = config.prominence;
    request.validate()?;

    println!("Starting report generation for {}...", request.symbol);

    println!("Step 1/4: Fetching data...");
    let provider = Arc::new(AlphaVantageProvider::new()?);
    let fetcher = SeriesFetcher::new(
        provider,
        SeriesCache::new(Duration::from_secs(config.cache_ttl_secs)),
    );
    let series = fetcher.fetch(&request.symbol).await;

    let Some((first, last)) = series.date_range() else {
        error!(symbol = %request.symbol, "no data fetched; aborting report");
        eprintln!(
            "Error: could not fetch data for {}. Aborting.",
            request.symbol
        );
        return Ok(());
    };
    println!("Data loaded. Range: {first} to {last}");

    println!("Step 2/4: Running statistical and technical analysis...");
    let all_returns = returns::compute_returns(&series);
    let windowed = series.slice_by_date(request.start, request.end);
    let windowed_returns = returns::filter_by_range(&all_returns, request.start, request.end);
    let log_returns = returns::log_returns(&windowed_returns);

    let report_stats = stats::describe(&log_returns);
    let moving_averages =
        indicators::moving_averages(&windowed, request.short_window, request.long_window);
    let bands = indicators::bollinger_bands(&windowed, request.bollinger_window);
    let level_set = levels::find_levels(&windowed, request.prominence);

    println!("Step 3/4: Building charts...");
    let price_chart = charts::price_chart(
        &windowed,
        Some(&moving_averages),
        Some(&bands),
        Some(&level_set),
    );
    let histogram = charts::returns_histogram(&log_returns);

    println!("Step 4/4: Assembling HTML report...");
    let path = report::write_report(
        &config.output_dir,
        &ReportInputs {
            symbol: &request.symbol,
            generated_on: Local::now().date_naive(),
            data_range: (first, last),
            stats: &report_stats,
            price_chart: &price_chart,
            histogram: &histogram,
            recent: &windowed_returns,
        },
    )?;

    println!("Report written to {}", path.display());
    Ok(())
}
