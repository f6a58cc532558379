//! Self-contained HTML report assembly.
//!
//! The document embeds the serialized charts as inline divs and references
//! the plotly runtime from its CDN, so a single file is the whole artifact.
//! The filename is deterministic for a given symbol and generation date.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use plotly::Plot;
use thiserror::Error;

use crate::{returns::ReturnRecord, stats::StatsReport};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-latest.min.js";

const STYLE: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; margin: 40px; background-color: #f9f9f9; }
h1, h2 { color: #1e1e1e; border-bottom: 2px solid #ddd; padding-bottom: 5px; }
.container { max-width: 1000px; margin: auto; background-color: #fff; padding: 20px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.05); }
.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 15px; }
.stat-box { background-color: #f0f0f0; border: 1px solid #ddd; border-radius: 5px; padding: 15px; }
.stat-box b { color: #333; display: block; margin-bottom: 5px; font-size: 0.9em; }
.stat-box span { color: #000; font-size: 1.1em; font-weight: 600; }
table.tail { border-collapse: collapse; width: 100%; }
table.tail th, table.tail td { border: 1px solid #ddd; padding: 6px 10px; text-align: right; }
table.tail th { background-color: #f0f0f0; }
"#;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything the document needs, already computed.
pub struct ReportInputs<'a> {
    pub symbol: &'a str,
    /// Date the report is generated; part of the filename.
    pub generated_on: NaiveDate,
    /// First and last trading day covered by the data.
    pub data_range: (NaiveDate, NaiveDate),
    pub stats: &'a StatsReport,
    pub price_chart: &'a Plot,
    pub histogram: &'a Plot,
    /// Most recent processed rows, oldest first; the table shows up to 10.
    pub recent: &'a [ReturnRecord],
}

/// The deterministic artifact name for `symbol` generated on `date`.
pub fn report_filename(symbol: &str, date: NaiveDate) -> String {
    format!("financial_report_{}_{}.html", symbol, date.format("%Y%m%d"))
}

/// Assembles and writes the report, creating `output_dir` if needed.
///
/// Returns the path of the written file.
pub fn write_report(output_dir: &Path, inputs: &ReportInputs<'_>) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(report_filename(inputs.symbol, inputs.generated_on));
    std::fs::write(&path, render(inputs))?;
    Ok(path)
}

fn render(inputs: &ReportInputs<'_>) -> String {
    let mut doc = String::new();
    let symbol = inputs.symbol;
    let (first, last) = inputs.data_range;

    doc.push_str(&format!(
        "<html><head><title>Report {symbol}</title><style>{STYLE}</style>\
         <script src='{PLOTLY_CDN}'></script></head><body><div class='container'>"
    ));

    doc.push_str(&format!(
        "<h1>Financial analysis report: {symbol}</h1>\
         <p>Generated on: {}</p>\
         <p>Data range analyzed: {first} to {last}</p>",
        inputs.generated_on
    ));

    doc.push_str("<h2>Key statistics (log returns)</h2><div class='stats-grid'>");
    for (name, value) in inputs.stats.formatted() {
        doc.push_str(&format!(
            "<div class='stat-box'><b>{name}</b><span>{value}</span></div>"
        ));
    }
    doc.push_str("</div>");

    doc.push_str(&format!("<h2>Technical analysis: {symbol}</h2>"));
    doc.push_str(&inputs.price_chart.to_inline_html(Some("fig-price")));

    doc.push_str("<h2>Log return distribution</h2>");
    doc.push_str(&inputs.histogram.to_inline_html(Some("fig-hist")));

    doc.push_str(&format!(
        "<h2>Most recent processed rows for {symbol}</h2>\
         <table class='tail'><tr><th>Date</th><th>Simple return</th><th>Log return</th></tr>"
    ));
    let tail_start = inputs.recent.len().saturating_sub(10);
    for record in &inputs.recent[tail_start..] {
        doc.push_str(&format!(
            "<tr><td>{}</td><td>{:.6}</td><td>{:.6}</td></tr>",
            record.date, record.simple_return, record.log_return
        ));
    }
    doc.push_str("</table>");

    doc.push_str("</div></body></html>");
    doc
}
