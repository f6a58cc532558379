use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Deserialize;

/// One day's raw fields as Alpha Vantage encodes them: numbered, prefixed
/// names with every value string-typed.
#[derive(Deserialize, Debug)]
pub struct AlphaVantageBar {
    #[serde(rename = "1. open")]
    pub open: String,
    #[serde(rename = "2. high")]
    pub high: String,
    #[serde(rename = "3. low")]
    pub low: String,
    #[serde(rename = "4. close")]
    pub close: String,
    /// Absent on the unadjusted endpoint and for some instruments; the
    /// provider substitutes the plain close when missing.
    #[serde(rename = "5. adjusted close")]
    pub adjusted_close: Option<String>,
    #[serde(rename = "6. volume")]
    pub volume: String,
}

/// Top-level daily-adjusted payload.
///
/// Alpha Vantage reports failures as alternative top-level keys rather than
/// HTTP status codes: `Error Message` for unknown symbols or bad requests,
/// `Note`/`Information` for rate limiting. Exactly one of `series` or an
/// error field is populated.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct AlphaVantageResponse {
    #[serde(rename = "Time Series (Daily)")]
    pub series: Option<IndexMap<NaiveDate, AlphaVantageBar>>,

    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,

    #[serde(rename = "Note")]
    pub note: Option<String>,

    #[serde(rename = "Information")]
    pub information: Option<String>,
}

impl AlphaVantageResponse {
    /// The vendor's error text, if the payload carries one.
    pub fn error_text(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.note.as_deref())
            .or(self.information.as_deref())
    }
}
