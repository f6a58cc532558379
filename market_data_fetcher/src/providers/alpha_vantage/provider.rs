use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use shared_utils::env::get_env_var;
use tracing::warn;

use crate::{
    models::bar::{PriceBar, PriceSeries},
    providers::{
        DataProvider, ProviderError, ProviderInitError,
        alpha_vantage::response::{AlphaVantageBar, AlphaVantageResponse},
    },
};

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Environment variable holding the Alpha Vantage API key.
pub const API_KEY_VAR: &str = "ALPHAVANTAGE_API_KEY";

pub struct AlphaVantageProvider {
    client: Client,
    api_key: SecretString,
}

impl AlphaVantageProvider {
    /// Creates a new Alpha Vantage provider.
    ///
    /// Reads the API key from the `ALPHAVANTAGE_API_KEY` environment
    /// variable. The key travels as a query parameter, so no default headers
    /// are installed on the client.
    pub fn new() -> Result<Self, ProviderInitError> {
        let api_key = SecretString::new(get_env_var(API_KEY_VAR)?.into());
        let client = Client::builder().build()?;

        Ok(Self { client, api_key })
    }
}

#[async_trait]
impl DataProvider for AlphaVantageProvider {
    async fn fetch_daily(&self, symbol: &str) -> Result<PriceSeries, ProviderError> {
        // `outputsize=full` returns the entire available history in one page.
        let query = [
            ("function", "TIME_SERIES_DAILY_ADJUSTED"),
            ("symbol", symbol),
            ("outputsize", "full"),
            ("datatype", "json"),
            ("apikey", self.api_key.expose_secret()),
        ];

        let response = self.client.get(BASE_URL).query(&query).send().await?;

        if !response.status().is_success() {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(error_msg));
        }

        let payload = response.json::<AlphaVantageResponse>().await?;
        normalize(symbol, payload)
    }
}

/// Converts a raw Alpha Vantage payload into the canonical [`PriceSeries`].
///
/// The vendor returns newest-first with numbered field names; this maps each
/// field to its canonical name, substitutes close for a missing adjusted
/// close (with a warning, not an error), and re-sorts ascending by date.
fn normalize(symbol: &str, payload: AlphaVantageResponse) -> Result<PriceSeries, ProviderError> {
    if let Some(message) = payload.error_text() {
        return Err(ProviderError::Api(message.to_string()));
    }

    let Some(raw_series) = payload.series else {
        return Err(ProviderError::Parse(
            "response carries neither a time series nor an error field".to_string(),
        ));
    };

    let mut missing_adjusted = 0usize;
    let mut bars = Vec::with_capacity(raw_series.len());
    for (date, raw) in raw_series {
        bars.push(normalize_bar(date, raw, &mut missing_adjusted)?);
    }

    if missing_adjusted > 0 {
        warn!(
            symbol,
            bars = missing_adjusted,
            "adjusted close missing; substituted plain close"
        );
    }

    bars.sort_by_key(|bar| bar.date);

    Ok(PriceSeries {
        symbol: symbol.to_string(),
        bars,
    })
}

fn normalize_bar(
    date: chrono::NaiveDate,
    raw: AlphaVantageBar,
    missing_adjusted: &mut usize,
) -> Result<PriceBar, ProviderError> {
    let close = parse_field(&raw.close, "close")?;
    let adjusted_close = match raw.adjusted_close.as_deref() {
        Some(text) => parse_field(text, "adjusted close")?,
        None => {
            *missing_adjusted += 1;
            close
        }
    };

    Ok(PriceBar {
        date,
        open: parse_field(&raw.open, "open")?,
        high: parse_field(&raw.high, "high")?,
        low: parse_field(&raw.low, "low")?,
        close,
        adjusted_close,
        volume: parse_field(&raw.volume, "volume")? as u64,
    })
}

fn parse_field(text: &str, field: &str) -> Result<f64, ProviderError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ProviderError::Parse(format!("unparseable {field} value: {text:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAILY_PAYLOAD: &str = r#"{
        "Meta Data": {
            "1. Information": "Daily Time Series with Splits and Dividend Events",
            "2. Symbol": "MSFT"
        },
        "Time Series (Daily)": {
            "2024-01-04": {
                "1. open": "370.0",
                "2. high": "373.3",
                "3. low": "368.7",
                "4. close": "371.6",
                "5. adjusted close": "369.9",
                "6. volume": "20901502"
            },
            "2024-01-03": {
                "1. open": "369.2",
                "2. high": "371.9",
                "3. low": "367.3",
                "4. close": "370.7",
                "5. adjusted close": "369.0",
                "6. volume": "23133960"
            }
        }
    }"#;

    #[test]
    fn normalizes_and_sorts_ascending() {
        let payload: AlphaVantageResponse = serde_json::from_str(DAILY_PAYLOAD).unwrap();
        let series = normalize("MSFT", payload).unwrap();

        assert_eq!(series.symbol, "MSFT");
        assert_eq!(series.len(), 2);
        // Vendor order is newest-first; canonical order is oldest-first.
        assert_eq!(series.bars[0].date, "2024-01-03".parse().unwrap());
        assert_eq!(series.bars[1].date, "2024-01-04".parse().unwrap());
        assert_eq!(series.bars[0].adjusted_close, 369.0);
        assert_eq!(series.bars[0].volume, 23_133_960);
    }

    #[test]
    fn missing_adjusted_close_falls_back_to_close() {
        let payload: AlphaVantageResponse = serde_json::from_str(
            r#"{
                "Time Series (Daily)": {
                    "2024-01-03": {
                        "1. open": "369.2",
                        "2. high": "371.9",
                        "3. low": "367.3",
                        "4. close": "370.7",
                        "6. volume": "23133960"
                    }
                }
            }"#,
        )
        .unwrap();

        let series = normalize("MSFT", payload).unwrap();
        assert_eq!(series.bars[0].adjusted_close, series.bars[0].close);
    }

    #[test]
    fn vendor_error_payload_maps_to_api_error() {
        let payload: AlphaVantageResponse = serde_json::from_str(
            r#"{"Error Message": "Invalid API call. Please retry or visit the documentation."}"#,
        )
        .unwrap();

        match normalize("NOPE", payload) {
            Err(ProviderError::Api(message)) => assert!(message.contains("Invalid API call")),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn throttle_note_maps_to_api_error() {
        let payload: AlphaVantageResponse = serde_json::from_str(
            r#"{"Note": "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day."}"#,
        )
        .unwrap();

        assert!(matches!(
            normalize("MSFT", payload),
            Err(ProviderError::Api(_))
        ));
    }

    #[test]
    fn payload_without_series_or_error_is_a_parse_error() {
        let payload: AlphaVantageResponse = serde_json::from_str(r#"{"Meta Data": {}}"#).unwrap();
        assert!(matches!(
            normalize("MSFT", payload),
            Err(ProviderError::Parse(_))
        ));
    }

    #[test]
    fn unparseable_numeric_field_is_a_parse_error() {
        let payload: AlphaVantageResponse = serde_json::from_str(
            r#"{
                "Time Series (Daily)": {
                    "2024-01-03": {
                        "1. open": "not-a-number",
                        "2. high": "371.9",
                        "3. low": "367.3",
                        "4. close": "370.7",
                        "5. adjusted close": "369.0",
                        "6. volume": "23133960"
                    }
                }
            }"#,
        )
        .unwrap();

        assert!(matches!(
            normalize("MSFT", payload),
            Err(ProviderError::Parse(_))
        ));
    }
}
