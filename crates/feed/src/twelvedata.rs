use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use common::{Candle, Error, MarketDataSource, Result};

const BASE_URL: &str = "https://api.twelvedata.com";

/// REST client for the Twelve Data time-series API.
pub struct TwelveDataClient {
    api_key: String,
    http: Client,
}

impl TwelveDataClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http: Client::builder()
                .use_rustls_tls()
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl MarketDataSource for TwelveDataClient {
    async fn candles(&self, pair: &str, interval: &str, count: usize) -> Result<Vec<Candle>> {
        debug!(pair, interval, count, "Fetching candle series");
        let count_param = count.to_string();
        let resp = self
            .http
            .get(format!("{BASE_URL}/time_series"))
            .query(&[
                ("symbol", pair),
                ("interval", interval),
                ("outputsize", count_param.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::Http(e.to_string()))?;
        if !status.is_success() {
            return Err(Error::MarketData(format!("HTTP {status}: {body}")));
        }

        let series: TimeSeriesResponse =
            serde_json::from_str(&body).map_err(|e| Error::MarketData(e.to_string()))?;
        if series.status.as_deref() == Some("error") {
            return Err(Error::MarketData(
                series
                    .message
                    .unwrap_or_else(|| "unknown upstream error".to_string()),
            ));
        }

        // Twelve Data returns values newest first, which is the order the
        // analyzer expects. Do not re-sort.
        parse_values(series.values)
    }
}

fn parse_values(values: Vec<SeriesValue>) -> Result<Vec<Candle>> {
    values
        .into_iter()
        .map(|v| {
            Ok(Candle {
                open: parse_price(&v.open)?,
                high: parse_price(&v.high)?,
                low: parse_price(&v.low)?,
                close: parse_price(&v.close)?,
            })
        })
        .collect()
}

fn parse_price(raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| Error::MarketData(format!("non-numeric price in series: '{raw}'")))
}

// ─── Response types ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TimeSeriesResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    values: Vec<SeriesValue>,
}

/// One bar as delivered on the wire: OHLC as strings.
#[derive(Deserialize)]
struct SeriesValue {
    open: String,
    high: String,
    low: String,
    close: String,
}
