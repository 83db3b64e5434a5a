use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::types::{ForecastError, ForecastSeries};

/// Production AccuWeather endpoint.
pub const ACCUWEATHER_BASE_URL: &str = "http://dataservice.accuweather.com";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// AccuWeather hourly-forecast client for a single fixed location.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    base_url: Url,
    client: Client,
    api_key: String,
    location_key: String,
}

impl ForecastClient {
    /// Create a new forecast client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - forecast service base, [`ACCUWEATHER_BASE_URL`] in production
    /// * `api_key` - AccuWeather API key, sent as a query parameter
    /// * `location_key` - AccuWeather location key for the operator's home
    pub fn new(base_url: &str, api_key: &str, location_key: &str) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: parse_base(base_url)?,
            client,
            api_key: api_key.to_string(),
            location_key: location_key.to_string(),
        })
    }

    /// Fetch the twelve-hour hourly forecast.
    ///
    /// The response must be a JSON array; anything else is a
    /// [`ForecastError::Shape`]. Transport failures and unparseable JSON
    /// end the cycle with [`ForecastError::Network`] / [`ForecastError::Json`].
    pub async fn fetch_hourly(&self) -> Result<ForecastSeries, ForecastError> {
        let url = self
            .base_url
            .join(&format!("forecasts/v1/hourly/12hour/{}", self.location_key))?;

        tracing::debug!("fetching hourly forecast for location {}", self.location_key);

        let response = self
            .client
            .get(url)
            .query(&[("apikey", &self.api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ForecastError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        if !value.is_array() {
            return Err(ForecastError::Shape(format!(
                "expected a JSON array, got {}",
                json_kind(&value)
            )));
        }

        let series: ForecastSeries = serde_json::from_value(value)?;
        tracing::info!("fetched {} forecast points", series.len());
        Ok(series)
    }
}

/// Normalizes the base URL so `Url::join` treats it as a directory.
fn parse_base(base_url: &str) -> Result<Url, url::ParseError> {
    let mut base = base_url.trim_end_matches('/').to_string();
    base.push('/');
    Url::parse(&base)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
