use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// One hour of the upstream forecast.
///
/// Field names map the AccuWeather hourly response; the timestamp keeps
/// the offset the service returned it with.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPoint {
    #[serde(rename = "DateTime")]
    pub date_time: DateTime<FixedOffset>,

    /// Precipitation probability as an integer percentage (0-100)
    #[serde(rename = "PrecipitationProbability")]
    pub precipitation_probability: u8,
}

/// Hourly forecast series, chronological, exactly as returned upstream
/// (observed length: 12). Never reordered or deduplicated.
pub type ForecastSeries = Vec<ForecastPoint>;

/// Forecast client errors.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid forecast URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Forecast API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed forecast response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected forecast shape: {0}")]
    Shape(String),
}
