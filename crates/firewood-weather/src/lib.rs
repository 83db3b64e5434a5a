//! AccuWeather hourly-forecast client and precipitation evaluation.

pub mod client;
pub mod evaluate;
pub mod types;

pub use client::{ForecastClient, ACCUWEATHER_BASE_URL};
pub use evaluate::{evaluate, Evaluation, PRECIPITATION_THRESHOLD};
pub use types::{ForecastError, ForecastPoint, ForecastSeries};
