//! Precipitation evaluation: picks the forecast point worth a reminder.

use crate::types::ForecastPoint;

/// Probability (percent) a forecast point must exceed to call for a
/// reminder. Strictly greater than; 30% itself does not qualify.
pub const PRECIPITATION_THRESHOLD: u8 = 30;

/// Outcome of scanning a forecast series.
///
/// `NotFound` is a normal result, not an error: a dry forecast is the
/// common case, and the cycle handles it by publishing the fixed
/// low-chance message.
#[derive(Debug, Clone)]
pub enum Evaluation {
    Found(ForecastPoint),
    NotFound,
}

/// Returns the first point in series order whose precipitation
/// probability exceeds [`PRECIPITATION_THRESHOLD`].
///
/// First match wins, even when a later point has a higher probability.
/// An empty series evaluates to `NotFound`.
pub fn evaluate(series: &[ForecastPoint]) -> Evaluation {
    series
        .iter()
        .find(|point| point.precipitation_probability > PRECIPITATION_THRESHOLD)
        .cloned()
        .map_or(Evaluation::NotFound, Evaluation::Found)
}
