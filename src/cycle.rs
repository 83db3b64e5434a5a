//! One forecast cycle: fetch, evaluate, then create a reminder or publish
//! the low-chance message.

use anyhow::Result;
use firewood_core::StatusCell;
use firewood_tasks::TaskClient;
use firewood_weather::{evaluate, Evaluation, ForecastClient};

/// Status text published when no forecast point crosses the threshold.
pub const LOW_CHANCE_STATUS: &str = "Very low chance of precipitation for the next twelve hours";

/// Run one cycle end to end. Errors never escape this boundary: whatever
/// goes wrong is logged and the scheduler carries on to the next day.
pub async fn run_cycle(forecast: &ForecastClient, tasks: &TaskClient, status: &StatusCell) {
    if let Err(e) = try_cycle(forecast, tasks, status).await {
        tracing::error!("forecast cycle failed: {e}");
    }
}

async fn try_cycle(
    forecast: &ForecastClient,
    tasks: &TaskClient,
    status: &StatusCell,
) -> Result<()> {
    let series = forecast.fetch_hourly().await?;

    match evaluate(&series) {
        Evaluation::Found(point) => {
            tracing::info!(
                "qualifying forecast point: {}% at {}",
                point.precipitation_probability,
                point.date_time
            );
            match tasks.create_reminder(&point).await {
                Ok(description) => status.set(description),
                // No retry within the cycle; the next daily check gets
                // another chance. Status stays unset for this cycle.
                Err(e) => tracing::error!("reminder task not created: {e}"),
            }
        }
        Evaluation::NotFound => {
            tracing::info!("no forecast point above threshold");
            status.set(LOW_CHANCE_STATUS.to_string());
        }
    }

    Ok(())
}
