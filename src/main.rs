//! Firewood reminder daemon: checks the hourly forecast once a day and
//! files a "cover the firewood" task when rain is likely.

use std::sync::Arc;

use anyhow::Result;
use firewood::{cycle, scheduler, server};
use firewood_core::{Config, StatusCell};
use firewood_tasks::{TaskClient, CLICKUP_BASE_URL};
use firewood_weather::{ForecastClient, ACCUWEATHER_BASE_URL};

#[tokio::main]
async fn main() -> Result<()> {
    firewood_core::init()?;
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing::info!(
        "starting firewood daemon, daily check at {:02}:{:02}",
        config.check_hour,
        config.check_minute
    );

    let forecast = ForecastClient::new(
        ACCUWEATHER_BASE_URL,
        &config.weather_api_key,
        &config.weather_location_key,
    )?;
    let tasks = TaskClient::new(
        CLICKUP_BASE_URL,
        &config.clickup_api_key,
        &config.clickup_list_id,
    )?;
    let status = Arc::new(StatusCell::new());

    let cycle_status = status.clone();
    let (hour, minute) = (config.check_hour, config.check_minute);
    tokio::spawn(async move {
        scheduler::run_daily(hour, minute, move || {
            let forecast = forecast.clone();
            let tasks = tasks.clone();
            let status = cycle_status.clone();
            async move { cycle::run_cycle(&forecast, &tasks, &status).await }
        })
        .await;
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("status page listening on {}", config.bind_address);
    axum::serve(listener, server::create_app(status)).await?;

    Ok(())
}
