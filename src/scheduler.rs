//! Daily scheduling: fire once at the next occurrence of the configured
//! local time, then every 24 hours.

use std::future::Future;
use std::time::Duration;

use chrono::{Local, NaiveDateTime, TimeDelta};

/// Fixed inter-cycle period. Local wall-clock is only consulted once, at
/// startup; a DST change after that shifts later fire times by the DST
/// delta. Accepted limitation.
pub const PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Delay until the next occurrence of `hour:minute:00`.
///
/// Target is today's occurrence; if that has already passed, tomorrow's.
/// Pure so the arithmetic is testable without real timers.
pub fn initial_delay(now: NaiveDateTime, hour: u32, minute: u32) -> Duration {
    let target = now
        .date()
        .and_hms_opt(hour.min(23), minute.min(59), 0)
        .unwrap_or(now);

    let delta = target - now;
    let delta = if delta < TimeDelta::zero() {
        delta + TimeDelta::hours(24)
    } else {
        delta
    };

    delta.to_std().unwrap_or(Duration::ZERO)
}

/// Run `cycle` at the next occurrence of the given local time, then every
/// 24 hours, indefinitely. There is no cancellation hook: the scheduler
/// lives exactly as long as the process.
pub async fn run_daily<F, Fut>(hour: u32, minute: u32, mut cycle: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let delay = initial_delay(Local::now().naive_local(), hour, minute);
    tracing::info!(
        "first forecast check at {hour:02}:{minute:02}, in {} seconds",
        delay.as_secs()
    );
    tokio::time::sleep(delay).await;

    // The first tick of an interval completes immediately, so this is the
    // one-shot fire followed by the fixed repeat.
    let mut ticker = tokio::time::interval(PERIOD);
    loop {
        ticker.tick().await;
        cycle().await;
    }
}
