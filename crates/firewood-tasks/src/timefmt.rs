//! Due-date and display-time helpers for the reminder task.

use chrono::{DateTime, TimeZone};

/// Truncates an epoch-milliseconds timestamp to whole-second resolution.
///
/// The reminder is due "now", the moment the forecast was checked, not at
/// the forecasted precipitation time. That looks odd but is long-standing
/// behavior and kept as-is.
pub fn compute_due_date(now_ms: i64) -> i64 {
    (now_ms / 1000) * 1000
}

/// Formats the forecast hour the way the reminder text has always shown
/// it: render a zero-padded 12-hour clock string, then keep the first two
/// and last two characters joined by a space ("03:45:00 PM" becomes
/// "03 PM"). The minute truncation is intentional legacy behavior.
pub fn format_precipitation_time<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let rendered = timestamp.format("%I:%M:%S %p").to_string();
    let chars: Vec<char> = rendered.chars().collect();

    let head: String = chars.iter().take(2).collect();
    let tail: String = chars[chars.len().saturating_sub(2)..].iter().collect();

    format!("{head} {tail}")
}
