//! ClickUp reminder-task creation for the firewood daemon.

pub mod client;
pub mod timefmt;
pub mod types;

pub use client::{TaskClient, CLICKUP_BASE_URL};
pub use timefmt::{compute_due_date, format_precipitation_time};
pub use types::{TaskError, TaskRequest};
