use serde::Serialize;

/// ClickUp task-creation request, field for field the wire format.
///
/// Built fresh each cycle and never persisted. `due_date` is epoch
/// milliseconds truncated to whole seconds; the `*_time` flags tell
/// ClickUp the dates are day-granular.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRequest {
    pub name: String,
    pub description: String,
    pub assignees: Vec<u64>,
    pub tags: Vec<String>,
    pub status: String,
    pub priority: u8,
    pub due_date: i64,
    pub due_date_time: bool,
    pub start_date_time: bool,
    pub notify_all: bool,
}

/// Task client errors.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid task URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Task API error ({status}): {message}")]
    Api { status: u16, message: String },
}
