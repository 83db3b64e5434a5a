use std::time::Duration;

use chrono::{Local, Utc};
use reqwest::{header, Client};
use url::Url;

use firewood_weather::ForecastPoint;

use crate::timefmt::{compute_due_date, format_precipitation_time};
use crate::types::{TaskError, TaskRequest};

/// Production ClickUp endpoint.
pub const CLICKUP_BASE_URL: &str = "https://api.clickup.com/api/v2";

const REQUEST_TIMEOUT_SECS: u64 = 30;

const TASK_TITLE: &str = "Cover the firewood";
const TASK_STATUS: &str = "To Do";
const TASK_PRIORITY: u8 = 2;
const TASK_TAG: &str = "firewood-reminder";

/// The household operator's ClickUp user id.
const ASSIGNEE_ID: u64 = 44411049;

/// ClickUp task-creation client bound to a single list.
#[derive(Debug, Clone)]
pub struct TaskClient {
    base_url: Url,
    client: Client,
    api_key: String,
    list_id: String,
}

impl TaskClient {
    /// Create a new task client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - task service base, [`CLICKUP_BASE_URL`] in production
    /// * `api_key` - ClickUp API key, forwarded verbatim as the Authorization header
    /// * `list_id` - list the reminder task is created in
    pub fn new(base_url: &str, api_key: &str, list_id: &str) -> Result<Self, TaskError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: parse_base(base_url)?,
            client,
            api_key: api_key.to_string(),
            list_id: list_id.to_string(),
        })
    }

    /// Create the "cover the firewood" reminder for a qualifying forecast
    /// point and return the description that was submitted, so the cycle
    /// can publish it as the current status.
    ///
    /// The due date is "now" truncated to whole seconds, not the
    /// precipitation time. Any 2xx response counts as success; the body is
    /// logged, not inspected.
    pub async fn create_reminder(&self, point: &ForecastPoint) -> Result<String, TaskError> {
        let at = format_precipitation_time(&point.date_time.with_timezone(&Local));
        let description = format!(
            "The chance of precipitation is {}% at {}. Make sure you cover the firewood today.",
            point.precipitation_probability, at
        );

        let request = TaskRequest {
            name: TASK_TITLE.to_string(),
            description: description.clone(),
            assignees: vec![ASSIGNEE_ID],
            tags: vec![TASK_TAG.to_string()],
            status: TASK_STATUS.to_string(),
            priority: TASK_PRIORITY,
            due_date: compute_due_date(Utc::now().timestamp_millis()),
            due_date_time: false,
            start_date_time: false,
            notify_all: true,
        };

        let url = self.base_url.join(&format!("list/{}/task", self.list_id))?;
        tracing::debug!("creating reminder task in list {}", self.list_id);

        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TaskError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!("task service response: {body}");
        tracing::info!("reminder task created");

        Ok(description)
    }
}

/// Normalizes the base URL so `Url::join` treats it as a directory.
fn parse_base(base_url: &str) -> Result<Url, url::ParseError> {
    let mut base = base_url.trim_end_matches('/').to_string();
    base.push('/');
    Url::parse(&base)
}
