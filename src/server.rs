//! Minimal status page: one route that renders the current cycle outcome.

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use firewood_core::StatusCell;

/// Build the status-page router.
pub fn create_app(status: Arc<StatusCell>) -> Router {
    Router::new()
        .route("/", get(status_page))
        .route("/health", get(health_check))
        .with_state(status)
}

async fn status_page(State(status): State<Arc<StatusCell>>) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Firewood</title></head>\n<body>\n<h1>Firewood reminder</h1>\n<p>{}</p>\n</body>\n</html>\n",
        status.get()
    ))
}

async fn health_check() -> &'static str {
    "OK"
}
