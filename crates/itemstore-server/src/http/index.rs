//! Root greeting and the artificial slow endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::app_state::AppState;

/// `GET /`
pub async fn index(State(state): State<AppState>) -> &'static str {
    state.logger().request("/", "request on root route");
    "Hello World!"
}

/// JSON body of `GET /slow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStatus {
    pub status: &'static str,
    pub message: &'static str,
}

impl TaskStatus {
    pub fn success() -> Self {
        Self {
            status: "Success",
            message: "Heavy task",
        }
    }

    /// Reserved error shape; the slow task currently has no failing step.
    pub fn failure() -> Self {
        Self {
            status: "Error",
            message: "Failed to complete task",
        }
    }

    fn http_status(&self) -> StatusCode {
        if self.status == "Success" {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for TaskStatus {
    fn into_response(self) -> Response {
        (self.http_status(), Json(self)).into_response()
    }
}

/// `GET /slow`: sleeps for `server.slow_delay_ms`, then reports success.
pub async fn slow(State(state): State<AppState>) -> TaskStatus {
    tokio::time::sleep(state.cfg().server.slow_delay()).await;
    TaskStatus::success()
}
