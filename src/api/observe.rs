//! Request observation middleware.
//!
//! Every request gets a fresh id and is logged on completion with its
//! method, path, and status. Observation is read-only; it never changes
//! the outcome of a request.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::observability::Logger;

use super::state::SharedState;

pub async fn observe_request(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    state.metrics.increment_requests_served();
    let status = response.status().as_u16().to_string();
    Logger::info(
        "REQUEST_COMPLETE",
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("request_id", request_id.as_str()),
            ("status", status.as_str()),
        ],
    );

    response
}
