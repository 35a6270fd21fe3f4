//! Health check endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. The schema bootstrap runs before the listener
/// binds, so a reachable server always has a ready table.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
