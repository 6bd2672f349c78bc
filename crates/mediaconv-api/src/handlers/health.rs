//! Health check handler.

use axum::{http::StatusCode, response::IntoResponse, Json};

/// Liveness probe - process is running. The converter binary has no
/// persistent connection to probe; its absence surfaces per-request.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}
