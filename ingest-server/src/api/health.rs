//! Health Check API Handler

use axum::{http::StatusCode, response::IntoResponse};

/// GET /
/// Liveness check for the chat platform and load balancers
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Upload service is alive")
}
