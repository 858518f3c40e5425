use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::response::{self, HealthStatus};

/// GET service liveness
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API router is up and responding to requests", body = HealthStatus),
    )
)]
pub async fn health_check() -> impl IntoResponse {
    response::json(StatusCode::OK, &HealthStatus::ok())
}
