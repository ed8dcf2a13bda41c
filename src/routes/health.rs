use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::response::ApiResponse;

/// Liveness only; storage is not contacted.
#[derive(Serialize, ToSchema)]
pub struct Liveness {
    pub status: String,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is up", body = ApiResponse<Liveness>),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<ApiResponse<Liveness>> {
    Json(ApiResponse::success(
        "Service is running",
        Liveness {
            status: "up".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    ))
}
