//! Health handler.
//!
//! - GET /  -> fixed payload identifying the service

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// `GET /`
///
/// Always returns 200 OK with a fixed JSON body. This endpoint is cheap
/// and never touches the stores.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            message: "Inventory service running".into(),
        }),
    )
}

#[derive(Serialize)]
struct HealthResponse {
    message: String,
}
