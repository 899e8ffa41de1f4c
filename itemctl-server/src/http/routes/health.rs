//! Liveness and greeting endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Plain message response
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /health - never touches the database
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// GET /
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello There!",
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/", get(root))
}
