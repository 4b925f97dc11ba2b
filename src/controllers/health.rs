use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::conversion::ConversionService;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(service): State<Arc<ConversionService>>) -> impl IntoResponse {
    if service.is_configured() {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "tts": "configured"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "tts": "missing_credentials"
            })),
        )
    }
}
