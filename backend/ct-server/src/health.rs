use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /api/health - Liveness in the shape the site's own API has always used
pub async fn api_health() -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "message": "API is running",
        })),
    )
        .into_response()
}

/// GET /health - Version, store backend and timestamp
pub async fn health(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "store": state.store.name(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Kubernetes liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Kubernetes readiness probe (can the store take inserts?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.store.check().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            warn!("Readiness check failed for {} store: {}", state.store.name(), e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
    }
}
