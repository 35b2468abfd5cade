use crate::{AppState, health, submit_contact};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.max_body_bytes;

    Router::new()
        // Contact endpoint, plus the aliases static hosts POST to
        .route("/api/contact", post(submit_contact))
        .route("/.netlify/functions/api/contact", post(submit_contact))
        .route("/", post(submit_contact))
        // Health check endpoints
        .route("/api/health", get(health::api_health))
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
