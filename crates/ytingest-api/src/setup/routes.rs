//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use ytingest_core::Config;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    build_router(state, config.max_body_bytes())
}

/// Router with its layers; split from `setup_routes` so tests can build one
/// without a full `Config`.
pub fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", post(handlers::ingest::ingest_from_body))
        .route(
            "/ingest",
            post(handlers::ingest::ingest_from_body).get(handlers::ingest::ingest_default),
        )
        .route("/health", get(handlers::health::liveness_check))
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
