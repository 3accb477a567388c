//! Route configuration and setup

use crate::handlers::{academies, health};
use crate::middleware::request_id_middleware;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(state: Arc<AppState>) -> Router<()> {
    let academy_routes = Router::new()
        .route(
            "/academies",
            get(academies::get_without_academy).options(academies::preflight),
        )
        .route(
            "/academies/{academy_id}",
            get(academies::get_academy_media).options(academies::preflight),
        )
        .route(
            "/academies/{academy_id}/playlist",
            get(academies::get_academy_media).options(academies::preflight),
        );

    let health_routes = Router::new()
        .route("/health", get(health::liveness_check))
        .route("/health/ready", get(health::readiness_check));

    academy_routes
        .merge(health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state)
}
