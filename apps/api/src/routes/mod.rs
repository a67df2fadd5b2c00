pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route("/api/v1/jobs/details", post(handlers::handle_job_details))
        .route(
            "/api/v1/jobs/recommendations",
            post(handlers::handle_recommendations),
        )
        // Diagnostics
        .route("/api/v1/cache/stats", get(handlers::handle_cache_stats))
        .with_state(state)
}
