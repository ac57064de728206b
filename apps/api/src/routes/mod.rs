pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Signal extraction
        .route(
            "/api/v1/signals/job-description",
            post(handlers::handle_extract_jd_signals),
        )
        .route(
            "/api/v1/signals/resume",
            post(handlers::handle_extract_resume_signals),
        )
        // Scoring
        .route("/api/v1/analysis", post(handlers::handle_analyze))
        .route("/api/v1/analysis/rank", post(handlers::handle_rank))
        // Uploads
        .route(
            "/api/v1/resumes/extract-text",
            post(handlers::handle_extract_text),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
