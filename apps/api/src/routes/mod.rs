pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::candidates::handlers as candidates;
use crate::extraction::handlers as extraction;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Extraction API
        .route(
            "/api/v1/resumes/extract",
            post(extraction::handle_extract).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        // Candidates API
        .route(
            "/api/v1/candidates",
            get(candidates::handle_list_candidates).post(candidates::handle_save_candidate),
        )
        .route("/api/v1/candidates/export", get(candidates::handle_export))
        .route(
            "/api/v1/candidates/export/summary",
            get(candidates::handle_export_summary),
        )
        .route("/api/v1/candidates/:id", get(candidates::handle_get_candidate))
        .with_state(state)
}
