//! Route configuration for the Gray code API

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Conversion
        .route("/api/convert", post(handlers::convert_handler))

        // Sequences
        .route("/api/table", get(handlers::table_handler))
        .route("/api/sequence", get(handlers::sequence_handler))
        .route("/api/diff", get(handlers::diff_handler))

        // Visualization
        .route("/api/disk", get(handlers::disk_handler))
        .route("/api/disk.svg", get(handlers::disk_svg_handler))

        // Assistant
        .route("/api/assistant", post(handlers::assistant_handler))

        // Information endpoints
        .route("/api/info", get(handlers::info_handler))

        // Health check
        .route("/health", get(handlers::health_handler))
        .with_state(state)
}
