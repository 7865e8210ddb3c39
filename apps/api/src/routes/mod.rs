pub mod health;

use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, get_service, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::generation::handlers;
use crate::state::AppState;

/// Upper bound on request bodies; larger uploads are rejected with 413 before any handler runs.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.static_dir).to_path_buf();
    let index = static_dir.join("index.html");

    Router::new()
        .route("/", get_service(ServeFile::new(index)))
        .route("/health", get(health::health_handler))
        .route("/upload", post(handlers::handle_upload))
        // Landing page assets
        .fallback_service(ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
