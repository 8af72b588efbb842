//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use luma_threshold::Threshold;
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::api;
use crate::services::{UploadStore, PUBLIC_PREFIX};

/// Upload size cap, matching the multipart form limit of the boundary
/// contract (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UploadStore>,
    pub threshold: Threshold,
}

/// Create application state backed by the given uploads directory.
pub fn create_app_state(
    uploads_dir: impl AsRef<Path>,
    threshold: Threshold,
) -> anyhow::Result<AppState> {
    let store = Arc::new(UploadStore::new(uploads_dir.as_ref())?);
    Ok(AppState { store, threshold })
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests. Stored
/// artifacts are served directly from the uploads directory, and the
/// permissive CORS policy mirrors what browser clients of the upload UI
/// expect: any origin, GET/POST/OPTIONS, Content-Type header.
pub fn build_router(state: AppState) -> Router {
    let uploads_root = state.store.root().to_path_buf();

    Router::new()
        .route("/api/upload", post(api::handle_upload))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Static serving of stored artifacts
        .nest_service(PUBLIC_PREFIX, ServeDir::new(uploads_root))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
