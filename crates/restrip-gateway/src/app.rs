use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use restrip_core::RestripConfig;
use restrip_delivery::{
    AutoCrop, DeliverySink, ImageStore, LoggingSink, MemoryImageStore, PassthroughCrop,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Central shared state — passed as Arc<AppState> to all Axum handlers.
pub struct AppState {
    pub config: RestripConfig,
    pub images: Arc<dyn ImageStore>,
    pub sink: Arc<dyn DeliverySink>,
    pub crop: Arc<dyn AutoCrop>,
}

impl AppState {
    pub fn new(
        config: RestripConfig,
        images: Arc<dyn ImageStore>,
        sink: Arc<dyn DeliverySink>,
        crop: Arc<dyn AutoCrop>,
    ) -> Self {
        Self {
            config,
            images,
            sink,
            crop,
        }
    }

    /// Default in-process wiring: memory image store, logging delivery sink,
    /// pass-through crop.
    pub fn in_memory(config: RestripConfig) -> Self {
        Self::new(
            config,
            Arc::new(MemoryImageStore::new()),
            Arc::new(LoggingSink::new()),
            Arc::new(PassthroughCrop),
        )
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Headroom over the upload cap so our own 413 fires, not axum's.
    let body_limit = state.config.upload.max_bytes + 4 * 1024;

    Router::new()
        .route("/health", get(crate::http::health::health_handler))
        .route("/api/upload", post(crate::http::upload::upload_handler))
        .route("/api/snaps", post(crate::http::snaps::create_snap_handler))
        .route(
            "/api/process",
            post(crate::http::process::process_snap_handler),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
