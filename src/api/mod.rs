use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::pipeline::Analyzer;

pub mod handlers;
pub mod types;

use handlers::{analyze_handler, health_handler, index_handler};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub model: Arc<str>,
}

impl AppState {
    pub fn new(analyzer: Analyzer, model: impl Into<Arc<str>>) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            model: model.into(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Single-page UI
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        // POST /api/analyze {"text": "..."}
        .route("/api/analyze", post(analyze_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
