//! Logsift server library logic.
//!
//! The server owns the central [`store::LogStore`] and exposes it over
//! HTTP: collectors `POST /ingest` classified events, operators read them
//! back through `GET /logs` and `GET /metrics`.

pub mod api;
pub mod config;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use store::LogStore;
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory event store.
    pub store: Arc<LogStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(LogStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check handler.
///
/// Returns `200 OK` with server status and version. Used by monitoring and
/// by collectors to verify the server is reachable.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ingest", post(api::ingest_handler))
        .route("/logs", get(api::get_logs_handler))
        .route("/metrics", get(api::metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(Arc::new(state)))
}
