//! HTTP handlers for ingest, query, and metrics.
//!
//! Provides:
//! - `POST /ingest` — append one structured event to the store
//! - `GET /logs` — filtered/sorted/limited event retrieval
//! - `GET /metrics` — aggregate counts over the full store

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    Json,
};
use logsift_types::LogEvent;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Default result limit for `GET /logs`.
const DEFAULT_LIMIT: usize = 50;

/// Handler for `POST /ingest`.
///
/// Appends the event and replies with an empty `204`. Ingestion never
/// fails once the body deserialises: the store has no capacity limit and
/// no validation beyond the JSON shape.
pub async fn ingest_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(event): Json<LogEvent>,
) -> StatusCode {
    state.store.add(event);
    StatusCode::NO_CONTENT
}

/// Query parameters for `GET /logs`.
///
/// Everything is received as a raw string and parsed leniently: this is an
/// operational read path, so a malformed value behaves like an absent one
/// instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    /// Filter by service tag (case-insensitive exact match).
    pub service: Option<String>,
    /// Filter by severity (case-insensitive exact match).
    pub level: Option<String>,
    /// Filter by username (exact match).
    pub username: Option<String>,
    /// Filter by deny-list flag (`true`/`false`).
    #[serde(rename = "isBlacklisted")]
    pub is_blacklisted: Option<String>,
    /// Maximum number of events to return (default 50).
    pub limit: Option<String>,
    /// Sort key; only the literal `timestamp` is recognised.
    pub sort: Option<String>,
}

/// Handler for `GET /logs`.
///
/// Applies all supplied filters conjunctively over a store snapshot, then
/// sorts ascending by timestamp iff `sort=timestamp`, then truncates to the
/// limit, in that order. Limit after sort means sorting changes which
/// events survive truncation.
pub async fn get_logs_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<LogsQuery>,
) -> Json<Vec<LogEvent>> {
    let blacklisted = params
        .is_blacklisted
        .as_deref()
        .and_then(|v| v.parse::<bool>().ok());
    let limit = params
        .limit
        .as_deref()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_LIMIT);

    let mut events: Vec<LogEvent> = state
        .store
        .snapshot()
        .into_iter()
        .filter(|event| {
            params
                .service
                .as_deref()
                .is_none_or(|s| s.eq_ignore_ascii_case(&event.service))
        })
        .filter(|event| {
            params
                .level
                .as_deref()
                .is_none_or(|l| l.eq_ignore_ascii_case(&event.severity))
        })
        .filter(|event| {
            params
                .username
                .as_deref()
                .is_none_or(|u| u == event.username)
        })
        .filter(|event| blacklisted.is_none_or(|b| b == event.blacklisted))
        .collect();

    if params
        .sort
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case("timestamp"))
    {
        events.sort_by_key(|event| event.timestamp);
    }

    events.truncate(limit);
    Json(events)
}

/// Response body for `GET /metrics`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    /// Total number of stored events.
    pub total_logs: usize,
    /// Event count per category.
    pub logs_by_category: HashMap<String, u64>,
    /// Event count per severity.
    pub logs_by_severity: HashMap<String, u64>,
}

/// Handler for `GET /metrics`.
///
/// Aggregates over one snapshot, so the three numbers are always mutually
/// consistent even while ingestion is in flight.
pub async fn metrics_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<MetricsResponse> {
    let events = state.store.snapshot();

    let mut by_category: HashMap<String, u64> = HashMap::new();
    let mut by_severity: HashMap<String, u64> = HashMap::new();
    for event in &events {
        *by_category.entry(event.event_category.clone()).or_insert(0) += 1;
        *by_severity.entry(event.severity.clone()).or_insert(0) += 1;
    }

    Json(MetricsResponse {
        total_logs: events.len(),
        logs_by_category: by_category,
        logs_by_severity: by_severity,
    })
}
