//! HTTP routes: `/`, `/moon` and `/health`.

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::routing::get;
use chandra_ephem::EphemerisSource;
use chandra_search::{SnapshotConfig, compute_snapshot};
use chandra_time::UtcTime;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::error::ApiError;
use crate::response::MoonResponse;

pub const BANNER: &str = "Vedic Moon API. Try /moon?iso=2025-08-08T12:00:00Z";

/// Shared, read-only request context.
pub struct AppState {
    pub source: Arc<dyn EphemerisSource>,
    pub snapshot: SnapshotConfig,
    pub request_timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct MoonQuery {
    iso: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/moon", get(moon))
        .route("/health", get(health))
        .with_state(state)
}

async fn root() -> &'static str {
    BANNER
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

async fn moon(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MoonQuery>,
) -> Result<Json<MoonResponse>, ApiError> {
    let instant = match query.iso.as_deref().map(str::trim) {
        Some(iso) if !iso.is_empty() => iso.parse::<UtcTime>().map_err(ApiError::InvalidInstant)?,
        _ => UtcTime::now(),
    };

    let worker = Arc::clone(&state);
    let task = tokio::task::spawn_blocking(move || {
        compute_snapshot(worker.source.as_ref(), &worker.snapshot, &instant)
    });
    let snapshot = match tokio::time::timeout(state.request_timeout, task).await {
        Err(_) => {
            return Err(ApiError::Timeout(format!(
                "request exceeded {} ms",
                state.request_timeout.as_millis()
            )));
        }
        Ok(Err(join)) => return Err(ApiError::Compute(join.to_string())),
        Ok(Ok(result)) => result?,
    };

    info!(
        %instant,
        rashi = snapshot.rashi.name,
        nakshatra = snapshot.nakshatra.name,
        "moon snapshot served"
    );
    Ok(Json(MoonResponse::from(&snapshot)))
}
