use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// `postgres` or `memory`.
    pub storage: &'static str,
    pub storage_healthy: bool,
}

async fn report(state: &AppState) -> HealthResponse {
    let storage_healthy = state.storage_healthy().await;
    HealthResponse {
        status: if storage_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        storage: state.config.storage.name(),
        storage_healthy,
    }
}

/// GET /health -- always 200; `status` says whether storage answered.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(report(&state).await)
}

/// GET /health/ready -- 503 until storage answers, for load balancer probes.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let body = report(&state).await;
    let status = if body.storage_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(body))
}

/// Root-level health routes (not nested under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(ready))
}
