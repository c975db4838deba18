use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use office_core::health::{DetailedHealthCheckResponse, HealthCheckResponse, HealthStatus};
use office_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Per-level health payload.
#[derive(Serialize)]
pub struct LevelHealthResponse {
    pub status: HealthStatus,
    pub timestamp: Timestamp,
}

/// GET /health -- basic status.
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(state.health.health())
}

/// GET /health/live -- liveness probe.
async fn liveness(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(state.health.liveness())
}

/// GET /health/ready -- readiness probe with uptime and component detail.
async fn readiness(State(state): State<AppState>) -> Json<DetailedHealthCheckResponse> {
    Json(state.health.readiness())
}

/// GET /api/v{n}/health
async fn level_health() -> Json<LevelHealthResponse> {
    Json(LevelHealthResponse {
        status: HealthStatus::Healthy,
        timestamp: Utc::now(),
    })
}

/// Mount health check routes (intended for root level, NOT under a level prefix).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
}

/// Health route mounted inside each level's prefix.
pub fn level_router() -> Router<AppState> {
    Router::new().route("/health", get(level_health))
}
