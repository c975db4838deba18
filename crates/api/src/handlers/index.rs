use axum::extract::State;
use axum::Json;
use office_core::maturity::MaturityLevel;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSummary {
    pub level: u8,
    pub name: String,
    pub description: &'static str,
    pub base_path: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceIndex {
    pub message: &'static str,
    pub levels: Vec<LevelSummary>,
}

/// GET /
///
/// Lists the maturity levels this server mounts.
pub async fn service_index(State(state): State<AppState>) -> Json<ServiceIndex> {
    let levels = state
        .config
        .levels()
        .into_iter()
        .map(|level: MaturityLevel| LevelSummary {
            level: level.number(),
            name: level.to_string(),
            description: level.description(),
            base_path: level.base_path(),
        })
        .collect();

    Json(ServiceIndex {
        message: "The Office API is running",
        levels,
    })
}
