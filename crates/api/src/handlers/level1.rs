//! Level 1: resource URIs, but still POST and always HTTP 200.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use office_core::error::CoreError;
use office_core::types::{Episode, Number, Season};

use crate::error::{LevelRejection, LevelResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/seasons
pub async fn list_seasons(State(state): State<AppState>) -> LevelResult<Vec<Season>> {
    Ok(Json(ApiResponse::ok(
        state.catalog.all_seasons().to_vec(),
        "Seasons retrieved successfully",
    )))
}

/// POST /api/v1/seasons/{season}/episodes
pub async fn list_season_episodes(
    State(state): State<AppState>,
    path: Result<Path<Number>, PathRejection>,
) -> LevelResult<Vec<Episode>> {
    let Path(season) = path.map_err(reject_path)?;
    let episodes = state
        .catalog
        .find_season_episodes(season)
        .map_err(LevelRejection::always_ok)?;

    Ok(Json(ApiResponse::ok(
        episodes.into_iter().cloned().collect(),
        format!("Episodes for season {season} retrieved successfully"),
    )))
}

/// POST /api/v1/seasons/{season}/episodes/{episode}
pub async fn get_episode(
    State(state): State<AppState>,
    path: Result<Path<(Number, Number)>, PathRejection>,
) -> LevelResult<Episode> {
    let Path((season, episode)) = path.map_err(reject_path)?;
    let episode = state
        .catalog
        .find_episode(season, episode)
        .map_err(LevelRejection::always_ok)?;

    Ok(Json(ApiResponse::ok(
        episode.clone(),
        "Episode retrieved successfully",
    )))
}

fn reject_path(rejection: PathRejection) -> LevelRejection {
    LevelRejection::always_ok(CoreError::InvalidParameter(rejection.body_text()))
}
