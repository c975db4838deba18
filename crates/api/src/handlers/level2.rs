//! Level 2: GET verbs and standard status codes.
//!
//! Out-of-range or missing resources are 404, malformed path segments 400.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use office_core::error::CoreError;
use office_core::types::{Episode, Number, Season};

use crate::error::{LevelRejection, LevelResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v2/seasons
pub async fn list_seasons(State(state): State<AppState>) -> LevelResult<Vec<Season>> {
    Ok(Json(ApiResponse::ok(
        state.catalog.all_seasons().to_vec(),
        "Seasons retrieved successfully",
    )))
}

/// GET /api/v2/seasons/{season}
pub async fn get_season(
    State(state): State<AppState>,
    path: Result<Path<Number>, PathRejection>,
) -> LevelResult<Season> {
    let Path(season) = path.map_err(reject_path)?;
    let found = state
        .catalog
        .find_season(season)
        .map_err(LevelRejection::standard)?;

    Ok(Json(ApiResponse::ok(
        found.clone(),
        format!("Season {season} retrieved successfully"),
    )))
}

/// GET /api/v2/seasons/{season}/episodes
pub async fn list_season_episodes(
    State(state): State<AppState>,
    path: Result<Path<Number>, PathRejection>,
) -> LevelResult<Vec<Episode>> {
    let Path(season) = path.map_err(reject_path)?;
    let episodes = state
        .catalog
        .find_season_episodes(season)
        .map_err(LevelRejection::standard)?;

    Ok(Json(ApiResponse::ok(
        episodes.into_iter().cloned().collect(),
        format!("Episodes for season {season} retrieved successfully"),
    )))
}

/// GET /api/v2/seasons/{season}/episodes/{episode}
pub async fn get_episode(
    State(state): State<AppState>,
    path: Result<Path<(Number, Number)>, PathRejection>,
) -> LevelResult<Episode> {
    let Path((season, episode)) = path.map_err(reject_path)?;
    let episode = state
        .catalog
        .find_episode(season, episode)
        .map_err(LevelRejection::standard)?;

    Ok(Json(ApiResponse::ok(
        episode.clone(),
        "Episode retrieved successfully",
    )))
}

fn reject_path(rejection: PathRejection) -> LevelRejection {
    LevelRejection::standard(CoreError::InvalidParameter(rejection.body_text()))
}
