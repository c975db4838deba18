//! Level 3: level 2 semantics plus hypermedia controls.
//!
//! Every envelope carries `links`, and so does every season or episode inside
//! it. Failures carry recovery links pointing back to valid resources.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use office_core::error::CoreError;
use office_core::maturity::MaturityLevel;
use office_core::types::Number;

use crate::error::{LevelRejection, LevelResult};
use crate::hateoas::{EpisodeResource, LinkBuilder, SeasonResource};
use crate::response::ApiResponse;
use crate::state::AppState;

fn links() -> LinkBuilder {
    LinkBuilder::new(MaturityLevel::Level3.base_path())
}

/// GET /api/v3/seasons
pub async fn list_seasons(State(state): State<AppState>) -> LevelResult<Vec<SeasonResource>> {
    let links = links();
    let seasons = state
        .catalog
        .all_seasons()
        .iter()
        .map(|season| SeasonResource {
            links: links.season_links(season.season_number),
            season: season.clone(),
        })
        .collect();

    Ok(Json(
        ApiResponse::ok(seasons, "Seasons retrieved successfully")
            .with_links(links.seasons_envelope()),
    ))
}

/// GET /api/v3/seasons/{season}
pub async fn get_season(
    State(state): State<AppState>,
    path: Result<Path<Number>, PathRejection>,
) -> LevelResult<SeasonResource> {
    let links = links();
    let Path(season) = path.map_err(reject_path)?;
    let found = state
        .catalog
        .find_season(season)
        .map_err(|err| reject(err, season))?;

    let resource = SeasonResource {
        season: found.clone(),
        links: links.season_detail_links(season, state.catalog.season_count()),
    };

    Ok(Json(
        ApiResponse::ok(resource, format!("Season {season} retrieved successfully"))
            .with_links(links.season_envelope(season)),
    ))
}

/// GET /api/v3/seasons/{season}/episodes
pub async fn list_season_episodes(
    State(state): State<AppState>,
    path: Result<Path<Number>, PathRejection>,
) -> LevelResult<Vec<EpisodeResource>> {
    let links = links();
    let Path(season) = path.map_err(reject_path)?;
    let episodes = state
        .catalog
        .find_season_episodes(season)
        .map_err(|err| reject(err, season))?;

    let count = episodes.len();
    let resources = episodes
        .into_iter()
        .map(|episode| EpisodeResource {
            links: links.episode_links(season, episode.episode_number, count),
            episode: episode.clone(),
        })
        .collect();

    Ok(Json(
        ApiResponse::ok(
            resources,
            format!("Episodes for season {season} retrieved successfully"),
        )
        .with_links(links.episodes_envelope(season)),
    ))
}

/// GET /api/v3/seasons/{season}/episodes/{episode}
pub async fn get_episode(
    State(state): State<AppState>,
    path: Result<Path<(Number, Number)>, PathRejection>,
) -> LevelResult<EpisodeResource> {
    let links = links();
    let Path((season, number)) = path.map_err(reject_path)?;
    let episode = state
        .catalog
        .find_episode(season, number)
        .map_err(|err| reject(err, season))?;

    let resource = EpisodeResource {
        links: links.episode_detail_links(
            season,
            number,
            state.catalog.episode_count(season),
            state.catalog.season_count(),
        ),
        episode: episode.clone(),
    };

    Ok(Json(
        ApiResponse::ok(resource, "Episode retrieved successfully")
            .with_links(links.episode_envelope(season, number)),
    ))
}

/// Attach the recovery links that fit the failure.
fn reject(err: CoreError, season: Number) -> LevelRejection {
    let links = links();
    let recovery = match &err {
        CoreError::EpisodeOutOfRange { .. } | CoreError::EpisodeNotFound { .. } => {
            links.episode_error_links(season)
        }
        _ => links.season_error_links(),
    };
    LevelRejection::standard(err).with_links(recovery)
}

fn reject_path(rejection: PathRejection) -> LevelRejection {
    LevelRejection::standard(CoreError::InvalidParameter(rejection.body_text()))
        .with_links(links().season_error_links())
}
