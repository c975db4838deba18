//! Level 0: a single RPC-style endpoint.
//!
//! Every operation is a POST to `/theOffice` naming an `action`. The response
//! is always HTTP 200; success or failure is reported in the envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use office_core::catalog::EpisodeCatalog;
use office_core::error::CoreError;
use office_core::types::Number;
use serde::Deserialize;

use crate::error::LevelRejection;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for the level 0 endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    #[serde(default)]
    pub action: String,
    pub season: Option<Number>,
    pub episode: Option<Number>,
}

/// POST /api/v0/theOffice
///
/// Supported actions (case-insensitive): `getAllSeasons`,
/// `getSeasonEpisodes`, `getEpisode`.
pub async fn handle_request(
    State(state): State<AppState>,
    payload: Result<Json<ApiRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return LevelRejection::always_ok(CoreError::InvalidParameter(rejection.body_text()))
                .into_response();
        }
    };

    tracing::debug!(action = %request.action, "Level 0 request");

    dispatch(&state.catalog, &request)
        .unwrap_or_else(|err| LevelRejection::always_ok(err).into_response())
}

fn dispatch(catalog: &EpisodeCatalog, request: &ApiRequest) -> Result<Response, CoreError> {
    match request.action.to_ascii_lowercase().as_str() {
        "getallseasons" => Ok(Json(ApiResponse::ok(
            catalog.all_seasons(),
            "Seasons retrieved successfully",
        ))
        .into_response()),

        "getseasonepisodes" => {
            let season = request
                .season
                .ok_or(CoreError::MissingParameter("Season parameter is required"))?;
            let episodes = catalog.find_season_episodes(season)?;
            Ok(Json(ApiResponse::ok(
                episodes,
                format!("Episodes for season {season} retrieved successfully"),
            ))
            .into_response())
        }

        "getepisode" => {
            let (Some(season), Some(episode)) = (request.season, request.episode) else {
                return Err(CoreError::MissingParameter(
                    "Both season and episode parameters are required",
                ));
            };
            let episode = catalog.find_episode(season, episode)?;
            Ok(Json(ApiResponse::ok(episode, "Episode retrieved successfully")).into_response())
        }

        _ => Err(CoreError::UnknownAction(request.action.clone())),
    }
}
