//! Route definitions for level 1 (resource URIs over POST).

use axum::routing::post;
use axum::Router;

use crate::handlers::level1;
use crate::state::AppState;

/// ```text
/// POST /seasons                                -> list_seasons
/// POST /seasons/{season}/episodes              -> list_season_episodes
/// POST /seasons/{season}/episodes/{episode}    -> get_episode
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/seasons", post(level1::list_seasons))
        .route(
            "/seasons/{season}/episodes",
            post(level1::list_season_episodes),
        )
        .route(
            "/seasons/{season}/episodes/{episode}",
            post(level1::get_episode),
        )
}
