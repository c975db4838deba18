//! Route definitions for level 2 (HTTP verbs and status codes).

use axum::routing::get;
use axum::Router;

use crate::handlers::level2;
use crate::state::AppState;

/// ```text
/// GET /seasons                                 -> list_seasons
/// GET /seasons/{season}                        -> get_season
/// GET /seasons/{season}/episodes               -> list_season_episodes
/// GET /seasons/{season}/episodes/{episode}     -> get_episode
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/seasons", get(level2::list_seasons))
        .route("/seasons/{season}", get(level2::get_season))
        .route(
            "/seasons/{season}/episodes",
            get(level2::list_season_episodes),
        )
        .route(
            "/seasons/{season}/episodes/{episode}",
            get(level2::get_episode),
        )
}
