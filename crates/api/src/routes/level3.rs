//! Route definitions for level 3 (hypermedia).

use axum::routing::get;
use axum::Router;

use crate::handlers::level3;
use crate::state::AppState;

/// ```text
/// GET /seasons                                 -> list_seasons
/// GET /seasons/{season}                        -> get_season
/// GET /seasons/{season}/episodes               -> list_season_episodes
/// GET /seasons/{season}/episodes/{episode}     -> get_episode
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/seasons", get(level3::list_seasons))
        .route("/seasons/{season}", get(level3::get_season))
        .route(
            "/seasons/{season}/episodes",
            get(level3::list_season_episodes),
        )
        .route(
            "/seasons/{season}/episodes/{episode}",
            get(level3::get_episode),
        )
}
