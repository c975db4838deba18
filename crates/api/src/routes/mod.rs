pub mod health;
pub mod level0;
pub mod level1;
pub mod level2;
pub mod level3;

use std::any::Any;

use axum::routing::get;
use axum::Router;
use office_core::maturity::MaturityLevel;
use tower_http::catch_panic::CatchPanicLayer;

use crate::handlers::{self, fallback};
use crate::state::AppState;

/// Build the route tree for one maturity level, to be nested under
/// [`MaturityLevel::base_path`].
///
/// Route hierarchy (relative to the base path):
///
/// ```text
/// /health                                    level health (GET)
///
/// Level 0
/// /theOffice                                 single RPC endpoint (POST)
///
/// Level 1
/// /seasons                                   list seasons (POST)
/// /seasons/{season}/episodes                 list episodes (POST)
/// /seasons/{season}/episodes/{episode}       get episode (POST)
///
/// Levels 2 and 3
/// /seasons                                   list seasons (GET)
/// /seasons/{season}                          get season (GET)
/// /seasons/{season}/episodes                 list episodes (GET)
/// /seasons/{season}/episodes/{episode}       get episode (GET)
/// ```
///
/// Panics inside these routes become the level's failure envelope; see
/// [`recover_panics`].
pub fn level_routes(level: MaturityLevel, expose_panic_details: bool) -> Router<AppState> {
    let routes = match level {
        MaturityLevel::Level0 => level0::router(),
        MaturityLevel::Level1 => level1::router(),
        MaturityLevel::Level2 => level2::router(),
        MaturityLevel::Level3 => level3::router(),
    };
    recover_panics(
        routes.merge(health::level_router()),
        level,
        expose_panic_details,
    )
}

/// Catch panics from every route in `routes` and answer with `level`'s
/// envelope and status policy.
pub fn recover_panics(
    routes: Router<AppState>,
    level: MaturityLevel,
    expose_details: bool,
) -> Router<AppState> {
    routes.layer(CatchPanicLayer::custom(
        move |panic: Box<dyn Any + Send + 'static>| {
            fallback::level_panic_response(level, panic, expose_details)
        },
    ))
}

/// Root-level routes that exist regardless of the mounted levels.
pub fn root_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index::service_index))
        .merge(health::router())
}
