//! Route definitions for the level 0 RPC endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::level0;
use crate::state::AppState;

/// ```text
/// POST /theOffice    -> handle_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/theOffice", post(level0::handle_request))
}
