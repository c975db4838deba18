//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same middleware
//! stack.

use std::any::Any;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::handlers::fallback;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request correlation ID.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Build the full application [`Router`] with all middleware layers.
///
/// Each level from [`ServerConfig::levels`] is nested under its base path.
/// The middleware stack is applied bottom-up:
///
/// 1. CORS
/// 2. Set correlation ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate correlation ID to response
/// 5. Request timeout
/// 6. Panic recovery (catch panics, return 500 JSON)
///
/// Each level also recovers its own panics so they keep the level's envelope;
/// the outer panic layer only sees the root routes and the fallback.
pub fn build_app_router(state: AppState) -> Router {
    let config = state.config.clone();

    let mut app = Router::new().merge(routes::root_routes());
    for level in config.levels() {
        tracing::debug!(%level, base_path = level.base_path(), "Mounting maturity level");
        app = app.nest(
            level.base_path(),
            routes::level_routes(level, config.development),
        );
    }

    apply_middleware(app.fallback(fallback::route_not_found), &config).with_state(state)
}

/// Wrap `app` in the shared middleware stack listed on [`build_app_router`].
pub fn apply_middleware(app: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let cors = build_cors_layer(config);
    let correlation_header = HeaderName::from_static(CORRELATION_ID_HEADER);
    let expose_panic_details = config.development;

    app
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500 JSON.
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
            fallback::panic_response(panic, expose_panic_details)
        }))
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Propagate correlation ID to response.
        .layer(PropagateRequestIdLayer::new(correlation_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set correlation ID on incoming requests.
        .layer(SetRequestIdLayer::new(correlation_header, MakeRequestUuid))
        // CORS.
        .layer(cors)
}

/// Build the CORS middleware layer from server configuration.
///
/// Origins are validated when the configuration is loaded; any that still
/// fail to parse are skipped with a warning.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(e) => {
                tracing::warn!(origin = %o, error = %e, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
