//! Panic recovery and request timeouts through the full middleware stack.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get as get_route, post as post_route};
use axum::Router;
use common::{body_json, get, post, test_config};
use office_api::config::ServerConfig;
use office_api::router::apply_middleware;
use office_api::routes::recover_panics;
use office_api::state::AppState;
use office_core::maturity::MaturityLevel;

async fn exploding_handler() -> &'static str {
    panic!("catalog exploded")
}

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "too late"
}

fn app_with(routes: Router<AppState>, config: ServerConfig) -> Router {
    let state = AppState::new(config.clone());
    apply_middleware(routes, &config).with_state(state)
}

/// A level mounted at its base path with an extra `/boom` route that panics.
fn exploding_level(level: MaturityLevel, development: bool) -> Router {
    let routes = Router::new().route("/boom", post_route(exploding_handler));
    let app = Router::new().nest(
        level.base_path(),
        recover_panics(routes, level, development),
    );
    app_with(
        app,
        ServerConfig {
            development,
            ..test_config()
        },
    )
}

// ---------------------------------------------------------------------------
// Panics inside a level keep the level's envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn level0_panic_is_still_200() {
    let response = post(exploding_level(MaturityLevel::Level0, false), "/api/v0/boom").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["data"].is_null());
    assert_eq!(json["message"], "An error occurred while processing the request");
    assert_eq!(json["error"], "Internal error: unexpected failure");
    assert!(json.get("links").is_none());
}

#[tokio::test]
async fn level1_panic_is_still_200() {
    let response = post(exploding_level(MaturityLevel::Level1, false), "/api/v1/boom").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn level2_panic_is_500_with_envelope() {
    let response = post(exploding_level(MaturityLevel::Level2, false), "/api/v2/boom").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "An error occurred while processing the request");
    assert!(json.get("links").is_none());
    assert!(json.get("statusCode").is_none());
}

#[tokio::test]
async fn level3_panic_carries_empty_links() {
    let response = post(exploding_level(MaturityLevel::Level3, false), "/api/v3/boom").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["links"], serde_json::json!([]));
}

#[tokio::test]
async fn panic_message_is_exposed_in_development() {
    let response = post(exploding_level(MaturityLevel::Level2, true), "/api/v2/boom").await;
    let json = body_json(response).await;
    assert_eq!(json["error"], "Internal error: catalog exploded");
}

#[tokio::test]
async fn panic_outside_a_level_uses_the_global_error_body() {
    let routes = Router::new().route("/boom", post_route(exploding_handler));
    let response = post(app_with(routes, test_config()), "/boom").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["statusCode"], 500);
    assert_eq!(json["message"], "An internal server error occurred");
    assert!(json.get("details").is_none());
}

// ---------------------------------------------------------------------------
// Request timeout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn slow_request_times_out_with_408() {
    let config = ServerConfig {
        request_timeout_secs: 1,
        ..test_config()
    };
    let routes = Router::new().route("/slow", get_route(slow_handler));

    let response = get(app_with(routes, config), "/slow").await;
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}
