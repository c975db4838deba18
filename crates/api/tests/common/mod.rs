#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use office_api::config::ServerConfig;
use office_api::router::build_app_router;
use office_api::state::AppState;
use office_core::maturity::MaturityLevel;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and every level mounted.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        maturity_level: None,
        development: false,
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app() -> Router {
    build_app_router(AppState::new(test_config()))
}

/// Build the router with only one maturity level mounted.
pub fn build_level_app(level: MaturityLevel) -> Router {
    let config = ServerConfig {
        maturity_level: Some(level),
        ..test_config()
    };
    build_app_router(AppState::new(config))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn post_raw(app: Router, uri: &str, raw: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(raw)).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Find the `href` of the link with relation `rel` in a `links` array.
pub fn link_href<'a>(links: &'a serde_json::Value, rel: &str) -> Option<&'a str> {
    links
        .as_array()?
        .iter()
        .find(|l| l["rel"] == rel)
        .and_then(|l| l["href"].as_str())
}

/// Relations of a `links` array, in order.
pub fn link_rels(links: &serde_json::Value) -> Vec<String> {
    links
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|l| l["rel"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
