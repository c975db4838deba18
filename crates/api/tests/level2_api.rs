//! Integration tests for level 2: GET verbs with meaningful status codes.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post};

#[tokio::test]
async fn list_seasons() {
    let response = get(build_test_app(), "/api/v2/seasons").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"].as_array().unwrap().len(), 9);
    assert!(json.get("links").is_none());
}

#[tokio::test]
async fn get_season() {
    let response = get(build_test_app(), "/api/v2/seasons/5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Season 5 retrieved successfully");
    assert_eq!(json["data"]["seasonNumber"], "5");
    assert_eq!(json["data"]["episodeCount"], 26);
}

#[tokio::test]
async fn list_season_episodes() {
    let response = get(build_test_app(), "/api/v2/seasons/1/episodes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let numbers: Vec<u64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["episodeNumber"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn get_episode() {
    let response = get(build_test_app(), "/api/v2/seasons/2/episodes/22").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Casino Night");
}

// ---------------------------------------------------------------------------
// Status codes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn season_out_of_range_is_404() {
    for uri in [
        "/api/v2/seasons/0",
        "/api/v2/seasons/10",
        "/api/v2/seasons/10/episodes",
        "/api/v2/seasons/-1/episodes/1",
    ] {
        let response = get(build_test_app(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
    }
}

#[tokio::test]
async fn episode_out_of_range_is_404() {
    let response = get(build_test_app(), "/api/v2/seasons/1/episodes/7").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid request");
    assert_eq!(
        json["error"],
        "Episode parameter is outside of the scope. Please select the episode number between 1 and 6 (inclusive)."
    );
}

#[tokio::test]
async fn non_numeric_segment_is_400() {
    for uri in ["/api/v2/seasons/abc", "/api/v2/seasons/1/episodes/x"] {
        let response = get(build_test_app(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid request");
    }
}

#[tokio::test]
async fn post_verb_is_not_allowed() {
    let response = post(build_test_app(), "/api/v2/seasons").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
