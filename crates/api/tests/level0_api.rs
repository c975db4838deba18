//! Integration tests for the level 0 RPC endpoint (`POST /api/v0/theOffice`).

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json, post_raw};
use serde_json::json;

const ENDPOINT: &str = "/api/v0/theOffice";

// ---------------------------------------------------------------------------
// Successful actions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_all_seasons() {
    let response = post_json(build_test_app(), ENDPOINT, json!({"action": "getAllSeasons"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Seasons retrieved successfully");
    assert!(json["error"].is_null());
    assert!(json.get("links").is_none());

    let seasons = json["data"].as_array().unwrap();
    assert_eq!(seasons.len(), 9);
    assert_eq!(seasons[0]["seasonNumber"], "1");
    assert_eq!(seasons[0]["episodeCount"], 6);
    assert_eq!(seasons[8]["seasonNumber"], "9");
    assert_eq!(seasons[8]["episodeCount"], 23);
}

#[tokio::test]
async fn get_season_episodes() {
    let body = json!({"action": "getSeasonEpisodes", "season": 2});
    let response = post_json(build_test_app(), ENDPOINT, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Episodes for season 2 retrieved successfully");
    let episodes = json["data"].as_array().unwrap();
    assert_eq!(episodes.len(), 22);
    assert_eq!(episodes[0]["title"], "The Dundies");
    assert_eq!(episodes[21]["title"], "Casino Night");
}

#[tokio::test]
async fn get_episode() {
    let body = json!({"action": "getEpisode", "season": 1, "episode": 1});
    let response = post_json(build_test_app(), ENDPOINT, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Episode retrieved successfully");
    assert_eq!(
        json["data"],
        json!({
            "season": 1,
            "episodeNumber": 1,
            "title": "Pilot",
            "releasedDate": "2005-03-24"
        })
    );
}

#[tokio::test]
async fn action_is_case_insensitive() {
    let response = post_json(build_test_app(), ENDPOINT, json!({"action": "GETALLSEASONS"})).await;
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
}

// ---------------------------------------------------------------------------
// Failures are always HTTP 200
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_action_is_reported_with_200() {
    let response = post_json(build_test_app(), ENDPOINT, json!({"action": "deleteSeason"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["data"].is_null());
    assert_eq!(json["message"], "Invalid action");
    assert_eq!(json["error"], "Unknown action: deleteSeason");
}

#[tokio::test]
async fn missing_season_parameter() {
    let response = post_json(
        build_test_app(),
        ENDPOINT,
        json!({"action": "getSeasonEpisodes"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid request");
    assert_eq!(json["error"], "Season parameter is required");
}

#[tokio::test]
async fn missing_episode_parameter() {
    let body = json!({"action": "getEpisode", "season": 3});
    let json = body_json(post_json(build_test_app(), ENDPOINT, body).await).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["error"],
        "Both season and episode parameters are required"
    );
}

#[tokio::test]
async fn season_out_of_range() {
    let body = json!({"action": "getSeasonEpisodes", "season": 10});
    let response = post_json(build_test_app(), ENDPOINT, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid request");
    assert_eq!(
        json["error"],
        "Season parameter is outside of the scope. Please select the season number between 1 and 9 (inclusive)."
    );
}

#[tokio::test]
async fn episode_out_of_range_reports_season_size() {
    let body = json!({"action": "getEpisode", "season": 1, "episode": 7});
    let json = body_json(post_json(build_test_app(), ENDPOINT, body).await).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["error"],
        "Episode parameter is outside of the scope. Please select the episode number between 1 and 6 (inclusive)."
    );
}

#[tokio::test]
async fn season_is_checked_before_episode() {
    let body = json!({"action": "getEpisode", "season": 0, "episode": 99});
    let json = body_json(post_json(build_test_app(), ENDPOINT, body).await).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Season parameter is outside of the scope"));
}

#[tokio::test]
async fn malformed_body_is_reported_with_200() {
    let response = post_raw(build_test_app(), ENDPOINT, "{not json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid request");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn wrong_verb_is_rejected_by_the_router() {
    let response = get(build_test_app(), ENDPOINT).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
