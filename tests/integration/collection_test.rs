//! Integration tests for a user's game collection.

use axum::http::StatusCode;
use serde_json::json;

use playlog_database::Stores;

use crate::helpers::{FakeCatalog, GAMES, TestApp};

#[tokio::test]
async fn test_add_game_defaults_to_backlog() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("alice").await;

    let response = app
        .request(
            "POST",
            &format!("/api/users/{id}/games"),
            Some(json!({ "gameId": "1942" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.data()["gameId"], "1942");
    assert_eq!(response.data()["status"], "backlog");
    assert_eq!(response.data()["userId"], id.as_str());
    assert!(response.data().get("game").is_none());
}

#[tokio::test]
async fn test_add_game_rules() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("alice").await;
    let path = format!("/api/users/{id}/games");

    let first = app
        .request("POST", &path, Some(json!({ "gameId": "1942", "status": "playing" })), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.data()["status"], "playing");

    let duplicate = app
        .request("POST", &path, Some(json!({ "gameId": "1942" })), Some(&token))
        .await;
    duplicate.assert_error(StatusCode::CONFLICT, "CONFLICT");
    assert_eq!(
        duplicate.body["message"],
        "Game already has been added to this user"
    );

    let unknown = app
        .request("POST", &path, Some(json!({ "gameId": "999999" })), Some(&token))
        .await;
    unknown.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");

    let bad_status = app
        .request(
            "POST",
            &path,
            Some(json!({ "gameId": "1020", "status": "binged" })),
            Some(&token),
        )
        .await;
    bad_status.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_collection_belongs_to_its_owner() {
    let app = TestApp::new();
    let bob = app.create_user("bob").await;
    let (_, token) = app.signed_in("alice").await;

    let list = app
        .request("GET", &format!("/api/users/{bob}/games"), None, Some(&token))
        .await;
    list.assert_error(StatusCode::FORBIDDEN, "FORBIDDEN");

    let add = app
        .request(
            "POST",
            &format!("/api/users/{bob}/games"),
            Some(json!({ "gameId": "1942" })),
            Some(&token),
        )
        .await;
    add.assert_error(StatusCode::FORBIDDEN, "FORBIDDEN");
}

#[tokio::test]
async fn test_list_filter_and_details() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("alice").await;
    let path = format!("/api/users/{id}/games");

    for (game_id, status) in [("1942", "playing"), ("7346", "completed"), ("1020", "playing")] {
        let added = app
            .request("POST", &path, Some(json!({ "gameId": game_id, "status": status })), Some(&token))
            .await;
        assert_eq!(added.status, StatusCode::CREATED);
    }

    let all = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.data().as_array().unwrap().len(), 3);

    let playing = app
        .request("GET", &format!("{path}?status=playing"), None, Some(&token))
        .await;
    let entries = playing.data().as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e["status"] == "playing"));

    let detailed = app
        .request("GET", &format!("{path}?status=completed&details=true"), None, Some(&token))
        .await;
    let entries = detailed.data().as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["game"]["id"], "7346");
    assert_eq!(
        entries[0]["game"]["title"],
        "The Legend of Zelda: Breath of the Wild"
    );

    let bad = app
        .request("GET", &format!("{path}?status=binged"), None, Some(&token))
        .await;
    bad.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_details_fail_when_any_lookup_fails() {
    let stores = Stores::in_memory();
    let healthy = TestApp::with_parts(FakeCatalog::with_games(GAMES), stores.clone());
    let (id, token) = healthy.signed_in("alice").await;
    let path = format!("/api/users/{id}/games");

    for game_id in ["1942", "1020"] {
        let added = healthy
            .request("POST", &path, Some(json!({ "gameId": game_id })), Some(&token))
            .await;
        assert_eq!(added.status, StatusCode::CREATED);
    }

    let degraded = TestApp::with_parts(FakeCatalog::with_games(GAMES).failing_on("1020"), stores);

    let detailed = degraded
        .request("GET", &format!("{path}?details=true"), None, Some(&token))
        .await;
    detailed.assert_error(StatusCode::BAD_GATEWAY, "EXTERNAL_SERVICE_ERROR");
    assert!(detailed.body.get("data").is_none());

    let plain = degraded.request("GET", &path, None, Some(&token)).await;
    assert_eq!(plain.status, StatusCode::OK);
    assert_eq!(plain.data().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_and_remove_entry() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("alice").await;
    let entry = format!("/api/users/{id}/games/1942");

    app.request(
        "POST",
        &format!("/api/users/{id}/games"),
        Some(json!({ "gameId": "1942" })),
        Some(&token),
    )
    .await;

    let updated = app
        .request("PUT", &entry, Some(json!({ "status": "fully_completed" })), Some(&token))
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{:?}", updated.body);
    assert_eq!(updated.data()["status"], "fully_completed");

    let removed = app.request("DELETE", &entry, None, Some(&token)).await;
    assert_eq!(removed.status, StatusCode::OK);

    let again = app.request("DELETE", &entry, None, Some(&token)).await;
    again.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
    assert_eq!(again.body["message"], "Game not found in collection");

    let missing = app
        .request("PUT", &entry, Some(json!({ "status": "dropped" })), Some(&token))
        .await;
    missing.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}
