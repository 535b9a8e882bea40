//! Integration tests for game reviews.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, TestResponse};

async fn post_review(app: &TestApp, token: &str, game_id: &str, rating: i32) -> TestResponse {
    app.request(
        "POST",
        "/api/reviews",
        Some(json!({
            "gameId": game_id,
            "rating": rating,
            "content": "Great story, rough combat.",
            "hoursPlayed": 120,
        })),
        Some(token),
    )
    .await
}

#[tokio::test]
async fn test_create_and_get_review() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("alice").await;

    let created = post_review(&app, &token, "1942", 5).await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    let data = created.data();
    assert_eq!(data["userId"], id.as_str());
    assert_eq!(data["gameId"], "1942");
    assert_eq!(data["rating"], 5);
    assert_eq!(data["hoursPlayed"], 120);

    let review_id = data["id"].as_str().unwrap();
    let fetched = app
        .request("GET", &format!("/api/reviews/{review_id}"), None, None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["content"], "Great story, rough combat.");
}

#[tokio::test]
async fn test_create_review_rules() {
    let app = TestApp::new();
    let (_, token) = app.signed_in("alice").await;

    assert_eq!(post_review(&app, &token, "1942", 4).await.status, StatusCode::CREATED);

    let duplicate = post_review(&app, &token, "1942", 3).await;
    duplicate.assert_error(StatusCode::CONFLICT, "CONFLICT");
    assert_eq!(duplicate.body["message"], "User has already reviewed this game");

    let out_of_range = post_review(&app, &token, "7346", 6).await;
    out_of_range.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
    assert_eq!(out_of_range.body["message"], "Rating must be between 0 and 5");

    let unknown_game = post_review(&app, &token, "999999", 3).await;
    unknown_game.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");

    let anonymous = app
        .request("POST", "/api/reviews", Some(json!({ "gameId": "7346", "rating": 3 })), None)
        .await;
    anonymous.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_only_author_can_modify_review() {
    let app = TestApp::new();
    let (_, alice) = app.signed_in("alice").await;
    let (_, bob) = app.signed_in("bob").await;

    let created = post_review(&app, &alice, "1020", 3).await;
    let path = format!("/api/reviews/{}", created.data()["id"].as_str().unwrap());

    let hijack = app
        .request("PUT", &path, Some(json!({ "rating": 0 })), Some(&bob))
        .await;
    hijack.assert_error(StatusCode::FORBIDDEN, "FORBIDDEN");
    assert_eq!(hijack.body["message"], "You can only modify your own reviews");

    let delete = app.request("DELETE", &path, None, Some(&bob)).await;
    delete.assert_error(StatusCode::FORBIDDEN, "FORBIDDEN");

    let updated = app
        .request("PUT", &path, Some(json!({ "rating": 4, "content": "Grew on me" })), Some(&alice))
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{:?}", updated.body);
    assert_eq!(updated.data()["rating"], 4);
    assert_eq!(updated.data()["content"], "Grew on me");
    assert_eq!(updated.data()["hoursPlayed"], 120);

    let empty = app.request("PUT", &path, Some(json!({})), Some(&alice)).await;
    empty.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");

    let deleted = app.request("DELETE", &path, None, Some(&alice)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request("GET", &path, None, None).await;
    gone.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
    assert_eq!(gone.body["message"], "Review not found");
}

#[tokio::test]
async fn test_reviews_by_game_and_user() {
    let app = TestApp::new();
    let (alice_id, alice) = app.signed_in("alice").await;
    let (_, bob) = app.signed_in("bob").await;

    post_review(&app, &alice, "1942", 5).await;
    post_review(&app, &alice, "7346", 4).await;
    post_review(&app, &bob, "1942", 2).await;

    let for_game = app.request("GET", "/api/games/1942/reviews", None, None).await;
    assert_eq!(for_game.status, StatusCode::OK);
    assert_eq!(for_game.data().as_array().unwrap().len(), 2);

    let for_user = app
        .request("GET", &format!("/api/users/{alice_id}/reviews"), None, None)
        .await;
    assert_eq!(for_user.status, StatusCode::OK);
    let reviews = for_user.data().as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r["userId"] == alice_id.as_str()));

    let unknown_game = app.request("GET", "/api/games/999999/reviews", None, None).await;
    unknown_game.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");

    let unknown_user = app
        .request(
            "GET",
            "/api/users/00000000-0000-0000-0000-000000000000/reviews",
            None,
            None,
        )
        .await;
    unknown_user.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}
