//! Integration tests for account endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_register_returns_created_user() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "username": "alice",
                "email": "alice@test.com",
                "password": PASSWORD,
                "bio": "Soulslike enjoyer",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], 201);
    assert_eq!(response.body["statusMsg"], "Created");
    let data = response.data();
    assert_eq!(data["username"], "alice");
    assert_eq!(data["bio"], "Soulslike enjoyer");
    assert_eq!(data["avatarUrl"], "");
    assert!(data.get("passwordHash").is_none());
    assert!(data.get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    app.create_user("alice").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "username": "alice2",
                "email": "alice@test.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    response.assert_error(StatusCode::CONFLICT, "CONFLICT");
    assert_eq!(response.body["message"], "Email is already registered");
}

#[tokio::test]
async fn test_register_rejects_weak_password_and_bad_email() {
    let app = TestApp::new();

    let weak = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "username": "alice", "email": "alice@test.com", "password": "short" })),
            None,
        )
        .await;
    weak.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");

    let bad_email = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "username": "alice", "email": "nope", "password": PASSWORD })),
            None,
        )
        .await;
    bad_email.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
    assert_eq!(
        bad_email.body["message"],
        "Email must be a valid email address"
    );
}

#[tokio::test]
async fn test_get_user_by_id_and_email() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("alice").await;

    let by_id = app
        .request("GET", &format!("/api/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(by_id.status, StatusCode::OK);
    assert_eq!(by_id.data()["email"], "alice@test.com");

    let by_email = app
        .request("GET", "/api/users/email/alice@test.com", None, Some(&token))
        .await;
    assert_eq!(by_email.status, StatusCode::OK);
    assert_eq!(by_email.data()["id"], id.as_str());
}

#[tokio::test]
async fn test_get_user_invalid_and_unknown_id() {
    let app = TestApp::new();
    let (_, token) = app.signed_in("alice").await;

    let invalid = app
        .request("GET", "/api/users/not-a-uuid", None, Some(&token))
        .await;
    invalid.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");

    let unknown = app
        .request(
            "GET",
            "/api/users/00000000-0000-0000-0000-000000000000",
            None,
            Some(&token),
        )
        .await;
    unknown.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_update_own_profile() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("alice").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{id}"),
            Some(json!({ "bio": "Now playing Hades", "avatarUrl": "https://img.example/a.png" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["bio"], "Now playing Hades");
    assert_eq!(response.data()["avatarUrl"], "https://img.example/a.png");
    assert_eq!(response.data()["username"], "alice");
}

#[tokio::test]
async fn test_update_profile_rules() {
    let app = TestApp::new();
    let bob = app.create_user("bob").await;
    let (id, token) = app.signed_in("alice").await;

    let other = app
        .request(
            "PUT",
            &format!("/api/users/{bob}"),
            Some(json!({ "bio": "hijacked" })),
            Some(&token),
        )
        .await;
    other.assert_error(StatusCode::FORBIDDEN, "FORBIDDEN");

    let empty = app
        .request("PUT", &format!("/api/users/{id}"), Some(json!({})), Some(&token))
        .await;
    empty.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");

    let taken = app
        .request(
            "PUT",
            &format!("/api/users/{id}"),
            Some(json!({ "username": "bob" })),
            Some(&token),
        )
        .await;
    taken.assert_error(StatusCode::CONFLICT, "CONFLICT");
}

#[tokio::test]
async fn test_delete_account() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("alice").await;
    let path = format!("/api/users/{id}");

    let wrong = app
        .request("DELETE", &path, Some(json!({ "password": "Wrong1234" })), Some(&token))
        .await;
    wrong.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");

    let deleted = app
        .request("DELETE", &path, Some(json!({ "password": PASSWORD })), Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK, "{:?}", deleted.body);

    let gone = app.request("GET", &path, None, Some(&token)).await;
    gone.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_account_removes_reviews_and_collection() {
    let app = TestApp::new();
    let (bob, bob_token) = app.signed_in("bob").await;
    let (id, token) = app.signed_in("alice").await;

    for (user, tok) in [(&id, &token), (&bob, &bob_token)] {
        let added = app
            .request(
                "POST",
                &format!("/api/users/{user}/games"),
                Some(json!({ "gameId": "1942", "status": "playing" })),
                Some(tok),
            )
            .await;
        assert_eq!(added.status, StatusCode::CREATED, "{:?}", added.body);
    }
    let review = app
        .request(
            "POST",
            "/api/reviews",
            Some(json!({ "gameId": "1942", "rating": 5, "content": "Loved it" })),
            Some(&token),
        )
        .await;
    assert_eq!(review.status, StatusCode::CREATED, "{:?}", review.body);
    let review_id = review.data()["id"].as_str().unwrap().to_string();

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/users/{id}"),
            Some(json!({ "password": PASSWORD })),
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK, "{:?}", deleted.body);

    let orphan = app
        .request("GET", &format!("/api/reviews/{review_id}"), None, None)
        .await;
    orphan.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");

    let for_game = app.request("GET", "/api/games/1942/reviews", None, None).await;
    assert_eq!(for_game.status, StatusCode::OK);
    assert!(for_game.data().as_array().unwrap().is_empty());

    let bob_games = app
        .request("GET", &format!("/api/users/{bob}/games"), None, Some(&bob_token))
        .await;
    assert_eq!(bob_games.status, StatusCode::OK);
    assert_eq!(bob_games.data().as_array().unwrap().len(), 1);
}
