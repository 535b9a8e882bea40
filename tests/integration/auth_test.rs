//! Integration tests for authentication flow.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.create_user("alice").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "alice@test.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], 200);
    assert_eq!(response.body["statusMsg"], "Success");
    let data = response.data();
    assert!(data["accessToken"].is_string());
    assert!(data["refreshToken"].is_string());
    assert_eq!(data["tokenType"], "Bearer");
    assert_eq!(data["expiresIn"], 900);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new();
    app.create_user("alice").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "alice@test.com", "password": "Wrong1234" })),
            None,
        )
        .await;

    response.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
    assert_eq!(response.body["statusMsg"], "Unauthorized");
    assert_eq!(response.body["message"], "Invalid password");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@test.com", "password": PASSWORD })),
            None,
        )
        .await;

    response.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = TestApp::new();

    let response = app
        .raw_request("POST", "/api/auth/login", "{\"email\":".to_string(), None)
        .await;

    response.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_refresh_token_issues_new_pair() {
    let app = TestApp::new();
    app.create_user("alice").await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "alice@test.com", "password": PASSWORD })),
            None,
        )
        .await;
    let refresh = login.data()["refreshToken"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh-token",
            Some(json!({ "refreshToken": refresh })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let access = response.data()["accessToken"].as_str().unwrap();

    let me = app
        .request("GET", "/api/users/email/alice@test.com", None, Some(access))
        .await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::new();
    let (_, access) = app.signed_in("alice").await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh-token",
            Some(json!({ "refreshToken": access })),
            None,
        )
        .await;

    response.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::new();
    let id = app.create_user("alice").await;

    let missing = app
        .request("GET", &format!("/api/users/{id}"), None, None)
        .await;
    missing.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
    assert_eq!(missing.body["message"], "No token provided");

    let garbage = app
        .request("GET", &format!("/api/users/{id}"), None, Some("not-a-jwt"))
        .await;
    garbage.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("alice").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/auth/change-password/{id}"),
            Some(json!({ "currentPassword": PASSWORD, "newPassword": "Another456" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let old = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "alice@test.com", "password": PASSWORD })),
            None,
        )
        .await;
    old.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");

    app.login("alice", "Another456").await;
}

#[tokio::test]
async fn test_change_password_wrong_current() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("alice").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/auth/change-password/{id}"),
            Some(json!({ "currentPassword": "Wrong1234", "newPassword": "Another456" })),
            Some(&token),
        )
        .await;

    response.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
    assert_eq!(response.body["message"], "Current password is incorrect");
}

#[tokio::test]
async fn test_change_password_of_another_user_is_forbidden() {
    let app = TestApp::new();
    let bob = app.create_user("bob").await;
    let (_, token) = app.signed_in("alice").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/auth/change-password/{bob}"),
            Some(json!({ "currentPassword": PASSWORD, "newPassword": "Another456" })),
            Some(&token),
        )
        .await;

    response.assert_error(StatusCode::FORBIDDEN, "FORBIDDEN");
}
