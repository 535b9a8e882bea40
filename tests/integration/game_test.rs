//! Integration tests for the public catalog endpoints.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_search_games() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/games/search?q=witcher", None, None).await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let games = response.data().as_array().unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["id"], "1942");
    assert_eq!(games[0]["title"], "The Witcher 3: Wild Hunt");
    assert_eq!(games[0]["coverUrl"], "https://img.example/1942.jpg");
}

#[tokio::test]
async fn test_search_requires_two_characters() {
    let app = TestApp::new();

    let short = app.request("GET", "/api/games/search?q=a", None, None).await;
    short.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");

    let missing = app.request("GET", "/api/games/search", None, None).await;
    missing.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_lists_respect_limit() {
    let app = TestApp::new();

    for path in ["popular", "top", "upcoming", "recent"] {
        let response = app
            .request("GET", &format!("/api/games/{path}?limit=2"), None, None)
            .await;
        assert_eq!(response.status, StatusCode::OK, "{path}: {:?}", response.body);
        assert_eq!(response.data().as_array().unwrap().len(), 2, "{path}");
    }

    let default = app.request("GET", "/api/games/popular", None, None).await;
    assert_eq!(default.data().as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_limit_out_of_range() {
    let app = TestApp::new();

    let zero = app.request("GET", "/api/games/top?limit=0", None, None).await;
    zero.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");

    let huge = app.request("GET", "/api/games/top?limit=501", None, None).await;
    huge.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_filter_games() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            "/api/games/filter?minRating=75&sortBy=rating&sortOrder=desc&limit=1",
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_filter_rejects_bad_input() {
    let app = TestApp::new();

    let sort = app
        .request("GET", "/api/games/filter?sortBy=popularity", None, None)
        .await;
    sort.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");

    let rating = app
        .request("GET", "/api/games/filter?minRating=120", None, None)
        .await;
    rating.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");

    let dates = app
        .request(
            "GET",
            "/api/games/filter?fromDate=2024-01-01T00:00:00Z&toDate=2023-01-01T00:00:00Z",
            None,
            None,
        )
        .await;
    dates.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
    assert_eq!(dates.body["message"], "From date must not be after to date");
}

#[tokio::test]
async fn test_get_game_details() {
    let app = TestApp::new();

    let found = app.request("GET", "/api/games/7346", None, None).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.data()["id"], "7346");
    assert_eq!(found.data()["rating"], 90);

    let missing = app.request("GET", "/api/games/999999", None, None).await;
    missing.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
    assert_eq!(missing.body["message"], "Game not found");
}

#[tokio::test]
async fn test_health_and_unknown_route() {
    let app = TestApp::new();

    let health = app.request("GET", "/api/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.data()["status"], "ok");
    assert_eq!(health.data()["database"], "memory");

    let unknown = app.request("GET", "/api/nothing-here", None, None).await;
    unknown.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_wrong_method_uses_error_envelope() {
    let app = TestApp::new();
    let (id, token) = app.signed_in("alice").await;

    let patched = app
        .request("PATCH", &format!("/api/users/{id}"), None, Some(&token))
        .await;
    patched.assert_error(StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED");
    assert_eq!(patched.body["statusMsg"], "Method Not Allowed");

    let get_login = app.request("GET", "/api/auth/login", None, None).await;
    get_login.assert_error(StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED");
}
