//! Shared test helpers for integration tests.

use std::collections::HashMap;
use std::sync::Arc;

use argon2::Params;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use playlog_api::{AppState, build_app};
use playlog_auth::PasswordHasher;
use playlog_core::AppResult;
use playlog_core::config::AppConfig;
use playlog_core::config::app::ServerConfig;
use playlog_core::config::auth::AuthConfig;
use playlog_core::config::catalog::CatalogConfig;
use playlog_core::config::database::DatabaseConfig;
use playlog_core::config::logging::LoggingConfig;
use playlog_core::error::AppError;
use playlog_database::Stores;
use playlog_domain::ports::GameCatalog;
use playlog_domain::{Game, GameFilter};

pub const PASSWORD: &str = "Secret123";

/// Games every test app knows about.
pub const GAMES: &[(&str, &str)] = &[
    ("1020", "Grand Theft Auto V"),
    ("1942", "The Witcher 3: Wild Hunt"),
    ("7346", "The Legend of Zelda: Breath of the Wild"),
];

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig::default(),
        auth: AuthConfig {
            access_secret: "test-access-secret".to_string(),
            access_ttl_seconds: 900,
            refresh_secret: "test-refresh-secret".to_string(),
            refresh_ttl_seconds: 3600,
            password_min_length: 8,
        },
        catalog: CatalogConfig {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            token_url: "http://127.0.0.1:9/oauth2/token".to_string(),
            base_url: "http://127.0.0.1:9/v4".to_string(),
            refresh_margin_seconds: 300,
            request_timeout_seconds: 1,
        },
        logging: LoggingConfig::default(),
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// In-memory stores and a catalog holding [`GAMES`].
    pub fn new() -> Self {
        Self::with_parts(FakeCatalog::with_games(GAMES), Stores::in_memory())
    }

    /// Apps built over the same `stores` see the same data and accept each
    /// other's tokens.
    pub fn with_parts(catalog: FakeCatalog, stores: Stores) -> Self {
        let config = test_config();
        let cors = config.server.cors.clone();
        let hasher = PasswordHasher::with_params(
            Params::new(8, 1, 1, None).expect("argon2 params"),
        );
        let state = AppState::new(
            config,
            stores,
            Arc::new(catalog),
            Arc::new(hasher),
        );

        Self {
            router: build_app(state, &cors),
        }
    }

    /// Register `username` with `{username}@test.com` and return the user id.
    pub async fn create_user(&self, username: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/users",
                Some(json!({
                    "username": username,
                    "email": format!("{username}@test.com"),
                    "password": PASSWORD,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        response.data()["id"]
            .as_str()
            .expect("No id in registration response")
            .to_string()
    }

    /// Login and return JWT access token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({
                    "email": format!("{username}@test.com"),
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.data()["accessToken"]
            .as_str()
            .expect("No accessToken in login response")
            .to_string()
    }

    /// Register and login in one go. Returns `(user_id, access_token)`.
    pub async fn signed_in(&self, username: &str) -> (String, String) {
        let id = self.create_user(username).await;
        let token = self.login(username, PASSWORD).await;
        (id, token)
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str, token).await
    }

    /// Like [`request`](Self::request) but with a body sent verbatim.
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of a success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// Assert an error envelope with the given status and error code.
    pub fn assert_error(&self, status: StatusCode, code: &str) {
        assert_eq!(self.status, status, "unexpected body: {:?}", self.body);
        assert_eq!(self.body["status"], status.as_u16());
        assert_eq!(self.body["error"], code);
        assert!(self.body["message"].is_string());
    }
}

/// Catalog serving a fixed set of games. Ids in `failing` make lookups error.
#[derive(Default)]
pub struct FakeCatalog {
    games: HashMap<String, Game>,
    failing: Vec<String>,
}

impl FakeCatalog {
    pub fn with_games(games: &[(&str, &str)]) -> Self {
        Self {
            games: games
                .iter()
                .map(|(id, title)| (id.to_string(), game(id, title)))
                .collect(),
            failing: vec![],
        }
    }

    pub fn failing_on(mut self, id: &str) -> Self {
        self.failing.push(id.to_string());
        self
    }

    fn all(&self, limit: u32) -> Vec<Game> {
        let mut games: Vec<Game> = self.games.values().cloned().collect();
        games.sort_by(|a, b| a.external_id.cmp(&b.external_id));
        games.truncate(limit as usize);
        games
    }
}

fn game(id: &str, title: &str) -> Game {
    Game {
        external_id: id.to_string(),
        title: title.to_string(),
        description: None,
        release_date: None,
        developer: None,
        publisher: None,
        cover_url: Some(format!("https://img.example/{id}.jpg")),
        genres: vec![],
        platforms: vec![],
        rating: 90,
        created_at: None,
        updated_at: None,
    }
}

#[async_trait]
impl GameCatalog for FakeCatalog {
    async fn search_games(&self, query: &str, limit: u32) -> AppResult<Vec<Game>> {
        let needle = query.to_lowercase();
        Ok(self
            .all(u32::MAX)
            .into_iter()
            .filter(|g| g.title.to_lowercase().contains(&needle))
            .take(limit as usize)
            .collect())
    }

    async fn get_game_by_id(&self, id: &str) -> AppResult<Option<Game>> {
        if self.failing.iter().any(|f| f == id) {
            return Err(AppError::external_service("Catalog API internal server error"));
        }
        Ok(self.games.get(id).cloned())
    }

    async fn get_games_by_filter(&self, filter: &GameFilter) -> AppResult<Vec<Game>> {
        Ok(self.all(filter.limit.unwrap_or(10)))
    }

    async fn get_most_popular_games(&self, limit: u32) -> AppResult<Vec<Game>> {
        Ok(self.all(limit))
    }

    async fn get_top_rated_games(&self, limit: u32) -> AppResult<Vec<Game>> {
        Ok(self.all(limit))
    }

    async fn get_upcoming_games(&self, limit: u32) -> AppResult<Vec<Game>> {
        Ok(self.all(limit))
    }

    async fn get_recent_release_games(&self, limit: u32) -> AppResult<Vec<Game>> {
        Ok(self.all(limit))
    }
}
