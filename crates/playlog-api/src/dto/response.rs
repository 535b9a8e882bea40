//! Response DTOs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use playlog_domain::{CollectionItem, Game, GameEntry, GameReview, GameStatus, GameSummary, User};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// `"Success"` or `"Created"`.
    pub status_msg: String,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 response.
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            status_msg: "Success".to_string(),
            data,
        }
    }

    /// 201 response.
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED.as_u16(),
            status_msg: "Created".to_string(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `"connected"`, `"unavailable"` or `"memory"`.
    pub database: String,
}

/// Public view of a user. Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            bio: user.bio,
            avatar_url: user.avatar_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub cover_url: Option<String>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub rating: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.external_id,
            title: game.title,
            description: game.description,
            release_date: game.release_date,
            developer: game.developer,
            publisher: game.publisher,
            cover_url: game.cover_url,
            genres: game.genres,
            platforms: game.platforms,
            rating: game.rating,
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }
}

/// Convert a list of games.
pub fn games(list: Vec<Game>) -> Vec<GameResponse> {
    list.into_iter().map(GameResponse::from).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummaryResponse {
    pub id: String,
    pub title: String,
    pub cover_url: Option<String>,
}

impl From<GameSummary> for GameSummaryResponse {
    fn from(summary: GameSummary) -> Self {
        Self {
            id: summary.external_id,
            title: summary.title,
            cover_url: summary.cover_url,
        }
    }
}

/// A collection entry. `game` is present only when details were requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntryResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: String,
    pub status: GameStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<GameSummaryResponse>,
}

impl From<GameEntry> for CollectionEntryResponse {
    fn from(entry: GameEntry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            game_id: entry.game_external_id,
            status: entry.status,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
            game: None,
        }
    }
}

impl From<CollectionItem> for CollectionEntryResponse {
    fn from(item: CollectionItem) -> Self {
        Self {
            game: item.game.map(GameSummaryResponse::from),
            ..Self::from(item.entry)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: String,
    pub rating: i32,
    pub content: String,
    pub hours_played: Option<i32>,
    pub played_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GameReview> for ReviewResponse {
    fn from(review: GameReview) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            game_id: review.game_external_id,
            rating: review.rating,
            content: review.content,
            hours_played: review.hours_played,
            played_at: review.played_at,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

/// Convert a list of reviews.
pub fn reviews(list: Vec<GameReview>) -> Vec<ReviewResponse> {
    list.into_iter().map(ReviewResponse::from).collect()
}
