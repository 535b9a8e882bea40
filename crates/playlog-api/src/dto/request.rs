//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use playlog_core::error::AppError;
use playlog_domain::{GameFilter, GameSortField, GameStatus, ReviewPatch, SortOrder, UserPatch};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Account registration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub bio: Option<String>,
}

/// Profile update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
    #[validate(url(message = "Avatar URL must be a valid URL"))]
    pub avatar_url: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            bio: req.bio,
            avatar_url: req.avatar_url,
        }
    }
}

/// Account deletion must be confirmed with the password.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeleteAccountRequest {
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Add a catalog game to a collection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddGameRequest {
    #[validate(length(min = 1, message = "Game id is required"))]
    pub game_id: String,
    pub status: Option<GameStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateGameStatusRequest {
    pub status: GameStatus,
}

/// `GET /users/{id}/games` query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CollectionQuery {
    pub status: Option<String>,
    /// Attach catalog details to every entry.
    #[serde(default)]
    pub details: bool,
}

impl CollectionQuery {
    pub fn status(&self) -> Result<Option<GameStatus>, AppError> {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .transpose()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(min = 2, message = "Search query must be at least 2 characters long"))]
    pub q: String,
    #[validate(range(min = 1, max = 500, message = "Limit must be between 1 and 500"))]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LimitQuery {
    #[validate(range(min = 1, max = 500, message = "Limit must be between 1 and 500"))]
    pub limit: Option<u32>,
}

/// `GET /games/filter` query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub title: Option<String>,
    #[validate(range(min = 0.0, max = 100.0, message = "Minimum rating must be between 0 and 100"))]
    pub min_rating: Option<f64>,
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
    /// `title`, `rating` or `releaseDate`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_order: Option<String>,
    #[validate(range(min = 1, max = 500, message = "Limit must be between 1 and 500"))]
    pub limit: Option<u32>,
}

impl FilterQuery {
    pub fn into_filter(self) -> Result<GameFilter, AppError> {
        let sort_by = self
            .sort_by
            .as_deref()
            .map(str::parse::<GameSortField>)
            .transpose()?;
        let sort_order = self
            .sort_order
            .as_deref()
            .map(str::parse::<SortOrder>)
            .transpose()?;

        Ok(GameFilter {
            title: self.title,
            min_rating: self.min_rating,
            from_date: self.from_date,
            to_date: self.to_date,
            sort_by,
            sort_order,
            limit: self.limit,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, message = "Game id is required"))]
    pub game_id: String,
    #[validate(range(min = 0, max = 5, message = "Rating must be between 0 and 5"))]
    pub rating: i32,
    #[serde(default)]
    #[validate(length(max = 5000, message = "Review must be at most 5000 characters"))]
    pub content: String,
    #[validate(range(min = 0, message = "Hours played cannot be negative"))]
    pub hours_played: Option<i32>,
    pub played_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    #[validate(range(min = 0, max = 5, message = "Rating must be between 0 and 5"))]
    pub rating: Option<i32>,
    #[validate(length(max = 5000, message = "Review must be at most 5000 characters"))]
    pub content: Option<String>,
    #[validate(range(min = 0, message = "Hours played cannot be negative"))]
    pub hours_played: Option<i32>,
    pub played_at: Option<DateTime<Utc>>,
}

impl From<UpdateReviewRequest> for ReviewPatch {
    fn from(req: UpdateReviewRequest) -> Self {
        Self {
            rating: req.rating,
            content: req.content,
            hours_played: req.hours_played,
            played_at: req.played_at,
        }
    }
}
