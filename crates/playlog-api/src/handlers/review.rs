//! Review handlers.

use axum::extract::{Path, State};

use playlog_domain::NewReview;

use crate::dto::request::{CreateReviewRequest, UpdateReviewRequest};
use crate::dto::response::{self, ApiResponse, MessageResponse, ReviewResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, parse_uuid};
use crate::state::AppState;

/// POST /api/reviews
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateReviewRequest>,
) -> Result<ApiResponse<ReviewResponse>, ApiError> {
    let review = state
        .review_service
        .create_review(
            &auth,
            NewReview {
                user_id: auth.user_id,
                game_external_id: req.game_id,
                rating: req.rating,
                content: req.content,
                hours_played: req.hours_played,
                played_at: req.played_at,
            },
        )
        .await?;

    Ok(ApiResponse::created(review.into()))
}

/// GET /api/reviews/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<ReviewResponse>, ApiError> {
    let review = state.review_service.get_review(parse_uuid(&id)?).await?;
    Ok(ApiResponse::ok(review.into()))
}

/// PUT /api/reviews/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateReviewRequest>,
) -> Result<ApiResponse<ReviewResponse>, ApiError> {
    let review = state
        .review_service
        .update_review(&auth, parse_uuid(&id)?, req.into())
        .await?;

    Ok(ApiResponse::ok(review.into()))
}

/// DELETE /api/reviews/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<ApiResponse<MessageResponse>, ApiError> {
    state
        .review_service
        .delete_review(&auth, parse_uuid(&id)?)
        .await?;

    Ok(ApiResponse::ok(MessageResponse::new("Review deleted successfully")))
}

/// GET /api/games/{gameId}/reviews
pub async fn for_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<ApiResponse<Vec<ReviewResponse>>, ApiError> {
    let list = state.review_service.get_game_reviews(&game_id).await?;
    Ok(ApiResponse::ok(response::reviews(list)))
}

/// GET /api/users/{id}/reviews
pub async fn for_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Vec<ReviewResponse>>, ApiError> {
    let list = state
        .review_service
        .get_user_reviews(parse_uuid(&id)?)
        .await?;
    Ok(ApiResponse::ok(response::reviews(list)))
}
