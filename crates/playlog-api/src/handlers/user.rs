//! User account handlers.

use axum::extract::{Path, State};

use playlog_service::RegisterUser;

use crate::dto::request::{DeleteAccountRequest, RegisterRequest, UpdateUserRequest};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, parse_uuid};
use crate::state::AppState;

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<ApiResponse<UserResponse>, ApiError> {
    let user = state
        .user_service
        .register(RegisterUser {
            username: req.username,
            email: req.email,
            password: req.password,
            bio: req.bio,
        })
        .await?;

    Ok(ApiResponse::created(user.into()))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<ApiResponse<UserResponse>, ApiError> {
    let user = state.user_service.get_user(parse_uuid(&id)?).await?;
    Ok(ApiResponse::ok(user.into()))
}

/// GET /api/users/email/{email}
pub async fn get_user_by_email(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(email): Path<String>,
) -> Result<ApiResponse<UserResponse>, ApiError> {
    let user = state.user_service.get_user_by_email(&email).await?;
    Ok(ApiResponse::ok(user.into()))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<ApiResponse<UserResponse>, ApiError> {
    let user = state
        .user_service
        .update_profile(&auth, parse_uuid(&id)?, req.into())
        .await?;

    Ok(ApiResponse::ok(user.into()))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<DeleteAccountRequest>,
) -> Result<ApiResponse<MessageResponse>, ApiError> {
    state
        .user_service
        .delete_account(&auth, parse_uuid(&id)?, &req.password)
        .await?;

    Ok(ApiResponse::ok(MessageResponse::new(
        "User deleted successfully",
    )))
}
