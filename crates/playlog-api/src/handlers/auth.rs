//! Authentication handlers.

use axum::extract::{Path, State};

use playlog_auth::TokenPair;

use crate::dto::request::{ChangePasswordRequest, LoginRequest, RefreshTokenRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, parse_uuid};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<ApiResponse<TokenPair>, ApiError> {
    let tokens = state.auth_service.login(&req.email, &req.password).await?;
    Ok(ApiResponse::ok(tokens))
}

/// POST /api/auth/refresh-token
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshTokenRequest>,
) -> Result<ApiResponse<TokenPair>, ApiError> {
    let tokens = state.auth_service.refresh_token(&req.refresh_token).await?;
    Ok(ApiResponse::ok(tokens))
}

/// PUT /api/auth/change-password/{id}
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> Result<ApiResponse<MessageResponse>, ApiError> {
    let user_id = parse_uuid(&id)?;
    state
        .auth_service
        .change_password(&auth, user_id, &req.current_password, &req.new_password)
        .await?;

    Ok(ApiResponse::ok(MessageResponse::new(
        "Password changed successfully",
    )))
}
