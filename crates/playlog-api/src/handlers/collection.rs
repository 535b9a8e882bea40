//! Collection handlers under `/api/users/{id}/games`.

use axum::extract::{Path, State};

use crate::dto::request::{AddGameRequest, CollectionQuery, UpdateGameStatusRequest};
use crate::dto::response::{ApiResponse, CollectionEntryResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, ValidatedQuery, parse_uuid};
use crate::state::AppState;

/// GET /api/users/{id}/games?status=&details=
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedQuery(query): ValidatedQuery<CollectionQuery>,
) -> Result<ApiResponse<Vec<CollectionEntryResponse>>, ApiError> {
    let items = state
        .collection_service
        .get_collection(&auth, parse_uuid(&id)?, query.status()?, query.details)
        .await?;

    Ok(ApiResponse::ok(
        items.into_iter().map(CollectionEntryResponse::from).collect(),
    ))
}

/// POST /api/users/{id}/games
pub async fn add(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<AddGameRequest>,
) -> Result<ApiResponse<CollectionEntryResponse>, ApiError> {
    let entry = state
        .collection_service
        .add_to_collection(&auth, parse_uuid(&id)?, &req.game_id, req.status)
        .await?;

    Ok(ApiResponse::created(entry.into()))
}

/// PUT /api/users/{id}/games/{gameId}
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, game_id)): Path<(String, String)>,
    ValidatedJson(req): ValidatedJson<UpdateGameStatusRequest>,
) -> Result<ApiResponse<CollectionEntryResponse>, ApiError> {
    let entry = state
        .collection_service
        .update_game_status(&auth, parse_uuid(&id)?, &game_id, req.status)
        .await?;

    Ok(ApiResponse::ok(entry.into()))
}

/// DELETE /api/users/{id}/games/{gameId}
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, game_id)): Path<(String, String)>,
) -> Result<ApiResponse<MessageResponse>, ApiError> {
    state
        .collection_service
        .remove_from_collection(&auth, parse_uuid(&id)?, &game_id)
        .await?;

    Ok(ApiResponse::ok(MessageResponse::new(
        "Game removed from collection",
    )))
}
