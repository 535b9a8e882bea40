//! Catalog browsing handlers. All public.

use axum::extract::{Path, State};

use crate::dto::request::{FilterQuery, LimitQuery, SearchQuery};
use crate::dto::response::{self, ApiResponse, GameResponse};
use crate::error::ApiError;
use crate::extractors::ValidatedQuery;
use crate::state::AppState;

type GameList = Result<ApiResponse<Vec<GameResponse>>, ApiError>;

/// GET /api/games/search?q=&limit=
pub async fn search(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> GameList {
    let games = state.game_service.search_games(&query.q, query.limit).await?;
    Ok(ApiResponse::ok(response::games(games)))
}

/// GET /api/games/popular
pub async fn popular(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<LimitQuery>,
) -> GameList {
    let games = state.game_service.get_most_popular_games(query.limit).await?;
    Ok(ApiResponse::ok(response::games(games)))
}

/// GET /api/games/top
pub async fn top_rated(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<LimitQuery>,
) -> GameList {
    let games = state.game_service.get_top_rated_games(query.limit).await?;
    Ok(ApiResponse::ok(response::games(games)))
}

/// GET /api/games/upcoming
pub async fn upcoming(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<LimitQuery>,
) -> GameList {
    let games = state.game_service.get_upcoming_games(query.limit).await?;
    Ok(ApiResponse::ok(response::games(games)))
}

/// GET /api/games/recent
pub async fn recent(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<LimitQuery>,
) -> GameList {
    let games = state.game_service.get_recent_release_games(query.limit).await?;
    Ok(ApiResponse::ok(response::games(games)))
}

/// GET /api/games/filter
pub async fn filter(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<FilterQuery>,
) -> GameList {
    let games = state.game_service.get_by_filter(query.into_filter()?).await?;
    Ok(ApiResponse::ok(response::games(games)))
}

/// GET /api/games/{gameId}
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<ApiResponse<GameResponse>, ApiError> {
    let game = state.game_service.get_game_details(&game_id).await?;
    Ok(ApiResponse::ok(game.into()))
}
