//! Game browsing backed by the external catalog.

use std::sync::Arc;

use tracing::debug;

use playlog_core::error::AppError;
use playlog_domain::ports::GameCatalog;
use playlog_domain::{Game, GameFilter};

/// Number of games returned by list endpoints when no limit is given.
pub const DEFAULT_LIST_LIMIT: u32 = 10;
/// Largest page the catalog serves.
pub const MAX_LIST_LIMIT: u32 = 500;

const MIN_SEARCH_LENGTH: usize = 2;

/// Read-only catalog queries with input validation.
#[derive(Clone)]
pub struct GameService {
    catalog: Arc<dyn GameCatalog>,
}

fn resolve_limit(limit: Option<u32>) -> Result<u32, AppError> {
    let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
    if !(1..=MAX_LIST_LIMIT).contains(&limit) {
        return Err(AppError::validation(format!(
            "Limit must be between 1 and {MAX_LIST_LIMIT}"
        )));
    }
    Ok(limit)
}

impl GameService {
    pub fn new(catalog: Arc<dyn GameCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn get_game_details(&self, id: &str) -> Result<Game, AppError> {
        if id.trim().is_empty() {
            return Err(AppError::validation("Game id is required"));
        }
        self.catalog
            .get_game_by_id(id.trim())
            .await?
            .ok_or_else(|| AppError::not_found("Game not found"))
    }

    pub async fn search_games(&self, query: &str, limit: Option<u32>) -> Result<Vec<Game>, AppError> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_LENGTH {
            return Err(AppError::validation(format!(
                "Search query must be at least {MIN_SEARCH_LENGTH} characters"
            )));
        }
        let limit = resolve_limit(limit)?;
        debug!(query, limit, "Searching games");
        self.catalog.search_games(query, limit).await
    }

    pub async fn get_most_popular_games(&self, limit: Option<u32>) -> Result<Vec<Game>, AppError> {
        self.catalog.get_most_popular_games(resolve_limit(limit)?).await
    }

    pub async fn get_top_rated_games(&self, limit: Option<u32>) -> Result<Vec<Game>, AppError> {
        self.catalog.get_top_rated_games(resolve_limit(limit)?).await
    }

    pub async fn get_upcoming_games(&self, limit: Option<u32>) -> Result<Vec<Game>, AppError> {
        self.catalog.get_upcoming_games(resolve_limit(limit)?).await
    }

    pub async fn get_recent_release_games(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<Game>, AppError> {
        self.catalog.get_recent_release_games(resolve_limit(limit)?).await
    }

    /// Validates rating bounds and date order before querying.
    pub async fn get_by_filter(&self, filter: GameFilter) -> Result<Vec<Game>, AppError> {
        if let Some(rating) = filter.min_rating {
            if !(0.0..=100.0).contains(&rating) {
                return Err(AppError::validation("Minimum rating must be between 0 and 100"));
            }
        }
        if let (Some(from), Some(to)) = (filter.from_date, filter.to_date) {
            if from > to {
                return Err(AppError::validation("From date must not be after to date"));
            }
        }
        if filter.limit.is_some() {
            resolve_limit(filter.limit)?;
        }
        self.catalog.get_games_by_filter(&filter).await
    }
}
