//! External game catalog port.

use async_trait::async_trait;

use playlog_core::AppResult;

use crate::game::{Game, GameFilter};

/// Read-only access to the third-party game database.
#[async_trait]
pub trait GameCatalog: Send + Sync + 'static {
    /// Games whose title contains `query`.
    async fn search_games(&self, query: &str, limit: u32) -> AppResult<Vec<Game>>;

    /// A single game by catalog id. Unknown ids yield `None`.
    async fn get_game_by_id(&self, id: &str) -> AppResult<Option<Game>>;

    async fn get_games_by_filter(&self, filter: &GameFilter) -> AppResult<Vec<Game>>;

    /// Most rated games first.
    async fn get_most_popular_games(&self, limit: u32) -> AppResult<Vec<Game>>;

    /// Highest rated games with enough ratings to be meaningful.
    async fn get_top_rated_games(&self, limit: u32) -> AppResult<Vec<Game>>;

    /// Unreleased games, soonest first.
    async fn get_upcoming_games(&self, limit: u32) -> AppResult<Vec<Game>>;

    /// Games released in the last 90 days, newest first.
    async fn get_recent_release_games(&self, limit: u32) -> AppResult<Vec<Game>>;
}
