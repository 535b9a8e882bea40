//! Shared fixtures for service unit tests.

use std::collections::HashMap;
use std::sync::Arc;

use argon2::Params;
use async_trait::async_trait;

use playlog_auth::{PasswordHasher, PasswordValidator};
use playlog_core::error::AppError;
use playlog_core::AppResult;
use playlog_domain::ports::GameCatalog;
use playlog_domain::{Game, GameFilter};

pub const GOOD_PASSWORD: &str = "Secret123";

pub fn cheap_hasher() -> Arc<PasswordHasher> {
    Arc::new(PasswordHasher::with_params(
        Params::new(8, 1, 1, None).expect("argon2 params"),
    ))
}

pub fn validator() -> Arc<PasswordValidator> {
    Arc::new(PasswordValidator::default())
}

pub fn game(id: &str, title: &str) -> Game {
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
        rating: 80,
        created_at: None,
        updated_at: None,
    }
}

/// Catalog serving a fixed set of games. `failing` ids make lookups error.
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
        Ok(self.all(filter.limit.unwrap_or(50)))
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
