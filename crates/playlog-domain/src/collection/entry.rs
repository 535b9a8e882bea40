//! Collection entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::GameStatus;
use crate::game::Game;

/// A game a user has added to their collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct GameEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Catalog id of the game.
    pub game_external_id: String,
    pub status: GameStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to add a game to a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameEntry {
    pub user_id: Uuid,
    pub game_external_id: String,
    pub status: GameStatus,
}

/// The catalog fields attached to a collection entry on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub external_id: String,
    pub title: String,
    pub cover_url: Option<String>,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            external_id: game.external_id.clone(),
            title: game.title.clone(),
            cover_url: game.cover_url.clone(),
        }
    }
}

/// A collection entry, optionally enriched with catalog details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    #[serde(flatten)]
    pub entry: GameEntry,
    /// `None` when enrichment was not requested or the catalog no longer
    /// knows the game.
    pub game: Option<GameSummary>,
}
