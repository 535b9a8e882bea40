//! Collection persistence port.

use async_trait::async_trait;
use uuid::Uuid;

use playlog_core::AppResult;

use crate::collection::{GameEntry, GameStatus, NewGameEntry};

/// Storage for users' game collections.
#[async_trait]
pub trait CollectionStore: Send + Sync + 'static {
    async fn find_entry(
        &self,
        user_id: Uuid,
        game_external_id: &str,
    ) -> AppResult<Option<GameEntry>>;

    /// Insert an entry. A second entry for the same user and game is a conflict.
    async fn add_entry(&self, entry: NewGameEntry) -> AppResult<GameEntry>;

    async fn update_status(
        &self,
        user_id: Uuid,
        game_external_id: &str,
        status: GameStatus,
    ) -> AppResult<GameEntry>;

    /// Remove an entry. Returns `true` if a row was removed.
    async fn remove_entry(&self, user_id: Uuid, game_external_id: &str) -> AppResult<bool>;

    /// Entries for a user, most recently updated first.
    async fn list_entries(
        &self,
        user_id: Uuid,
        status: Option<GameStatus>,
    ) -> AppResult<Vec<GameEntry>>;
}
