use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use playlog_core::error::AppError;
use playlog_core::result::AppResult;
use playlog_domain::collection::{GameEntry, GameStatus, NewGameEntry};
use playlog_domain::ports::CollectionStore;

type EntryKey = (Uuid, String);

/// In-memory [`CollectionStore`] keyed by `(user_id, game_external_id)`.
#[derive(Debug, Default)]
pub struct MemoryCollectionStore {
    entries: RwLock<HashMap<EntryKey, GameEntry>>,
}

impl MemoryCollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry owned by `user_id`. Returns how many were removed.
    pub async fn purge_user(&self, user_id: Uuid) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|(owner, _), _| *owner != user_id);
        before - entries.len()
    }
}

fn key(user_id: Uuid, game_external_id: &str) -> EntryKey {
    (user_id, game_external_id.to_string())
}

#[async_trait]
impl CollectionStore for MemoryCollectionStore {
    async fn find_entry(
        &self,
        user_id: Uuid,
        game_external_id: &str,
    ) -> AppResult<Option<GameEntry>> {
        Ok(self
            .entries
            .read()
            .await
            .get(&key(user_id, game_external_id))
            .cloned())
    }

    async fn add_entry(&self, entry: NewGameEntry) -> AppResult<GameEntry> {
        let mut entries = self.entries.write().await;
        let k = key(entry.user_id, &entry.game_external_id);
        if entries.contains_key(&k) {
            return Err(AppError::conflict("Game already has been added to this user"));
        }

        let now = Utc::now();
        let stored = GameEntry {
            id: Uuid::new_v4(),
            user_id: entry.user_id,
            game_external_id: entry.game_external_id,
            status: entry.status,
            created_at: now,
            updated_at: now,
        };
        entries.insert(k, stored.clone());
        Ok(stored)
    }

    async fn update_status(
        &self,
        user_id: Uuid,
        game_external_id: &str,
        status: GameStatus,
    ) -> AppResult<GameEntry> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .get_mut(&key(user_id, game_external_id))
            .ok_or_else(|| AppError::not_found("Game not found in this user's collection"))?;
        entry.status = status;
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    async fn remove_entry(&self, user_id: Uuid, game_external_id: &str) -> AppResult<bool> {
        Ok(self
            .entries
            .write()
            .await
            .remove(&key(user_id, game_external_id))
            .is_some())
    }

    async fn list_entries(
        &self,
        user_id: Uuid,
        status: Option<GameStatus>,
    ) -> AppResult<Vec<GameEntry>> {
        let entries = self.entries.read().await;
        let mut found: Vec<GameEntry> = entries
            .values()
            .filter(|e| e.user_id == user_id)
            .filter(|e| status.is_none_or(|s| e.status == s))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(found)
    }
}
