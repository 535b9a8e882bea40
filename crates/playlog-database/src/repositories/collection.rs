//! Collection (game entry) repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use playlog_core::error::AppError;
use playlog_core::result::AppResult;
use playlog_domain::collection::{GameEntry, GameStatus, NewGameEntry};
use playlog_domain::ports::CollectionStore;

use super::{map_read_error, map_write_error};

/// Postgres-backed [`CollectionStore`].
#[derive(Debug, Clone)]
pub struct CollectionRepository {
    pool: PgPool,
}

impl CollectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionStore for CollectionRepository {
    async fn find_entry(
        &self,
        user_id: Uuid,
        game_external_id: &str,
    ) -> AppResult<Option<GameEntry>> {
        sqlx::query_as::<_, GameEntry>(
            "SELECT * FROM game_entries WHERE user_id = $1 AND game_external_id = $2",
        )
        .bind(user_id)
        .bind(game_external_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "Failed to find game entry"))
    }

    async fn add_entry(&self, entry: NewGameEntry) -> AppResult<GameEntry> {
        sqlx::query_as::<_, GameEntry>(
            "INSERT INTO game_entries (id, user_id, game_external_id, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(entry.user_id)
        .bind(&entry.game_external_id)
        .bind(entry.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, "Failed to add game entry", |_| {
                "Game already has been added to this user".to_string()
            })
        })
    }

    async fn update_status(
        &self,
        user_id: Uuid,
        game_external_id: &str,
        status: GameStatus,
    ) -> AppResult<GameEntry> {
        sqlx::query_as::<_, GameEntry>(
            "UPDATE game_entries SET status = $3, updated_at = NOW() \
             WHERE user_id = $1 AND game_external_id = $2 \
             RETURNING *",
        )
        .bind(user_id)
        .bind(game_external_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "Failed to update game status"))?
        .ok_or_else(|| AppError::not_found("Game not found in this user's collection"))
    }

    async fn remove_entry(&self, user_id: Uuid, game_external_id: &str) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM game_entries WHERE user_id = $1 AND game_external_id = $2")
                .bind(user_id)
                .bind(game_external_id)
                .execute(&self.pool)
                .await
                .map_err(|e| map_read_error(e, "Failed to remove game entry"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_entries(
        &self,
        user_id: Uuid,
        status: Option<GameStatus>,
    ) -> AppResult<Vec<GameEntry>> {
        sqlx::query_as::<_, GameEntry>(
            "SELECT * FROM game_entries \
             WHERE user_id = $1 AND ($2::game_status IS NULL OR status = $2) \
             ORDER BY updated_at DESC",
        )
        .bind(user_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "Failed to list game entries"))
    }
}
