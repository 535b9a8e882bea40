//! Review repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use playlog_core::error::AppError;
use playlog_core::result::AppResult;
use playlog_domain::ports::ReviewStore;
use playlog_domain::review::{GameReview, NewReview, ReviewPatch};

use super::{map_read_error, map_write_error};

const DUPLICATE_REVIEW: &str = "User has already reviewed this game";

/// Postgres-backed [`ReviewStore`].
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for ReviewRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<GameReview>> {
        sqlx::query_as::<_, GameReview>("SELECT * FROM game_reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "Failed to find review"))
    }

    async fn find_by_user_and_game(
        &self,
        user_id: Uuid,
        game_external_id: &str,
    ) -> AppResult<Option<GameReview>> {
        sqlx::query_as::<_, GameReview>(
            "SELECT * FROM game_reviews WHERE user_id = $1 AND game_external_id = $2",
        )
        .bind(user_id)
        .bind(game_external_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "Failed to find review"))
    }

    async fn create(&self, review: NewReview) -> AppResult<GameReview> {
        sqlx::query_as::<_, GameReview>(
            "INSERT INTO game_reviews \
                 (id, user_id, game_external_id, rating, content, hours_played, played_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(review.user_id)
        .bind(&review.game_external_id)
        .bind(review.rating)
        .bind(&review.content)
        .bind(review.hours_played)
        .bind(review.played_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create review", |_| DUPLICATE_REVIEW.into()))
    }

    async fn update(&self, id: Uuid, patch: &ReviewPatch) -> AppResult<GameReview> {
        sqlx::query_as::<_, GameReview>(
            "UPDATE game_reviews SET \
                 rating = COALESCE($2, rating), \
                 content = COALESCE($3, content), \
                 hours_played = COALESCE($4, hours_played), \
                 played_at = COALESCE($5, played_at), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(patch.rating)
        .bind(&patch.content)
        .bind(patch.hours_played)
        .bind(patch.played_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "Failed to update review"))?
        .ok_or_else(|| AppError::not_found(format!("Review {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM game_reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "Failed to delete review"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_by_game(&self, game_external_id: &str) -> AppResult<Vec<GameReview>> {
        sqlx::query_as::<_, GameReview>(
            "SELECT * FROM game_reviews WHERE game_external_id = $1 ORDER BY created_at DESC",
        )
        .bind(game_external_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "Failed to list reviews for game"))
    }

    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<GameReview>> {
        sqlx::query_as::<_, GameReview>(
            "SELECT * FROM game_reviews WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "Failed to list reviews for user"))
    }
}
