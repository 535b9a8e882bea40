use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use playlog_core::error::AppError;
use playlog_core::result::AppResult;
use playlog_domain::ports::ReviewStore;
use playlog_domain::review::{GameReview, NewReview, ReviewPatch};

/// In-memory [`ReviewStore`].
#[derive(Debug, Default)]
pub struct MemoryReviewStore {
    reviews: RwLock<HashMap<Uuid, GameReview>>,
}

impl MemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every review written by `user_id`. Returns how many were removed.
    pub async fn purge_user(&self, user_id: Uuid) -> usize {
        let mut reviews = self.reviews.write().await;
        let before = reviews.len();
        reviews.retain(|_, r| r.user_id != user_id);
        before - reviews.len()
    }

    async fn collect_sorted(&self, keep: impl Fn(&GameReview) -> bool) -> Vec<GameReview> {
        let reviews = self.reviews.read().await;
        let mut found: Vec<GameReview> = reviews.values().filter(|r| keep(r)).cloned().collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<GameReview>> {
        Ok(self.reviews.read().await.get(&id).cloned())
    }

    async fn find_by_user_and_game(
        &self,
        user_id: Uuid,
        game_external_id: &str,
    ) -> AppResult<Option<GameReview>> {
        Ok(self
            .reviews
            .read()
            .await
            .values()
            .find(|r| r.user_id == user_id && r.game_external_id == game_external_id)
            .cloned())
    }

    async fn create(&self, review: NewReview) -> AppResult<GameReview> {
        let mut reviews = self.reviews.write().await;
        let duplicate = reviews.values().any(|r| {
            r.user_id == review.user_id && r.game_external_id == review.game_external_id
        });
        if duplicate {
            return Err(AppError::conflict("User has already reviewed this game"));
        }

        let now = Utc::now();
        let stored = GameReview {
            id: Uuid::new_v4(),
            user_id: review.user_id,
            game_external_id: review.game_external_id,
            rating: review.rating,
            content: review.content,
            hours_played: review.hours_played,
            played_at: review.played_at,
            created_at: now,
            updated_at: now,
        };
        reviews.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: Uuid, patch: &ReviewPatch) -> AppResult<GameReview> {
        let mut reviews = self.reviews.write().await;
        let review = reviews
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Review {id} not found")))?;
        patch.apply_to(review);
        review.updated_at = Utc::now();
        Ok(review.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.reviews.write().await.remove(&id).is_some())
    }

    async fn list_by_game(&self, game_external_id: &str) -> AppResult<Vec<GameReview>> {
        Ok(self
            .collect_sorted(|r| r.game_external_id == game_external_id)
            .await)
    }

    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<GameReview>> {
        Ok(self.collect_sorted(|r| r.user_id == user_id).await)
    }
}
