//! Review persistence port.

use async_trait::async_trait;
use uuid::Uuid;

use playlog_core::AppResult;

use crate::review::{GameReview, NewReview, ReviewPatch};

/// Storage for game reviews.
#[async_trait]
pub trait ReviewStore: Send + Sync + 'static {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<GameReview>>;

    async fn find_by_user_and_game(
        &self,
        user_id: Uuid,
        game_external_id: &str,
    ) -> AppResult<Option<GameReview>>;

    /// Insert a review. A second review by the same user for the same game
    /// is a conflict.
    async fn create(&self, review: NewReview) -> AppResult<GameReview>;

    async fn update(&self, id: Uuid, patch: &ReviewPatch) -> AppResult<GameReview>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Reviews of a game, newest first.
    async fn list_by_game(&self, game_external_id: &str) -> AppResult<Vec<GameReview>>;

    /// Reviews written by a user, newest first.
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<GameReview>>;
}
