//! Game reviews: one per user per game, editable only by their author.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use playlog_core::error::AppError;
use playlog_domain::ports::{GameCatalog, ReviewStore, UserStore};
use playlog_domain::review::{MAX_RATING, MIN_RATING, is_valid_rating};
use playlog_domain::{GameReview, NewReview, ReviewPatch};

use crate::context::RequestContext;

#[derive(Clone)]
pub struct ReviewService {
    reviews: Arc<dyn ReviewStore>,
    users: Arc<dyn UserStore>,
    catalog: Arc<dyn GameCatalog>,
}

fn check_rating(rating: i32) -> Result<(), AppError> {
    if !is_valid_rating(rating) {
        return Err(AppError::validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(())
}

fn check_hours(hours: Option<i32>) -> Result<(), AppError> {
    if hours.is_some_and(|h| h < 0) {
        return Err(AppError::validation("Hours played cannot be negative"));
    }
    Ok(())
}

impl ReviewService {
    pub fn new(
        reviews: Arc<dyn ReviewStore>,
        users: Arc<dyn UserStore>,
        catalog: Arc<dyn GameCatalog>,
    ) -> Self {
        Self {
            reviews,
            users,
            catalog,
        }
    }

    async fn ensure_game_exists(&self, game_id: &str) -> Result<(), AppError> {
        match self.catalog.get_game_by_id(game_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Game not found")),
        }
    }

    async fn ensure_user_exists(&self, user_id: Uuid) -> Result<(), AppError> {
        match self.users.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("User not found")),
        }
    }

    async fn owned_review(&self, ctx: &RequestContext, id: Uuid) -> Result<GameReview, AppError> {
        let review = self.get_review(id).await?;
        if review.user_id != ctx.user_id {
            return Err(AppError::forbidden("You can only modify your own reviews"));
        }
        Ok(review)
    }

    pub async fn create_review(
        &self,
        ctx: &RequestContext,
        mut new: NewReview,
    ) -> Result<GameReview, AppError> {
        new.game_external_id = new.game_external_id.trim().to_string();
        if new.game_external_id.is_empty() {
            return Err(AppError::validation("Game id is required"));
        }
        ctx.ensure_self(new.user_id)?;
        check_rating(new.rating)?;
        check_hours(new.hours_played)?;

        self.ensure_user_exists(new.user_id).await?;
        self.ensure_game_exists(&new.game_external_id).await?;

        if self
            .reviews
            .find_by_user_and_game(new.user_id, &new.game_external_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("User has already reviewed this game"));
        }

        let review = self.reviews.create(new).await?;

        info!(
            review_id = %review.id,
            user_id = %review.user_id,
            game_id = %review.game_external_id,
            "Review created"
        );

        Ok(review)
    }

    pub async fn update_review(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        patch: ReviewPatch,
    ) -> Result<GameReview, AppError> {
        if patch.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }
        if let Some(rating) = patch.rating {
            check_rating(rating)?;
        }
        check_hours(patch.hours_played)?;

        self.owned_review(ctx, id).await?;
        let review = self.reviews.update(id, &patch).await?;

        info!(review_id = %id, "Review updated");

        Ok(review)
    }

    pub async fn delete_review(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.owned_review(ctx, id).await?;

        if !self.reviews.delete(id).await? {
            return Err(AppError::not_found("Review not found"));
        }

        info!(review_id = %id, "Review deleted");

        Ok(())
    }

    pub async fn get_review(&self, id: Uuid) -> Result<GameReview, AppError> {
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found"))
    }

    pub async fn get_game_reviews(&self, game_id: &str) -> Result<Vec<GameReview>, AppError> {
        let game_id = game_id.trim();
        if game_id.is_empty() {
            return Err(AppError::validation("Game id is required"));
        }
        self.ensure_game_exists(game_id).await?;
        self.reviews.list_by_game(game_id).await
    }

    pub async fn get_user_reviews(&self, user_id: Uuid) -> Result<Vec<GameReview>, AppError> {
        self.ensure_user_exists(user_id).await?;
        self.reviews.list_by_user(user_id).await
    }
}
