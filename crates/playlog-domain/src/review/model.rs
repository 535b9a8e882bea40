//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lowest accepted review score.
pub const MIN_RATING: i32 = 0;
/// Highest accepted review score.
pub const MAX_RATING: i32 = 5;

/// A user's review of a catalog game. One per user per game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct GameReview {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_external_id: String,
    /// Score from [`MIN_RATING`] to [`MAX_RATING`].
    pub rating: i32,
    pub content: String,
    pub hours_played: Option<i32>,
    /// When the user played the game, if they said.
    pub played_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub user_id: Uuid,
    pub game_external_id: String,
    pub rating: i32,
    pub content: String,
    pub hours_played: Option<i32>,
    pub played_at: Option<DateTime<Utc>>,
}

/// Partial review update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewPatch {
    pub rating: Option<i32>,
    pub content: Option<String>,
    pub hours_played: Option<i32>,
    pub played_at: Option<DateTime<Utc>>,
}

impl ReviewPatch {
    pub fn is_empty(&self) -> bool {
        self.rating.is_none()
            && self.content.is_none()
            && self.hours_played.is_none()
            && self.played_at.is_none()
    }

    /// Apply the patch to an in-memory review.
    pub fn apply_to(&self, review: &mut GameReview) {
        if let Some(rating) = self.rating {
            review.rating = rating;
        }
        if let Some(content) = &self.content {
            review.content = content.clone();
        }
        if let Some(hours) = self.hours_played {
            review.hours_played = Some(hours);
        }
        if let Some(played_at) = self.played_at {
            review.played_at = Some(played_at);
        }
    }
}

/// Whether `rating` is an accepted review score.
pub fn is_valid_rating(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(is_valid_rating(0));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(-1));
        assert!(!is_valid_rating(6));
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let now = Utc::now();
        let mut review = GameReview {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            game_external_id: "1942".into(),
            rating: 4,
            content: "Great".into(),
            hours_played: Some(40),
            played_at: None,
            created_at: now,
            updated_at: now,
        };
        let patch = ReviewPatch {
            rating: Some(5),
            ..Default::default()
        };
        patch.apply_to(&mut review);
        assert_eq!(review.rating, 5);
        assert_eq!(review.content, "Great");
        assert_eq!(review.hours_played, Some(40));
    }
}
