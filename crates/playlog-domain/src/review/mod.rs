//! Game reviews.

pub mod model;

pub use model::{GameReview, MAX_RATING, MIN_RATING, NewReview, ReviewPatch, is_valid_rating};
