//! Catalog game value objects.

pub mod filter;
pub mod model;

pub use filter::{GameFilter, GameSortField, SortOrder};
pub use model::Game;
