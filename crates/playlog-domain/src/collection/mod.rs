//! A user's game collection.

pub mod entry;
pub mod status;

pub use entry::{CollectionItem, GameEntry, GameSummary, NewGameEntry};
pub use status::GameStatus;
