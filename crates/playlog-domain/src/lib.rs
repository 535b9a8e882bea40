//! # playlog-domain
//!
//! Domain entity models for Playlog and the port traits the use-case layer
//! depends on. Persisted entities derive `sqlx::FromRow`; catalog types are
//! plain value objects.
//!
//! Adapters (`playlog-database`, `playlog-catalog`) implement the traits in
//! [`ports`]; `playlog-service` consumes them as `Arc<dyn ...>`.

pub mod collection;
pub mod game;
pub mod ports;
pub mod review;
pub mod user;

pub use collection::{CollectionItem, GameEntry, GameStatus, GameSummary, NewGameEntry};
pub use game::{Game, GameFilter, GameSortField, SortOrder};
pub use review::{GameReview, NewReview, ReviewPatch};
pub use user::{NewUser, User, UserPatch};
