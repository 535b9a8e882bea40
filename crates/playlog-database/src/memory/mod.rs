//! Process-local stores.
//!
//! Used when `database.provider = "memory"` and by tests that exercise the
//! use-case and HTTP layers without PostgreSQL. Uniqueness rules match the
//! Postgres schema.

mod collection;
mod review;
mod user;

pub use collection::MemoryCollectionStore;
pub use review::MemoryReviewStore;
pub use user::MemoryUserStore;
