//! Port traits consumed by the use-case layer.
//!
//! Stores report uniqueness violations as `ErrorKind::Conflict` and
//! updates against missing rows as `ErrorKind::NotFound`, whatever the
//! backing technology.

pub mod catalog;
pub mod collection;
pub mod review;
pub mod user;

pub use catalog::GameCatalog;
pub use collection::CollectionStore;
pub use review::ReviewStore;
pub use user::UserStore;
