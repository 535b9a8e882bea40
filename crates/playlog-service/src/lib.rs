//! # playlog-service
//!
//! Use-case layer for Playlog. Each service validates input, enforces
//! ownership through [`RequestContext`], and orchestrates the store and
//! catalog ports.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod collection;
pub mod context;
pub mod game;
pub mod review;
pub mod user;

#[cfg(test)]
mod test_support;

pub use auth::AuthService;
pub use collection::CollectionService;
pub use context::RequestContext;
pub use game::GameService;
pub use review::ReviewService;
pub use user::{RegisterUser, UserService};
