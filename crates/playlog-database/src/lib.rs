//! # playlog-database
//!
//! Storage adapters for Playlog: PostgreSQL repositories built on `sqlx`,
//! process-local in-memory stores, and the [`Stores`] bundle that picks one
//! of them from configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;

pub use connection::DatabasePool;
pub use provider::Stores;
