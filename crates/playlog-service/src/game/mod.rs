//! Catalog browsing use cases.

pub mod service;

pub use service::{GameService, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
