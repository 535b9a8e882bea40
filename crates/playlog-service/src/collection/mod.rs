//! Personal game collection use cases.

pub mod service;

pub use service::CollectionService;
