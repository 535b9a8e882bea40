//! Game review use cases.

pub mod service;

pub use service::ReviewService;
