//! # playlog-core
//!
//! Core crate for Playlog. Contains the configuration schema, the clock
//! abstraction used for anything time-sensitive, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other Playlog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
