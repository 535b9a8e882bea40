//! User account use cases.

pub mod service;

pub use service::{RegisterUser, UserService};
