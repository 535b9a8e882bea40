//! Login, token refresh and password changes.

pub mod service;

pub use service::AuthService;
