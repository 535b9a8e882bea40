//! # playlog-auth
//!
//! Credential handling for Playlog users.
//!
//! ## Modules
//!
//! - `jwt`: access/refresh token pairs signed with separate HS256 secrets
//! - `password`: Argon2id password hashing and policy enforcement

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair, TokenType};
pub use password::{PasswordHasher, PasswordValidator};
