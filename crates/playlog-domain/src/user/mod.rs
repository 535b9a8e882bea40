//! User account entity.

pub mod model;

pub use model::{NewUser, User, UserPatch};
