//! User persistence port.

use async_trait::async_trait;
use uuid::Uuid;

use playlog_core::AppResult;

use crate::user::{NewUser, User, UserPatch};

/// Storage for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Exact, case-insensitive email match.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a user. Duplicate email or username is a conflict.
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Apply a partial update and return the stored row.
    async fn update(&self, id: Uuid, patch: &UserPatch) -> AppResult<User>;

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()>;

    /// Delete a user. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
