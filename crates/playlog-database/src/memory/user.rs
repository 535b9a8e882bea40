use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use playlog_core::error::AppError;
use playlog_core::result::AppResult;
use playlog_domain::ports::UserStore;
use playlog_domain::user::{NewUser, User, UserPatch};

use super::{MemoryCollectionStore, MemoryReviewStore};

/// In-memory [`UserStore`].
///
/// When built with [`MemoryUserStore::with_dependents`], deleting a user
/// also drops their collection entries and reviews, matching the
/// `ON DELETE CASCADE` foreign keys of the Postgres schema.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
    collection: Option<Arc<MemoryCollectionStore>>,
    reviews: Option<Arc<MemoryReviewStore>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dependents(
        collection: Arc<MemoryCollectionStore>,
        reviews: Arc<MemoryReviewStore>,
    ) -> Self {
        Self {
            users: RwLock::default(),
            collection: Some(collection),
            reviews: Some(reviews),
        }
    }
}

fn check_unique(
    users: &HashMap<Uuid, User>,
    skip: Option<Uuid>,
    username: Option<&str>,
    email: Option<&str>,
) -> AppResult<()> {
    for user in users.values().filter(|u| Some(u.id) != skip) {
        if email.is_some_and(|e| user.email.eq_ignore_ascii_case(e)) {
            return Err(AppError::conflict("Email is already registered"));
        }
        if username.is_some_and(|n| user.username.eq_ignore_ascii_case(n)) {
            return Err(AppError::conflict("Username is already taken"));
        }
    }
    Ok(())
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn create(&self, data: NewUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        check_unique(&users, None, Some(&data.username), Some(&data.email))?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            avatar_url: data.avatar_url,
            bio: data.bio,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, patch: &UserPatch) -> AppResult<User> {
        let mut users = self.users.write().await;
        check_unique(
            &users,
            Some(id),
            patch.username.as_deref(),
            patch.email.as_deref(),
        )?;

        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        patch.apply_to(user);
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.password_hash = password_hash.to_string();
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut users = self.users.write().await;
        if users.remove(&id).is_none() {
            return Ok(false);
        }

        if let Some(collection) = &self.collection {
            collection.purge_user(id).await;
        }
        if let Some(reviews) = &self.reviews {
            reviews.purge_user(id).await;
        }
        Ok(true)
    }
}
