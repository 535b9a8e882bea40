//! Account registration, lookup, profile updates and deletion.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use playlog_auth::{PasswordHasher, PasswordValidator};
use playlog_core::error::AppError;
use playlog_domain::ports::UserStore;
use playlog_domain::{NewUser, User, UserPatch};

use crate::context::RequestContext;

/// Data for creating an account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Defaults to an empty string.
    pub bio: Option<String>,
}

/// Handles user account operations.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

fn required(value: &str, what: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{what} is required")));
    }
    Ok(())
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
        }
    }

    /// Creates an account after checking the password policy and that the
    /// email and username are free.
    pub async fn register(&self, req: RegisterUser) -> Result<User, AppError> {
        required(&req.username, "Username")?;
        required(&req.email, "Email")?;
        required(&req.password, "Password")?;

        self.validator.validate(&req.password)?;

        let email = req.email.trim().to_string();
        let username = req.username.trim().to_string();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email is already registered"));
        }
        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("Username is already taken"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .users
            .create(NewUser {
                username,
                email,
                password_hash,
                bio: req.bio.unwrap_or_default(),
                avatar_url: String::new(),
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get_user(&self, id: Uuid) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Gets a user by email address.
    pub async fn get_user_by_email(&self, email: &str) -> Result<User, AppError> {
        required(email, "Email")?;
        self.users
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the caller's own profile.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        patch: UserPatch,
    ) -> Result<User, AppError> {
        ctx.ensure_self(id)?;

        if patch.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }
        if let Some(username) = &patch.username {
            required(username, "Username")?;
        }
        if let Some(email) = &patch.email {
            required(email, "Email")?;
        }

        let user = self.users.update(id, &patch).await?;

        info!(user_id = %id, "Profile updated");

        Ok(user)
    }

    /// Deletes the caller's own account after re-checking the password.
    pub async fn delete_account(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        password: &str,
    ) -> Result<(), AppError> {
        ctx.ensure_self(id)?;
        required(password, "Password")?;

        let user = self.get_user(id).await?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized("Invalid password"));
        }

        if !self.users.delete(id).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(user_id = %id, "Account deleted");

        Ok(())
    }
}
