//! Authentication service: login, token refresh, and password changes.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use playlog_auth::{JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator, TokenPair};
use playlog_core::error::AppError;
use playlog_domain::ports::UserStore;

use crate::context::RequestContext;

/// Handles credential checks and token issuance.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            encoder,
            decoder,
        }
    }

    /// Verifies credentials and issues a token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }

        let user = self
            .users
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(AppError::unauthorized("Invalid password"));
        }

        let tokens = self.encoder.generate_token_pair(user.id)?;

        info!(user_id = %user.id, "User logged in");

        Ok(tokens)
    }

    /// Exchanges a valid refresh token for a new pair.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        if refresh_token.trim().is_empty() {
            return Err(AppError::validation("Refresh token is required"));
        }

        let claims = self.decoder.decode_refresh_token(refresh_token.trim())?;
        let user_id = claims.user_id();

        // The account may have been deleted since the token was issued.
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::unauthorized("Invalid refresh token"));
        }

        let tokens = self.encoder.generate_token_pair(user_id)?;

        info!(user_id = %user_id, "Tokens refreshed");

        Ok(tokens)
    }

    /// Changes the caller's password after verifying the current one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(AppError::validation(
                "Current password and new password are required",
            ));
        }
        ctx.ensure_self(user_id)?;

        self.validator.validate(new_password)?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !self
            .hasher
            .verify_password(current_password, &user.password_hash)?
        {
            return Err(AppError::unauthorized("Current password is incorrect"));
        }

        let new_hash = self.hasher.hash_password(new_password)?;
        self.users.update_password(user_id, &new_hash).await?;

        info!(user_id = %user_id, "Password changed");

        Ok(())
    }
}
