//! JWT token creation.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use playlog_core::config::auth::AuthConfig;
use playlog_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Signs access and refresh tokens, each with its own secret.
#[derive(Clone)]
pub struct JwtEncoder {
    access_key: EncodingKey,
    refresh_key: EncodingKey,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds)
            .finish_non_exhaustive()
    }
}

/// Tokens returned by login and refresh.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Always `"Bearer"`.
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_key: EncodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            access_ttl_seconds: config.access_ttl_seconds as i64,
            refresh_ttl_seconds: config.refresh_ttl_seconds as i64,
        }
    }

    /// Generates a new access + refresh token pair for the given user.
    pub fn generate_token_pair(&self, user_id: Uuid) -> Result<TokenPair, AppError> {
        let now = Utc::now().timestamp();

        let access_token = self.sign(
            Claims {
                sub: user_id,
                iat: now,
                exp: now + self.access_ttl_seconds,
                jti: Uuid::new_v4(),
                token_type: TokenType::Access,
            },
            &self.access_key,
        )?;

        let refresh_token = self.sign(
            Claims {
                sub: user_id,
                iat: now,
                exp: now + self.refresh_ttl_seconds,
                jti: Uuid::new_v4(),
                token_type: TokenType::Refresh,
            },
            &self.refresh_key,
        )?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_ttl_seconds.max(0) as u64,
        })
    }

    fn sign(&self, claims: Claims, key: &EncodingKey) -> Result<String, AppError> {
        encode(&Header::default(), &claims, key).map_err(|e| {
            AppError::internal(format!(
                "Failed to encode {:?} token: {e}",
                claims.token_type
            ))
        })
    }
}
