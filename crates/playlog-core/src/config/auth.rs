//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// JWT signing configuration.
///
/// Access and refresh tokens are signed with separate secrets so a leaked
/// refresh secret cannot mint access tokens and vice versa.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret for access tokens.
    pub access_secret: String,
    /// Access token lifetime in seconds.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_seconds: u64,
    /// HMAC-SHA256 secret for refresh tokens.
    pub refresh_secret: String,
    /// Refresh token lifetime in seconds.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_seconds: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_secret", &"***")
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_secret", &"***")
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds)
            .field("password_min_length", &self.password_min_length)
            .finish()
    }
}

fn default_access_ttl() -> u64 {
    15 * 60
}

fn default_refresh_ttl() -> u64 {
    7 * 24 * 60 * 60
}

fn default_password_min() -> usize {
    8
}
