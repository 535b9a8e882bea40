//! Game catalog (IGDB) configuration.

use serde::{Deserialize, Serialize};

/// Credentials and endpoints for the external game catalog.
#[derive(Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// OAuth2 client id, also sent as the `Client-ID` header.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// Client-credentials token endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Refresh the bearer token this many seconds before it expires.
    #[serde(default = "default_refresh_margin")]
    pub refresh_margin_seconds: i64,
    /// Per-request timeout for catalog and token calls.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("token_url", &self.token_url)
            .field("base_url", &self.base_url)
            .field("refresh_margin_seconds", &self.refresh_margin_seconds)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}

fn default_token_url() -> String {
    "https://id.twitch.tv/oauth2/token".to_string()
}

fn default_base_url() -> String {
    "https://api.igdb.com/v4".to_string()
}

fn default_refresh_margin() -> i64 {
    300
}

fn default_request_timeout() -> u64 {
    30
}
