//! OAuth2 client-credentials token cache.
//!
//! [`TokenManager`] hands out a bearer token for catalog calls, fetching a new
//! one when none is cached or the cached one is within the refresh margin of
//! its expiry. The cache lock is held across the refresh and the staleness
//! check happens under it, so concurrent callers share a single refresh.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use playlog_core::config::catalog::CatalogConfig;
use playlog_core::traits::Clock;

use crate::error::CatalogError;

/// Anything that can produce a bearer token for catalog requests.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync + 'static {
    async fn access_token(&self) -> Result<String, CatalogError>;
}

/// A token and the epoch second it stops being valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub value: String,
    /// Acquisition time plus the server-reported `expires_in`.
    pub expires_at_epoch_seconds: i64,
}

impl CachedToken {
    /// Stale once `now + margin` reaches the expiry.
    pub fn is_stale(&self, now_epoch_seconds: i64, margin_seconds: i64) -> bool {
        now_epoch_seconds.saturating_add(margin_seconds) >= self.expires_at_epoch_seconds
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
    #[serde(default)]
    token_type: String,
}

/// Caches one client-credentials token and refreshes it before expiry.
pub struct TokenManager {
    http: reqwest::Client,
    token_url: Url,
    client_id: String,
    client_secret: String,
    margin_seconds: i64,
    clock: Arc<dyn Clock>,
    cached: Mutex<Option<CachedToken>>,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("token_url", &self.token_url.as_str())
            .field("client_id", &self.client_id)
            .field("margin_seconds", &self.margin_seconds)
            .finish_non_exhaustive()
    }
}

impl TokenManager {
    /// Build a manager from configuration. Nothing is fetched until the
    /// first [`get_token`](Self::get_token).
    pub fn new(
        config: &CatalogConfig,
        http: reqwest::Client,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CatalogError> {
        let token_url = Url::parse(&config.token_url).map_err(|e| {
            CatalogError::Config(format!("Invalid token URL '{}': {e}", config.token_url))
        })?;

        Ok(Self {
            http,
            token_url,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            margin_seconds: config.refresh_margin_seconds,
            clock,
            cached: Mutex::new(None),
        })
    }

    /// Return a token that is not about to expire, refreshing first if needed.
    pub async fn get_token(&self) -> Result<String, CatalogError> {
        let mut cached = self.cached.lock().await;

        let now = self.clock.now_epoch_seconds();
        if let Some(token) = cached.as_ref() {
            if !token.is_stale(now, self.margin_seconds) {
                return Ok(token.value.clone());
            }
            debug!(
                expires_at = token.expires_at_epoch_seconds,
                now, "Cached catalog token is stale"
            );
        }

        let fresh = self.refresh().await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    /// Snapshot of the cached token, if any.
    pub async fn cached_token(&self) -> Option<CachedToken> {
        self.cached.lock().await.clone()
    }

    async fn refresh(&self) -> Result<CachedToken, CatalogError> {
        let mut url = self.token_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("client_secret", &self.client_secret)
            .append_pair("grant_type", "client_credentials");

        // The URL carries the client secret; keep it out of errors and logs.
        let response = self.http.post(url).send().await.map_err(|e| {
            let e = e.without_url();
            warn!(error = %e, "Catalog token request failed");
            CatalogError::token_refresh(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let reason = format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            );
            warn!(status = status.as_u16(), "Catalog token endpoint rejected the request");
            return Err(CatalogError::token_refresh(reason));
        }

        let body: TokenResponse = response.json().await.map_err(|e| {
            CatalogError::token_refresh(format!("invalid token response: {}", e.without_url()))
        })?;

        if body.expires_in <= 0 {
            warn!(
                expires_in = body.expires_in,
                "Catalog token endpoint returned a non-positive lifetime"
            );
            return Err(CatalogError::token_refresh(format!(
                "invalid expires_in {}",
                body.expires_in
            )));
        }

        let acquired_at = self.clock.now_epoch_seconds();
        let expires_at = acquired_at.checked_add(body.expires_in).ok_or_else(|| {
            warn!(expires_in = body.expires_in, "Catalog token lifetime overflows");
            CatalogError::token_refresh(format!("invalid expires_in {}", body.expires_in))
        })?;
        info!(
            expires_in = body.expires_in,
            token_type = %body.token_type,
            "Obtained catalog access token"
        );

        Ok(CachedToken {
            value: body.access_token,
            expires_at_epoch_seconds: expires_at,
        })
    }
}

#[async_trait]
impl AccessTokenProvider for TokenManager {
    async fn access_token(&self) -> Result<String, CatalogError> {
        self.get_token().await
    }
}
