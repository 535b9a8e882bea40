//! Authorized HTTP client for the catalog API.

use std::sync::Arc;

use reqwest::Url;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use playlog_core::config::catalog::CatalogConfig;

use crate::error::CatalogError;
use crate::query::CatalogQuery;
use crate::token::AccessTokenProvider;

/// Sends Apicalypse queries to catalog endpoints.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
    client_id: String,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url.as_str())
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    pub fn new(
        config: &CatalogConfig,
        http: reqwest::Client,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, CatalogError> {
        // A trailing slash makes `join` append instead of replacing the last segment.
        let raw = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&raw).map_err(|e| {
            CatalogError::Config(format!("Invalid catalog base URL '{}': {e}", config.base_url))
        })?;

        Ok(Self {
            http,
            base_url,
            client_id: config.client_id.clone(),
            tokens,
        })
    }

    /// POST `query` to `endpoint` (e.g. `"games"`) and decode the JSON answer.
    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &CatalogQuery,
    ) -> Result<T, CatalogError> {
        let token = self.tokens.access_token().await?;
        let url = self
            .base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| CatalogError::Config(format!("Invalid endpoint '{endpoint}': {e}")))?;
        let body = query.build();

        debug!(endpoint, query = %body, "Catalog request");

        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .header("Client-ID", &self.client_id)
            .bearer_auth(token)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint, error = %e, "Catalog unreachable");
                CatalogError::Network(e)
            })?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| CatalogError::Decode(e.to_string()));
        }

        let text = response.text().await.unwrap_or_else(|e| {
            debug!(endpoint, error = %e, "Failed to read catalog error body");
            String::new()
        });
        let err = CatalogError::from_status(status.as_u16(), &text);
        warn!(endpoint, status = status.as_u16(), error = %err, "Catalog request failed");
        Err(err)
    }
}
