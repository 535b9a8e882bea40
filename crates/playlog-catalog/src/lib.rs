//! # playlog-catalog
//!
//! Adapter for the IGDB game database.
//!
//! ## Modules
//!
//! - `token`: OAuth2 client-credentials bearer token cache with
//!   single-flight refresh
//! - `query`: Apicalypse query text builder
//! - `client`: authorized POST client with error mapping
//! - `igdb`: [`GameCatalog`](playlog_domain::ports::GameCatalog)
//!   implementation and IGDB → [`Game`](playlog_domain::Game) mapping

pub mod client;
pub mod error;
pub mod igdb;
pub mod query;
pub mod token;

use std::sync::Arc;
use std::time::Duration;

use playlog_core::config::catalog::CatalogConfig;
use playlog_core::traits::Clock;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use igdb::IgdbCatalog;
pub use query::CatalogQuery;
pub use token::{AccessTokenProvider, CachedToken, TokenManager};

/// Build the shared HTTP client used for token and catalog calls.
pub fn build_http_client(config: &CatalogConfig) -> Result<reqwest::Client, CatalogError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .build()
        .map_err(|e| CatalogError::Config(format!("Failed to build HTTP client: {e}")))
}

/// Wire the token cache, client and adapter together from configuration.
pub fn connect(config: &CatalogConfig, clock: Arc<dyn Clock>) -> Result<IgdbCatalog, CatalogError> {
    let http = build_http_client(config)?;
    let tokens = Arc::new(TokenManager::new(config, http.clone(), Arc::clone(&clock))?);
    let client = CatalogClient::new(config, http, tokens)?;
    Ok(IgdbCatalog::new(client, clock))
}
