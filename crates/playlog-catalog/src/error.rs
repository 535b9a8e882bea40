//! Catalog adapter errors.

use thiserror::Error;

use playlog_core::error::{AppError, ErrorKind};

/// Everything that can go wrong talking to the catalog or its token endpoint.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The client-credentials exchange failed. Never retried.
    #[error("Token refresh failed: {reason}")]
    TokenRefresh { reason: String },

    #[error("Unauthorized: Invalid client ID or access token")]
    Unauthorized,

    #[error("Rate limit exceeded. Please try again later")]
    RateLimited,

    #[error("Catalog API internal server error")]
    Internal,

    /// Any other non-2xx answer.
    #[error("Catalog API error: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: Unable to reach catalog API")]
    Network(#[source] reqwest::Error),

    #[error("Invalid catalog response: {0}")]
    Decode(String),

    #[error("Invalid catalog configuration: {0}")]
    Config(String),
}

impl CatalogError {
    pub(crate) fn token_refresh(reason: impl Into<String>) -> Self {
        Self::TokenRefresh {
            reason: reason.into(),
        }
    }

    /// Map a non-2xx status and its body.
    ///
    /// The message for unlisted statuses comes from the body's `message` or
    /// `error` field, falling back to the raw body, then the status code.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            429 => Self::RateLimited,
            500 => Self::Internal,
            _ => {
                let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
                let field = |name: &str| {
                    parsed
                        .as_ref()
                        .and_then(|v| v.get(name))
                        .and_then(|v| v.as_str())
                        .map(str::to_string)
                };
                let message = field("message")
                    .or_else(|| field("error"))
                    .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
                    .unwrap_or_else(|| format!("HTTP {status}"));
                Self::Api { status, message }
            }
        }
    }

    /// HTTP status reported by the catalog, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RateLimited => Some(429),
            Self::Internal => Some(500),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let kind = match &err {
            CatalogError::RateLimited => ErrorKind::RateLimited,
            CatalogError::Config(_) => ErrorKind::Configuration,
            _ => ErrorKind::ExternalService,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}
