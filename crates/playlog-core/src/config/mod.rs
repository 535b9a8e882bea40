//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files overlaid with `PLAYLOG__`-prefixed environment
//! variables. Each sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod database;
pub mod logging;

use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::auth::AuthConfig;
use self::catalog::CatalogConfig;
use self::database::DatabaseConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable prefix, e.g. `PLAYLOG__CATALOG__CLIENT_ID`.
pub const ENV_PREFIX: &str = "PLAYLOG";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Persistence settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Token signing settings.
    pub auth: AuthConfig,
    /// Game catalog (IGDB) settings.
    pub catalog: CatalogConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml` and environment
    /// variables. A missing secret is a fatal configuration error.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Build and validate a configuration from an already assembled builder.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        parsed.validate()?;
        Ok(parsed)
    }

    /// Reject configurations that deserialize but cannot work.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("auth.access_secret", &self.auth.access_secret),
            ("auth.refresh_secret", &self.auth.refresh_secret),
            ("catalog.client_id", &self.catalog.client_id),
            ("catalog.client_secret", &self.catalog.client_secret),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::configuration(format!(
                    "Missing required configuration value: {key}"
                )));
            }
        }

        if self.database.provider == database::DatabaseProvider::Postgres
            && self.database.url.trim().is_empty()
        {
            return Err(AppError::configuration(
                "database.url is required when database.provider = \"postgres\"",
            ));
        }

        Ok(())
    }
}
