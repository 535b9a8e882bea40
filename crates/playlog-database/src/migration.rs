//! Embedded schema migrations.

use sqlx::migrate::Migrator;
use tracing::info;

use playlog_core::error::{AppError, ErrorKind};

use crate::connection::DatabasePool;

/// Migrations from the workspace `migrations/` directory, compiled in.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply every pending migration.
pub async fn run_migrations(db: &DatabasePool) -> Result<(), AppError> {
    info!(
        available = MIGRATOR.migrations.len(),
        "Running database migrations"
    );

    MIGRATOR.run(db.pool()).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database schema is up to date");
    Ok(())
}
