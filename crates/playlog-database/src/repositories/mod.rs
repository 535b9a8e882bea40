//! PostgreSQL implementations of the storage ports.

pub mod collection;
pub mod review;
pub mod user;

pub use collection::CollectionRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;

use playlog_core::error::{AppError, ErrorKind};

/// Map a write failure, turning unique violations into conflicts.
///
/// `conflict` receives the violated constraint name, if Postgres reported one.
pub(crate) fn map_write_error(
    err: sqlx::Error,
    context: &str,
    conflict: impl FnOnce(Option<&str>) -> String,
) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::conflict(conflict(db_err.constraint()))
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AppError::not_found(format!("{context}: referenced row does not exist"))
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), err),
    }
}

/// Map a read failure.
pub(crate) fn map_read_error(err: sqlx::Error, context: &str) -> AppError {
    AppError::with_source(ErrorKind::Database, context.to_string(), err)
}
