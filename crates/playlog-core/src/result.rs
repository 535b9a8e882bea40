//! Convenience result alias.

use crate::error::AppError;

/// Result type used by every fallible operation above the adapter layer.
pub type AppResult<T> = Result<T, AppError>;
