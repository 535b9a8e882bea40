//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use playlog_core::error::AppError;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::error::{ApiError, ApiErrorResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> ApiResponse<HealthResponse> {
    let (status, database) = match &state.stores.pool {
        None => ("ok", "memory"),
        Some(_) if state.stores.is_healthy().await => ("ok", "connected"),
        Some(_) => ("degraded", "unavailable"),
    };

    ApiResponse::ok(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    })
}

/// Fallback for unmatched routes, in the standard error envelope.
pub async fn not_found() -> ApiError {
    ApiError(AppError::not_found("Route not found"))
}

/// Fallback for known paths called with an unsupported method.
pub async fn method_not_allowed() -> (StatusCode, Json<ApiErrorResponse>) {
    let status = StatusCode::METHOD_NOT_ALLOWED;
    let body = ApiErrorResponse {
        status: status.as_u16(),
        status_msg: "Method Not Allowed".to_string(),
        error: "METHOD_NOT_ALLOWED".to_string(),
        message: "Method not allowed for this route".to_string(),
    };
    (status, Json(body))
}
