//! Route definitions for the Playlog HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! Literal `/games/*` segments are registered next to `/games/{gameId}`;
//! Axum prefers static segments over captures, so `popular` never reaches
//! `get_game`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Maximum accepted request body, in bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the API router with request logging and body limit applied.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(collection_routes())
        .merge(game_routes())
        .merge(review_routes())
        .method_not_allowed_fallback(handlers::health::method_not_allowed);

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::health::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Login, refresh, password change
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh-token", post(handlers::auth::refresh_token))
        .route(
            "/auth/change-password/{id}",
            put(handlers::auth::change_password),
        )
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::register))
        .route(
            "/users/{id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
        .route(
            "/users/email/{email}",
            get(handlers::user::get_user_by_email),
        )
        .route("/users/{id}/reviews", get(handlers::review::for_user))
}

/// A user's game collection
fn collection_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{id}/games",
            get(handlers::collection::list).post(handlers::collection::add),
        )
        .route(
            "/users/{id}/games/{gameId}",
            put(handlers::collection::update_status).delete(handlers::collection::remove),
        )
}

/// Public catalog browsing
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/games/search", get(handlers::game::search))
        .route("/games/popular", get(handlers::game::popular))
        .route("/games/top", get(handlers::game::top_rated))
        .route("/games/upcoming", get(handlers::game::upcoming))
        .route("/games/recent", get(handlers::game::recent))
        .route("/games/filter", get(handlers::game::filter))
        .route("/games/{gameId}", get(handlers::game::get_game))
        .route("/games/{gameId}/reviews", get(handlers::review::for_game))
}

fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", post(handlers::review::create))
        .route(
            "/reviews/{id}",
            get(handlers::review::get)
                .put(handlers::review::update)
                .delete(handlers::review::delete),
        )
}
