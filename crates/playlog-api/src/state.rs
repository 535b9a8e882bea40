//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use playlog_auth::{JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator};
use playlog_core::config::AppConfig;
use playlog_database::Stores;
use playlog_domain::ports::GameCatalog;
use playlog_service::{AuthService, CollectionService, GameService, ReviewService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Persistence backends (PostgreSQL or in-memory)
    pub stores: Stores,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub game_service: Arc<GameService>,
    pub collection_service: Arc<CollectionService>,
    pub review_service: Arc<ReviewService>,
}

impl AppState {
    /// Wire services from configuration, stores and a catalog.
    ///
    /// The password hasher is passed in so tests can use cheap parameters.
    pub fn new(
        config: AppConfig,
        stores: Stores,
        catalog: Arc<dyn GameCatalog>,
        password_hasher: Arc<PasswordHasher>,
    ) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.users),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            jwt_encoder,
            Arc::clone(&jwt_decoder),
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&stores.users),
            Arc::clone(&password_hasher),
            password_validator,
        ));
        let game_service = Arc::new(GameService::new(Arc::clone(&catalog)));
        let collection_service = Arc::new(CollectionService::new(
            Arc::clone(&stores.collection),
            Arc::clone(&catalog),
        ));
        let review_service = Arc::new(ReviewService::new(
            Arc::clone(&stores.reviews),
            Arc::clone(&stores.users),
            catalog,
        ));

        Self {
            config: Arc::new(config),
            stores,
            jwt_decoder,
            auth_service,
            user_service,
            game_service,
            collection_service,
            review_service,
        }
    }
}
