//! Application builder: wires router + middleware + state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;

use playlog_auth::PasswordHasher;
use playlog_core::config::AppConfig;
use playlog_core::config::app::CorsConfig;
use playlog_core::error::AppError;
use playlog_core::traits::SystemClock;
use playlog_database::Stores;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(build_compression_layer())
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Runs the Playlog server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Playlog server...");

    // ── Step 1: Connect storage ──────────────────────────────────
    tracing::info!(
        "Initializing stores (provider: {:?})...",
        config.database.provider
    );
    let stores = Stores::connect(&config.database).await?;

    // ── Step 2: Catalog adapter ──────────────────────────────────
    let catalog = playlog_catalog::connect(&config.catalog, Arc::new(SystemClock))?;

    // ── Step 3: Services and state ───────────────────────────────
    let state = AppState::new(
        config.clone(),
        stores.clone(),
        Arc::new(catalog),
        Arc::new(PasswordHasher::new()),
    );

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app = build_app(state, &config.server.cors);
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Playlog server listening on {}", addr);

    let (signal_tx, mut signal_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = signal_tx.send(true);
    });
    let mut server = tokio::spawn(async move { server.await });

    // In-flight requests get `shutdown_grace_seconds` to finish.
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let deadline = async move {
        if signal_rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    let result = tokio::select! {
        joined = &mut server => match joined {
            Ok(served) => served.map_err(|e| AppError::internal(format!("Server error: {e}"))),
            Err(e) => Err(AppError::internal(format!("Server task failed: {e}"))),
        },
        _ = deadline => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Grace period elapsed, dropping remaining connections"
            );
            server.abort();
            Ok(())
        }
    };

    // ── Step 5: Release resources ────────────────────────────────
    stores.close().await;
    tracing::info!("Playlog server stopped");

    result
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
