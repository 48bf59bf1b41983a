//! pinboard-server: HTTP server for the pinboard message board
//!
//! Three routes: the board page, the submission endpoint, and a liveness
//! probe. Storage is a single MySQL table reached through a shared
//! connection pool.

pub mod db;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use pinboard_core::AppConfig;

pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let pool = db::create_pool(&config.db.url()).context("invalid database URL")?;

    // The pool is lazy, so a database that is still starting only defers
    // the migration; the board errors until the table exists.
    if let Err(e) = db::migrations::run(&pool).await {
        tracing::warn!("startup migration deferred: {}", e);
    }

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
