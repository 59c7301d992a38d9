//! Axum server setup
//!
//! Server skeleton with permissive CORS, tracing middleware, and
//! graceful shutdown on SIGTERM/Ctrl+C.

use std::net::SocketAddr;

use axum::Router;
use sqlx::MySqlPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::lists::router())
        .merge(routes::items::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
pub async fn run_server(pool: MySqlPool, bind_addr: SocketAddr) -> std::io::Result<()> {
    let app = build_router(AppState { pool });

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("List store listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
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
