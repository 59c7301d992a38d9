//! Axum server setup
//!
//! Backend handles are constructed once in main and injected here;
//! handlers never reach for ambient globals.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::{HospitalDb, LibraryDb};
use crate::outbound::PurchasingClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub library: LibraryDb,
    pub hospital: HospitalDb,
    pub purchasing: PurchasingClient,
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::library::router())
        .merge(routes::health::router())
        .merge(routes::status::router())
        .merge(routes::external::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
pub async fn run_server(state: AppState, bind_addr: SocketAddr) -> std::io::Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Gateway listening on {}", bind_addr);

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
