//! # Hello App - Minimal JSON Web Service
//!
//! ## Modules
//!
//! - [`config`] - Environment-driven server settings
//! - [`error`] - Startup and configuration errors
//! - [`handlers`] - HTTP request handlers for the health and greeting endpoints
//! - [`models`] - JSON response payloads
//! - [`telemetry`] - Tracing subscriber setup
//! - [`utils`] - Constants shared across the crate

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod telemetry;
pub mod utils;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::handlers::{health_check, index};

/// Creates an Axum router with the application routes.
///
/// The router owns no state; every call returns an independent instance that
/// can be handed to [`axum::serve`] or driven directly as a tower service.
///
/// # Routes
///
/// - `GET /health` - health check, `{"status": "ok"}`
/// - `GET /` - greeting, `{"message": "Hello from Python App!"}`
///
/// Unknown paths and disallowed methods fall through to axum's default
/// `404 Not Found` and `405 Method Not Allowed` responses.
pub fn app() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
}

/// Serves [`app`] on an already bound listener until a shutdown signal arrives.
///
/// Binding is left to the caller so tests can pick a random port.
pub async fn serve(listener: TcpListener) -> AppResult<()> {
    serve_with_shutdown(listener, shutdown_signal()).await
}

/// Serves [`app`] on `listener` until `signal` resolves, then drains
/// in-flight connections and returns.
pub async fn serve_with_shutdown<F>(listener: TcpListener, signal: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app().into_make_service())
        .with_graceful_shutdown(signal)
        .await
        .map_err(AppError::Serve)?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Waits for SIGINT, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(?e, "Failed to listen for SIGINT");
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
                tracing::error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, starting graceful shutdown"),
        () = terminate => info!("Received SIGTERM, starting graceful shutdown"),
    }
}
