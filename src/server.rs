//! Static Page Server
//!
//! Serves the compiled Leptos page (`azadi-ui/dist`) with Axum.
//!
//! # Routes
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /*` - Files from the dist directory, `index.html` for anything else
//!
//! The page keeps all of its state in the browser; the server only hands out
//! files.

use axum::{http::StatusCode, routing::get, Router};
use std::path::Path;
use thiserror::Error;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    /// The dist directory does not exist or has no index.html
    #[error("Page not built: {0} (run `trunk build --release` in azadi-ui)")]
    MissingDist(String),

    /// IO error (bind, accept)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the router for a dist directory
pub fn build_router(dist_dir: impl AsRef<Path>) -> Router {
    let dist_dir = dist_dir.as_ref();
    let index = ServeFile::new(dist_dir.join("index.html"));

    Router::new()
        .route("/health/live", get(liveness))
        .fallback_service(ServeDir::new(dist_dir).fallback(index))
        .layer(TraceLayer::new_for_http())
}

/// GET /health/live
async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Serve the page until Ctrl+C / SIGTERM
pub async fn serve(config: &ServerConfig) -> Result<(), ServerError> {
    let dist_dir = Path::new(&config.dist_dir);
    if !dist_dir.join("index.html").is_file() {
        return Err(ServerError::MissingDist(config.dist_dir.clone()));
    }

    let router = build_router(dist_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Azadi page served on http://{} from {:?}", addr, dist_dir);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Azadi server shut down gracefully");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix
///
/// A handler that cannot be installed is logged and never fires, so the
/// server keeps running rather than stopping at once.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => tracing::info!("Interrupted, draining connections"),
        _ = terminate => tracing::info!("Terminated, draining connections"),
    }
}
