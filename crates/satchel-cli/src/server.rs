//! Static file server for pre-built bundles.
//!
//! `/` answers with the index file; every other path is looked up inside the
//! served directory. Nothing is rebuilt on request.

use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServeConfig;
use crate::error::{CliError, Result, ResultExt};

/// Build the router serving `config.dir`.
pub fn router(config: &ServeConfig) -> Router {
    let dir = config.dir.as_path();

    Router::new()
        .route_service("/", ServeFile::new(dir.join(&config.index)))
        .fallback_service(ServeDir::new(dir).append_index_html_on_directories(false))
        .layer(TraceLayer::new_for_http())
}

/// Bind to `host:port` and serve until Ctrl-C.
///
/// # Errors
///
/// Fails when the directory does not exist, the address cannot be bound, or
/// the server stops with an I/O error.
pub async fn serve(config: &ServeConfig) -> Result<()> {
    ensure_dir(&config.dir)
        .with_hint("Run `satchel build` first or pass the directory to serve")?;

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| CliError::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Serving {} on {}", config.dir.display(), addr);
    crate::ui::success(&format!(
        "Serving {} at {}",
        config.dir.display(),
        config.display_url()
    ));
    crate::ui::info("Press Ctrl-C to stop");

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CliError::Server(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(dir.to_path_buf()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
