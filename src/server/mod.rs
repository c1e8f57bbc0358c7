//! HTTP server for landmark-guide
//!
//! Provides the location, audio, recognition and classification endpoints.

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::error::{Error, Result};
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server
///
/// # Arguments
/// * `config` - Server configuration
///
/// # Returns
/// Never returns unless the server shuts down
pub async fn run(config: Config) -> Result<()> {
    let addr = config.server_addr();
    let state = AppState::new(config)?;
    serve(&addr, state).await
}

/// Start the HTTP server on `addr` with prepared state
///
/// Useful for tests or when the collaborators are not the command-backed ones
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| Error::Server(format!("Invalid server address: {}", e)))?;

    let app = create_router(Arc::new(state));

    info!("Starting server on http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}
