//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the route table and upstream client from validated config
//! - Bind the listener last, once everything else is ready

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use crate::http::GatewayServer;
use crate::upstream::TargetError;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Route table error: {0}")]
    Route(#[from] TargetError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
}

/// Build the server and bind its listener.
pub async fn bind(config: GatewayConfig) -> Result<(GatewayServer, TcpListener), StartupError> {
    let address = config.listener.bind_address.clone();
    let server = GatewayServer::new(config)?;

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listening for connections");
    }

    Ok((server, listener))
}
