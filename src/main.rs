//! Off-plan API gateway (v1)
//!
//! Stateless proxy in front of the property backend and the listings API.
//!
//! # Architecture Overview
//!
//! ```text
//!                          ┌───────────────────────────────────────────────┐
//!                          │                  GATEWAY                      │
//!   Browser request        │  ┌────────┐    ┌──────────┐    ┌───────────┐  │
//!   ───────────────────────┼─▶│  http  │───▶│ handlers │───▶│ upstream  │──┼──▶ Backend
//!                          │  │ server │    │ (route)  │    │  client   │  │    (BACKEND_URL)
//!                          │  └────────┘    └──────────┘    └─────┬─────┘  │
//!                          │                                      │        │──▶ Listings API
//!   Browser response       │  ┌──────────┐                        │        │    (X-API-Key)
//!   ◀──────────────────────┼──│ response │◀───────────────────────┘        │
//!                          │  │ relay or │                                 │
//!                          │  │ envelope │                                 │
//!                          │  └──────────┘                                 │
//!                          │                                               │
//!                          │  config · lifecycle · observability           │
//!                          └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use offplan_gateway::config::{load_config, validation::validate_config, ConfigError};
use offplan_gateway::lifecycle::{signals, startup};
use offplan_gateway::observability::{logging, metrics};
use offplan_gateway::Shutdown;

#[derive(Parser)]
#[command(name = "offplan-gateway")]
#[command(about = "API gateway for the off-plan listings front-end", long_about = None)]
struct Args {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init(&config.observability);
    tracing::info!("offplan-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend_url = %config.backend.base_url,
        listings_url = %config.listings.base_url,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let (server, listener) = startup::bind(config).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_termination().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
