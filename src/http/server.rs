//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all gateway routes
//! - Wire up middleware (tracing, request ID, timeout)
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::handlers;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::lifecycle::shutdown::ShutdownSignal;
use crate::lifecycle::startup::StartupError;
use crate::upstream::{RouteTable, UpstreamClient};

/// Extra time the router allows past the upstream deadline, so the
/// gateway's own timeout envelope is produced before the layer fires.
const ROUTER_TIMEOUT_GRACE: Duration = Duration::from_secs(5);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub client: UpstreamClient,
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, StartupError> {
        let routes = Arc::new(RouteTable::from_config(&config)?);
        let client = UpstreamClient::new(&config.timeouts, &config.client)?;

        if config.listings.api_key.is_none() {
            tracing::warn!("REELLY_API_KEY is not set; /api/regions will be sent without X-API-Key");
        }

        for target in routes.all() {
            tracing::debug!(
                route = target.route,
                upstream = %target.upstream_url(None).map(|u| u.to_string()).unwrap_or_default(),
                cache_ttl_secs = target.cache_ttl.map(|t| t.as_secs()),
                "Route registered"
            );
        }

        let state = AppState { routes, client };
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let request_timeout =
            Duration::from_secs(config.timeouts.upstream_secs) + ROUTER_TIMEOUT_GRACE;

        Router::new()
            .route("/api/areas", get(handlers::areas))
            .route("/api/properties/batch-100", get(handlers::batch_100))
            .route(
                "/api/property-monitor/points-of-interest",
                get(handlers::points_of_interest),
            )
            .route("/api/regions", get(handlers::regions))
            .route("/api/sale-statuses", get(handlers::sale_statuses))
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownSignal) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
