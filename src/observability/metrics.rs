//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_upstream_requests_total` (counter): forwarded requests by route, status
//! - `gateway_upstream_duration_seconds` (histogram): time spent per route
//!
//! # Design Decisions
//! - Recording without an installed exporter is a no-op
//! - The exporter listens on its own address, apart from the gateway routes

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one forwarded request and its latency.
pub fn record_request(route: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "gateway_upstream_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("gateway_upstream_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}
