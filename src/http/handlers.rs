//! Route handlers.
//!
//! One handler per gateway route. Each picks its target from the route
//! table and hands off to the shared forwarding function.

use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::request::request_id;
use crate::http::response::relay;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream::UpstreamTarget;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Forward one request to `target` and shape the outcome.
pub async fn proxy(
    state: &AppState,
    target: &UpstreamTarget,
    query: Option<String>,
    headers: &HeaderMap,
) -> Response {
    let start = Instant::now();

    let response = match state
        .client
        .forward(target, query.as_deref(), request_id(headers))
        .await
    {
        Ok(reply) => relay(reply, target.cache_ttl),
        Err(e) => e.into_response(),
    };

    metrics::record_request(target.route, response.status().as_u16(), start);
    response
}

/// `GET /api/areas`
pub async fn areas(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    proxy(&state, &state.routes.areas, query, &headers).await
}

/// `GET /api/properties/batch-100`
pub async fn batch_100(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    proxy(&state, &state.routes.batch_100, query, &headers).await
}

/// `GET /api/property-monitor/points-of-interest`
pub async fn points_of_interest(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    proxy(&state, &state.routes.points_of_interest, query, &headers).await
}

/// `GET /api/regions`
pub async fn regions(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    proxy(&state, &state.routes.regions, query, &headers).await
}

/// `GET /api/sale-statuses`
pub async fn sale_statuses(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    proxy(&state, &state.routes.sale_statuses, query, &headers).await
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "operational".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
