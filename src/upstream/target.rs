//! Upstream targets and the route table.
//!
//! # Responsibilities
//! - Describe where each gateway route forwards to
//! - Build the outbound URL from the inbound query string
//! - Carry per-route cache hints and extra headers
//!
//! # Design Decisions
//! - Base URL and path are concatenated as strings so a base with a path
//!   prefix keeps it
//! - Targets are built once at startup and shared read-only

use std::time::Duration;

use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;
use url::{form_urlencoded, Url};

use crate::config::GatewayConfig;

pub const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

/// The collaborator a target forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// Internal property backend.
    Backend,
    /// Third-party listings API.
    Listings,
}

impl Upstream {
    /// Value of `error` in the failure envelope.
    pub fn error_label(&self) -> &'static str {
        match self {
            Upstream::Backend => "Backend API error",
            Upstream::Listings => "Reelly API error",
        }
    }

    /// Prefix of `message` in the failure envelope.
    pub fn display_name(&self) -> &'static str {
        match self {
            Upstream::Backend => "Backend",
            Upstream::Listings => "Reelly API",
        }
    }
}

/// How the inbound query string maps onto the upstream URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPolicy {
    /// Upstream URL carries no query string.
    Drop,
    /// Forward only the listed keys, substituting the default when the
    /// inbound value is missing or empty. Emitted in list order.
    Defaults(&'static [(&'static str, &'static str)]),
    /// Forward the raw inbound query string untouched.
    PassThrough,
}

/// What to do with a non-2xx upstream response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Replace the body with an error envelope, keeping the status.
    Envelope,
    /// Relay the upstream JSON body at the upstream status.
    Relay,
}

/// One route's forwarding configuration.
#[derive(Debug, Clone)]
pub struct UpstreamTarget {
    /// Route identifier for logging/metrics.
    pub route: &'static str,
    pub upstream: Upstream,
    pub base_url: String,
    pub path: &'static str,
    pub query: QueryPolicy,
    /// Revalidation window advertised on successful responses.
    pub cache_ttl: Option<Duration>,
    /// Extra headers sent with every outbound request.
    pub headers: HeaderMap,
    pub failure_mode: FailureMode,
}

impl UpstreamTarget {
    /// Build the outbound URL for an inbound raw query string.
    pub fn upstream_url(&self, inbound_query: Option<&str>) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.path
        ))?;

        match &self.query {
            QueryPolicy::Drop => url.set_query(None),
            QueryPolicy::PassThrough => {
                url.set_query(inbound_query.filter(|q| !q.is_empty()));
            }
            QueryPolicy::Defaults(params) => {
                let inbound: Vec<(String, String)> = inbound_query
                    .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
                    .unwrap_or_default();

                url.set_query(None);
                let mut pairs = url.query_pairs_mut();
                for (key, default) in params.iter() {
                    let value = inbound
                        .iter()
                        .find(|(k, _)| k == key)
                        .filter(|(_, v)| !v.is_empty())
                        .map(|(_, v)| v.as_str())
                        .unwrap_or(*default);
                    pairs.append_pair(key, value);
                }
            }
        }

        Ok(url)
    }
}

/// Errors raised while building the route table.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("listings API key is not a valid header value: {0}")]
    InvalidApiKey(#[from] InvalidHeaderValue),
}

const BATCH_PARAMS: &[(&str, &str)] = &[("page", "1"), ("limit", "100")];

/// The five gateway routes, built from configuration.
#[derive(Debug, Clone)]
pub struct RouteTable {
    pub areas: UpstreamTarget,
    pub batch_100: UpstreamTarget,
    pub points_of_interest: UpstreamTarget,
    pub regions: UpstreamTarget,
    pub sale_statuses: UpstreamTarget,
}

impl RouteTable {
    /// Build every target and check that each produces a valid URL.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, TargetError> {
        let backend = |route: &'static str,
                       path: &'static str,
                       query: QueryPolicy,
                       cache_secs: Option<u64>,
                       failure_mode: FailureMode| UpstreamTarget {
            route,
            upstream: Upstream::Backend,
            base_url: config.backend.base_url.clone(),
            path,
            query,
            cache_ttl: cache_secs.map(Duration::from_secs),
            headers: HeaderMap::new(),
            failure_mode,
        };

        let mut listings_headers = HeaderMap::new();
        if let Some(key) = &config.listings.api_key {
            listings_headers.insert(X_API_KEY, HeaderValue::from_str(key)?);
        }

        let table = Self {
            areas: backend(
                "areas",
                "/api/properties/areas",
                QueryPolicy::Drop,
                Some(config.cache.areas_secs),
                FailureMode::Envelope,
            ),
            batch_100: backend(
                "batch-100",
                "/api/properties/batch-100",
                QueryPolicy::Defaults(BATCH_PARAMS),
                None,
                FailureMode::Envelope,
            ),
            points_of_interest: backend(
                "points-of-interest",
                "/api/property-monitor/points-of-interest",
                QueryPolicy::PassThrough,
                None,
                FailureMode::Relay,
            ),
            regions: UpstreamTarget {
                route: "regions",
                upstream: Upstream::Listings,
                base_url: config.listings.base_url.clone(),
                path: "/v1/regions",
                query: QueryPolicy::Drop,
                cache_ttl: Some(Duration::from_secs(config.cache.regions_secs)),
                headers: listings_headers,
                failure_mode: FailureMode::Envelope,
            },
            sale_statuses: backend(
                "sale-statuses",
                "/api/properties/sale-statuses",
                QueryPolicy::Drop,
                Some(config.cache.sale_statuses_secs),
                FailureMode::Envelope,
            ),
        };

        for target in table.all() {
            target.upstream_url(None)?;
        }

        Ok(table)
    }

    pub fn all(&self) -> [&UpstreamTarget; 5] {
        [
            &self.areas,
            &self.batch_100,
            &self.points_of_interest,
            &self.regions,
            &self.sale_statuses,
        ]
    }
}
