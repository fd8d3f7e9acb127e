//! Outbound HTTP client.
//!
//! # Responsibilities
//! - Issue the GET request for a target with its headers
//! - Enforce connect timeout and a deadline on the whole exchange
//! - Apply the target's failure policy to the reply
//!
//! # Design Decisions
//! - Bodies are buffered and relayed as raw bytes; JSON is validated, never re-serialized
//! - No retries: a failed call is reported once and retrying is the caller's business
//! - Dropping the returned future aborts the outbound call

use std::time::{Duration, Instant};

use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode};
use serde::de::IgnoredAny;
use url::Url;

use crate::config::{ClientConfig, TimeoutConfig};
use crate::http::request::X_REQUEST_ID;
use crate::upstream::error::ProxyError;
use crate::upstream::target::{FailureMode, UpstreamTarget};

/// A completed upstream exchange.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Shared client for every upstream. Cheap to clone.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    deadline: Duration,
}

impl UpstreamClient {
    /// Create a client honouring the configured timeouts.
    pub fn new(timeouts: &TimeoutConfig, settings: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .user_agent(concat!("offplan-gateway/", env!("CARGO_PKG_VERSION")));
        if !settings.system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            deadline: Duration::from_secs(timeouts.upstream_secs),
        })
    }

    /// Send the request for `target` to `url` and buffer the reply, whatever its status.
    pub async fn fetch(
        &self,
        target: &UpstreamTarget,
        url: Url,
        request_id: Option<&HeaderValue>,
    ) -> Result<UpstreamReply, ProxyError> {
        let mut request = self
            .http
            .get(url)
            .header(header::CONTENT_TYPE, "application/json")
            .headers(target.headers.clone());
        if let Some(id) = request_id {
            request = request.header(X_REQUEST_ID, id.clone());
        }

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(UpstreamReply { status, body })
        };

        match tokio::time::timeout(self.deadline, exchange).await {
            Ok(reply) => Ok(reply?),
            Err(_) => Err(ProxyError::Timeout(self.deadline.as_secs())),
        }
    }

    /// Fetch and apply the target's failure policy.
    ///
    /// Returns the reply to relay as-is: a 2xx JSON body, or for
    /// [`FailureMode::Relay`] targets a JSON body at any status.
    pub async fn forward(
        &self,
        target: &UpstreamTarget,
        inbound_query: Option<&str>,
        request_id: Option<&HeaderValue>,
    ) -> Result<UpstreamReply, ProxyError> {
        let start = Instant::now();
        let request_id_str = request_id
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown");

        let url = match target.upstream_url(inbound_query) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(
                    request_id = %request_id_str,
                    route = target.route,
                    error = %e,
                    "Failed to build upstream URL"
                );
                return Err(e.into());
            }
        };

        tracing::debug!(
            request_id = %request_id_str,
            route = target.route,
            upstream = %url,
            "Forwarding request"
        );

        let reply = match self.fetch(target, url.clone(), request_id).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(
                    request_id = %request_id_str,
                    route = target.route,
                    upstream = %url,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    error = %e,
                    "Upstream request failed"
                );
                return Err(e);
            }
        };

        if !reply.status.is_success() && target.failure_mode == FailureMode::Envelope {
            tracing::warn!(
                request_id = %request_id_str,
                route = target.route,
                upstream = %url,
                status = reply.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Upstream returned an error status"
            );
            return Err(ProxyError::UpstreamStatus {
                upstream: target.upstream,
                status: reply.status,
                status_text: reply.status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        if let Err(e) = serde_json::from_slice::<IgnoredAny>(&reply.body) {
            tracing::error!(
                request_id = %request_id_str,
                route = target.route,
                upstream = %url,
                status = reply.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                error = %e,
                "Upstream body is not JSON"
            );
            return Err(ProxyError::MalformedBody(e.to_string()));
        }

        tracing::info!(
            request_id = %request_id_str,
            route = target.route,
            upstream = %url,
            status = reply.status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Upstream request completed"
        );

        Ok(reply)
    }
}
