//! Response shaping.
//!
//! # Responsibilities
//! - Relay upstream JSON bodies with the upstream status
//! - Attach cache hints to successful cacheable responses
//! - Map forwarding errors to the `{ success, error, message }` envelope
//!
//! # Design Decisions
//! - Upstream bodies are relayed byte-for-byte
//! - Cache hints are advisory headers for the serving layer; nothing is cached here
//! - Error envelopes are never cacheable

use std::time::Duration;

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::upstream::{ProxyError, UpstreamReply};

/// Failure body synthesized by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl From<&ProxyError> for ErrorEnvelope {
    fn from(err: &ProxyError) -> Self {
        let message = err.to_string();
        Self {
            success: false,
            error: err.label().to_string(),
            message: if message.is_empty() {
                "Unknown error".to_string()
            } else {
                message
            },
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let mut response = (self.status(), Json(ErrorEnvelope::from(&self))).into_response();
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        response
    }
}

/// Build the `Cache-Control` value for a revalidation window.
pub fn cache_control(ttl: Duration) -> HeaderValue {
    let value = format!("public, s-maxage={}, stale-while-revalidate", ttl.as_secs());
    HeaderValue::from_str(&value).unwrap_or(HeaderValue::from_static("no-cache"))
}

/// Relay an upstream reply, attaching a cache hint to 2xx replies.
pub fn relay(reply: UpstreamReply, cache_ttl: Option<Duration>) -> Response {
    let mut response = (
        reply.status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        reply.body,
    )
        .into_response();

    if let Some(ttl) = cache_ttl.filter(|_| reply.status.is_success()) {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, cache_control(ttl));
    }

    response
}
