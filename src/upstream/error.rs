//! Failure taxonomy for a single forwarded request.

use axum::http::StatusCode;
use thiserror::Error;

use crate::upstream::target::Upstream;

/// Errors that can occur while forwarding one request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The outbound call could not complete (connect, DNS, reset).
    #[error("{0}")]
    Transport(String),

    /// The upstream did not answer within the configured deadline.
    #[error("upstream did not respond within {0} seconds")]
    Timeout(u64),

    /// The upstream answered but the body is not JSON.
    #[error("{0}")]
    MalformedBody(String),

    /// The outbound URL could not be built.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The upstream answered with a non-2xx status.
    #[error("{} returned {}: {}", .upstream.display_name(), .status.as_u16(), .status_text)]
    UpstreamStatus {
        upstream: Upstream,
        status: StatusCode,
        status_text: String,
    },
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        ProxyError::Transport(e.to_string())
    }
}

impl ProxyError {
    /// Status code the gateway answers with.
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::UpstreamStatus { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of `error` in the failure envelope.
    pub fn label(&self) -> &'static str {
        match self {
            ProxyError::UpstreamStatus { upstream, .. } => upstream.error_label(),
            _ => "Internal server error",
        }
    }
}
