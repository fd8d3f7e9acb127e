//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Internal backend the property routes forward to.
    pub backend: BackendConfig,

    /// Third-party listings API (regions).
    pub listings: ListingsConfig,

    /// Cache hints attached to successful responses.
    pub cache: CacheConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Outbound HTTP client settings.
    pub client: ClientConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Internal backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base address, e.g. "http://localhost:5000". Route paths are appended verbatim.
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
        }
    }
}

/// Third-party listings API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListingsConfig {
    /// Base address of the listings search service.
    pub base_url: String,

    /// Value sent as `X-API-Key`. Supplied through the config file or
    /// `REELLY_API_KEY`; the header is omitted when unset.
    pub api_key: Option<String>,
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://search-listings-production.up.railway.app".to_string(),
            api_key: None,
        }
    }
}

/// Revalidation windows, in seconds, per cached route.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    pub areas_secs: u64,
    pub sale_statuses_secs: u64,
    pub regions_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            areas_secs: 30 * 60,
            sale_statuses_secs: 60 * 60,
            regions_secs: 60 * 60,
        }
    }
}

/// Timeout configuration for outbound calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Deadline for the whole upstream exchange (send + body) in seconds.
    pub upstream_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            upstream_secs: 30,
        }
    }
}

/// Outbound HTTP client settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` for upstream calls.
    pub system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { system_proxy: true }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
