//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (BACKEND_URL, REELLY_API_URL, REELLY_API_KEY, BIND_ADDRESS)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → upstream targets built once at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Secrets come from the environment or the config file, never from source

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::GatewayConfig;
pub use schema::{
    BackendConfig, CacheConfig, ClientConfig, ListenerConfig, ListingsConfig, ObservabilityConfig,
    TimeoutConfig,
};
