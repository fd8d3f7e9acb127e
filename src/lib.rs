//! Off-plan listings API gateway.
//!
//! Read-only HTTP routes that forward to the internal property backend and
//! the third-party listings API, normalizing failures into one JSON shape.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
