//! Upstream subsystem.
//!
//! # Data Flow
//! ```text
//! GatewayConfig
//!     → target.rs (RouteTable: one UpstreamTarget per route)
//!
//! Per request:
//!     inbound query + UpstreamTarget
//!     → target.rs (build upstream URL)
//!     → client.rs (GET with headers, deadline)
//!     → client.rs (failure policy: envelope or relay)
//!     → error.rs (ProxyError on any failure)
//! ```
//!
//! # Design Decisions
//! - Stateless: nothing survives a request except the shared client
//! - Every route is the same forwarding function with different data

pub mod client;
pub mod error;
pub mod target;

pub use client::{UpstreamClient, UpstreamReply};
pub use error::ProxyError;
pub use target::{FailureMode, QueryPolicy, RouteTable, TargetError, Upstream, UpstreamTarget};
