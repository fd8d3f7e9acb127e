//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound GET
//!     → server.rs (Axum router, request ID, tracing, timeout layers)
//!     → handlers.rs (pick the route's UpstreamTarget)
//!     → upstream client (forward + failure policy)
//!     → response.rs (relay body or error envelope, cache hints)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::ErrorEnvelope;
pub use server::{AppState, GatewayServer};
