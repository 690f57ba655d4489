//! # Connector Layer
//!
//! Integrations implementing application interfaces:
//! - Storage (in-memory repository store)
//! - HTTP API (axum router, middleware, controllers, server)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::{build_router, ApiError, Container, Server, ServerConfig};
