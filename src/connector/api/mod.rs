pub mod container;
pub mod controller;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod server;

pub use container::Container;
pub use error::ApiError;
pub use router::build_router;
pub use server::{Server, ServerConfig, ServerConfigBuilder};
