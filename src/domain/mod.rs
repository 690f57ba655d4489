//! # Domain Layer
//!
//! The repository record and the errors the rest of the service speaks in.
//! This layer is independent of HTTP and storage concerns.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
