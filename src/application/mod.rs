//! # Application Layer
//!
//! Use cases coordinating the domain model and the repository store.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
