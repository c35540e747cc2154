//! # Domain Layer
//!
//! Records exchanged with the carpool backend and the client error type.
//! This layer is independent of transport and storage.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
