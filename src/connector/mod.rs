//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - HTTP transport to the carpool backend (reqwest)
//! - Token storage (JSON file, in-memory)
//! - Command-line front end (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::{Container, ContainerConfig, Router};
