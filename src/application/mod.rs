//! # Application Layer
//!
//! Ports, the authenticated request wrapper, and the typed endpoint use
//! cases built on top of it.

pub mod client;
pub mod interfaces;
pub mod use_cases;

pub use client::*;
pub use interfaces::*;
pub use use_cases::*;
