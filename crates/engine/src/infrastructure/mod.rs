//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies and the
//! environment-driven configuration.

pub mod config;
pub mod json_source;
pub mod ports;
