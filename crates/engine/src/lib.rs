//! Folgen Engine library.
//!
//! This crate contains all server-side code for the Folgen query service.
//!
//! ## Structure
//!
//! - `stores/` - The immutable data store loaded at startup
//! - `use_cases/` - Named queries: episode joins and the glossary filter
//! - `infrastructure/` - Configuration and static data sources (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Test fixtures module shared by unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
