//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod catalog;

// Re-export main types
pub use catalog::{CatalogQueries, CatalogUseCases, QueryError};
