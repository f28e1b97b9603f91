//! In-memory state storage modules.
//!
//! Stores hold data that lives for the whole process:
//! - `DataStore` - The immutable collections loaded at startup

pub mod catalog;

// Re-export store types
pub use catalog::{CatalogSummary, Collections, DataStore};
