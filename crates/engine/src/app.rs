//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{CatalogSource, LoadError};
use crate::stores::DataStore;
use crate::use_cases;

/// Main application state.
///
/// Holds the data store and all use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub store: Arc<DataStore>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub catalog: use_cases::CatalogUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(store: Arc<DataStore>) -> Self {
        let queries = Arc::new(use_cases::CatalogQueries::new(store.clone()));

        Self {
            store,
            use_cases: UseCases {
                catalog: use_cases::CatalogUseCases::new(queries),
            },
        }
    }

    /// Load the data store from `source` and wire up the App.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self, LoadError> {
        let store = Arc::new(DataStore::load(source).await?);
        Ok(Self::new(store))
    }
}
