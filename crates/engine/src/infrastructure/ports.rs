//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Static data sources (could swap a JSON directory for an embedded bundle)

use std::path::PathBuf;

use async_trait::async_trait;
use folgen_domain::{CityStory, Episode, EpisodeId, GlossaryEntry, MathFact, Playlist};

// =============================================================================
// Error Types
// =============================================================================

/// Failure to build the data store from its static sources.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error in {collection}: {source}")]
    Json {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Required source not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("Malformed source {collection}: {message}")]
    MalformedSource { collection: String, message: String },
    #[error("Malformed record {index} in {collection}: {message}")]
    MalformedRecord {
        collection: String,
        index: usize,
        message: String,
    },
    #[error("Duplicate episode id: {0}")]
    DuplicateEpisode(EpisodeId),
}

// =============================================================================
// Static Data Sources
// =============================================================================

/// Supplies the raw collections the data store is built from.
///
/// Called once at startup; implementations may block on I/O.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    async fn load_episodes(&self) -> Result<Vec<Episode>, LoadError>;
    async fn load_city_stories(&self) -> Result<Vec<CityStory>, LoadError>;
    async fn load_math_facts(&self) -> Result<Vec<MathFact>, LoadError>;
    async fn load_playlists(&self) -> Result<Vec<Playlist>, LoadError>;
    async fn load_glossary(&self) -> Result<Vec<GlossaryEntry>, LoadError>;
}
