//! Immutable data store for the static collections.
//!
//! Built once at startup from a [`CatalogSource`] and shared read-only
//! (behind an `Arc`) with every request.

use std::collections::HashSet;

use folgen_domain::{
    CityStory, Episode, EpisodeChild, EpisodeId, GlossaryEntry, MathFact, Playlist,
};
use serde::Serialize;

use crate::infrastructure::ports::{CatalogSource, LoadError};

/// The raw collections, as produced by a source.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub episodes: Vec<Episode>,
    pub city_stories: Vec<CityStory>,
    pub math_facts: Vec<MathFact>,
    pub playlists: Vec<Playlist>,
    pub glossary: Vec<GlossaryEntry>,
}

/// Record counts per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub episodes: usize,
    pub city_stories: usize,
    pub math_facts: usize,
    pub playlists: usize,
    pub glossary: usize,
    /// Child records whose episode reference is absent or resolves to nothing
    pub dangling_references: usize,
}

/// Read-only snapshot of every collection.
#[derive(Debug, Clone)]
pub struct DataStore {
    collections: Collections,
}

impl DataStore {
    /// Create a store from already-loaded collections.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::DuplicateEpisode` if two episodes share an id.
    pub fn new(collections: Collections) -> Result<Self, LoadError> {
        let mut seen = HashSet::new();
        for episode in &collections.episodes {
            if !seen.insert(&episode.id) {
                return Err(LoadError::DuplicateEpisode(episode.id.clone()));
            }
        }
        Ok(Self { collections })
    }

    /// Load every collection from `source` and build the store.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self, LoadError> {
        tracing::info!(source = %source.describe(), "Loading data store");

        let collections = Collections {
            episodes: source.load_episodes().await?,
            city_stories: source.load_city_stories().await?,
            math_facts: source.load_math_facts().await?,
            playlists: source.load_playlists().await?,
            glossary: source.load_glossary().await?,
        };

        let store = Self::new(collections)?;
        let summary = store.summary();
        tracing::info!(
            episodes = summary.episodes,
            city_stories = summary.city_stories,
            math_facts = summary.math_facts,
            playlists = summary.playlists,
            glossary = summary.glossary,
            "Data store loaded"
        );
        if summary.dangling_references > 0 {
            tracing::warn!(
                count = summary.dangling_references,
                "Some records reference no known episode; their joined episode will be null"
            );
        }

        Ok(store)
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.collections.episodes
    }

    pub fn city_stories(&self) -> &[CityStory] {
        &self.collections.city_stories
    }

    pub fn math_facts(&self) -> &[MathFact] {
        &self.collections.math_facts
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.collections.playlists
    }

    pub fn glossary(&self) -> &[GlossaryEntry] {
        &self.collections.glossary
    }

    pub fn summary(&self) -> CatalogSummary {
        let known: HashSet<&EpisodeId> = self.episodes().iter().map(|e| &e.id).collect();

        CatalogSummary {
            episodes: self.episodes().len(),
            city_stories: self.city_stories().len(),
            math_facts: self.math_facts().len(),
            playlists: self.playlists().len(),
            glossary: self.glossary().len(),
            dangling_references: count_dangling(self.city_stories(), &known)
                + count_dangling(self.math_facts(), &known)
                + count_dangling(self.playlists(), &known),
        }
    }
}

fn count_dangling<T: EpisodeChild>(records: &[T], known: &HashSet<&EpisodeId>) -> usize {
    records
        .iter()
        .filter(|record| {
            record
                .episode_id()
                .map_or(true, |id| !known.contains(id))
        })
        .count()
}
