//! JSON directory data source.
//!
//! Reads one JSON file per collection from a data directory and converts the
//! records to domain types. Each file is either a top-level array of records
//! or an object wrapping the array under `data`.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use folgen_domain::{CityStory, Episode, GlossaryEntry, MathFact, Playlist};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::fs;

use super::ports::{CatalogSource, LoadError};

pub const EPISODES_FILE: &str = "episodes.json";
pub const CITY_STORIES_FILE: &str = "city_stories.json";
pub const MATH_FACTS_FILE: &str = "math_facts.json";
pub const PLAYLISTS_FILE: &str = "playlists.json";
pub const GLOSSARY_FILE: &str = "glossary.json";

/// Loads collections from JSON files in a directory.
pub struct JsonDirectorySource {
    data_path: PathBuf,
}

impl JsonDirectorySource {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Read and convert one collection file.
    ///
    /// A missing optional file yields an empty collection; any other I/O
    /// failure is an error.
    async fn read_collection<T: DeserializeOwned>(
        &self,
        filename: &str,
        required: bool,
    ) -> Result<Vec<T>, LoadError> {
        let path = self.data_path.join(filename);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if required {
                    return Err(LoadError::SourceNotFound(path));
                }
                tracing::warn!(path = %path.display(), "Collection file not found, serving empty collection");
                return Ok(Vec::new());
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };

        let records = parse_collection(filename, &content)?;
        tracing::debug!(collection = filename, count = records.len(), "Loaded collection");
        Ok(records)
    }
}

/// Parse a collection document into typed records.
///
/// Every record is converted on its own so that a bad record is reported by
/// index instead of failing somewhere inside the whole document.
pub fn parse_collection<T: DeserializeOwned>(
    collection: &str,
    content: &str,
) -> Result<Vec<T>, LoadError> {
    let document: Value = serde_json::from_str(content).map_err(|source| LoadError::Json {
        collection: collection.to_string(),
        source,
    })?;

    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(LoadError::MalformedSource {
                    collection: collection.to_string(),
                    message: "expected a JSON array or an object with a `data` array".to_string(),
                })
            }
        },
        _ => {
            return Err(LoadError::MalformedSource {
                collection: collection.to_string(),
                message: "expected a JSON array or an object with a `data` array".to_string(),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| LoadError::MalformedRecord {
                collection: collection.to_string(),
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

#[async_trait]
impl CatalogSource for JsonDirectorySource {
    fn describe(&self) -> String {
        format!("json directory {}", self.data_path.display())
    }

    async fn load_episodes(&self) -> Result<Vec<Episode>, LoadError> {
        self.read_collection(EPISODES_FILE, true).await
    }

    async fn load_city_stories(&self) -> Result<Vec<CityStory>, LoadError> {
        self.read_collection(CITY_STORIES_FILE, false).await
    }

    async fn load_math_facts(&self) -> Result<Vec<MathFact>, LoadError> {
        self.read_collection(MATH_FACTS_FILE, false).await
    }

    async fn load_playlists(&self) -> Result<Vec<Playlist>, LoadError> {
        self.read_collection(PLAYLISTS_FILE, false).await
    }

    async fn load_glossary(&self) -> Result<Vec<GlossaryEntry>, LoadError> {
        self.read_collection(GLOSSARY_FILE, false).await
    }
}
