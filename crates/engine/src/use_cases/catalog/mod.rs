//! Catalog use cases - the named queries over the data store.

mod glossary;
mod join;

use std::sync::Arc;

use folgen_domain::{
    CityStory, Episode, EpisodeDetails, GlossaryEntry, MathFact, Playlist, WithEpisode,
};
use folgen_shared::{
    ErrorCode, GlossaryFilter, QueryBatch, QueryDescriptor, QueryRequest, QueryResponse,
    ResponseResult,
};
use serde_json::Value;

use crate::stores::DataStore;

pub use glossary::filter_words;
pub use join::{collect_episode_details, find_episode, resolve_with_episode};

/// Names accepted in the `query` field of a request.
const QUERY_NAMES: [&str; 6] = [
    "episodes",
    "cityStories",
    "mathFacts",
    "playlists",
    "glossary",
    "episodeDetails",
];

/// Errors from turning a wire request into a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Unknown query: {0}")]
    UnknownQuery(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl QueryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            QueryError::UnknownQuery(_) => ErrorCode::UnknownQuery,
            QueryError::InvalidRequest(_) => ErrorCode::BadRequest,
        }
    }
}

/// Container for catalog use cases.
pub struct CatalogUseCases {
    pub queries: Arc<CatalogQueries>,
}

impl CatalogUseCases {
    pub fn new(queries: Arc<CatalogQueries>) -> Self {
        Self { queries }
    }
}

/// Named read-only queries.
///
/// Every query is computed from the data store snapshot on each call; nothing
/// is cached and nothing is mutated.
pub struct CatalogQueries {
    store: Arc<DataStore>,
}

impl CatalogQueries {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    pub fn episodes(&self) -> Vec<Episode> {
        self.store.episodes().to_vec()
    }

    pub fn city_stories(&self) -> Vec<WithEpisode<CityStory>> {
        resolve_with_episode(self.store.city_stories(), self.store.episodes())
    }

    pub fn math_facts(&self) -> Vec<WithEpisode<MathFact>> {
        resolve_with_episode(self.store.math_facts(), self.store.episodes())
    }

    /// Playlists are served as loaded, without an episode join.
    pub fn playlists(&self) -> Vec<Playlist> {
        self.store.playlists().to_vec()
    }

    pub fn glossary(&self, filter: Option<&GlossaryFilter>) -> Vec<GlossaryEntry> {
        filter_words(
            self.store.glossary(),
            filter.and_then(GlossaryFilter::substring),
        )
    }

    /// Episodes with their city-stories and math-facts embedded.
    pub fn episode_details(&self) -> Vec<EpisodeDetails> {
        collect_episode_details(
            self.store.episodes(),
            self.store.city_stories(),
            self.store.math_facts(),
        )
    }

    /// Route a typed request to its query.
    pub fn execute(&self, request: &QueryRequest) -> QueryResponse {
        let response = match request {
            QueryRequest::Episodes => QueryResponse::Episodes(self.episodes()),
            QueryRequest::CityStories => QueryResponse::CityStories(self.city_stories()),
            QueryRequest::MathFacts => QueryResponse::MathFacts(self.math_facts()),
            QueryRequest::Playlists => QueryResponse::Playlists(self.playlists()),
            QueryRequest::Glossary { filter } => {
                QueryResponse::Glossary(self.glossary(filter.as_ref()))
            }
            QueryRequest::EpisodeDetails => QueryResponse::EpisodeDetails(self.episode_details()),
        };

        tracing::debug!(
            query = request.name(),
            count = response.len(),
            "Resolved query"
        );
        response
    }

    /// Parse and run a raw JSON request, answering with a wire result.
    pub fn execute_value(&self, raw: Value) -> ResponseResult {
        match parse_request(raw) {
            Ok(request) => ResponseResult::from_response(&self.execute(&request)),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected query");
                ResponseResult::error(e.code(), e.to_string())
            }
        }
    }

    /// Run every query in the batch independently.
    ///
    /// Results are in request order; a failing entry only fails itself.
    pub fn execute_batch(&self, batch: QueryBatch) -> Vec<ResponseResult> {
        batch
            .queries
            .into_iter()
            .map(|raw| self.execute_value(raw))
            .collect()
    }

    /// The named queries and their arguments.
    pub fn schema() -> Vec<QueryDescriptor> {
        vec![
            QueryDescriptor::new("episodes", "[Episode]"),
            QueryDescriptor::new("cityStories", "[CityStory]"),
            QueryDescriptor::new("mathFacts", "[MathFact]"),
            QueryDescriptor::new("playlists", "[Playlist]"),
            QueryDescriptor::new("glossary", "[GlossaryEntry]")
                .with_optional_argument("filter", "{ containsSubstring: String }"),
            QueryDescriptor::new("episodeDetails", "[EpisodeDetails]"),
        ]
    }
}

/// Turn raw JSON into a typed request.
///
/// Distinguishes an unknown query name from a known query with bad arguments.
pub fn parse_request(raw: Value) -> Result<QueryRequest, QueryError> {
    let name = match raw.get("query") {
        Some(Value::String(name)) => name.clone(),
        Some(_) => {
            return Err(QueryError::InvalidRequest(
                "`query` must be a string".to_string(),
            ))
        }
        None => {
            return Err(QueryError::InvalidRequest(
                "missing `query` field".to_string(),
            ))
        }
    };

    if !QUERY_NAMES.contains(&name.as_str()) {
        return Err(QueryError::UnknownQuery(name));
    }

    serde_json::from_value(raw).map_err(|e| QueryError::InvalidRequest(e.to_string()))
}
