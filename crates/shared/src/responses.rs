//! Query responses
//!
//! Every query answers with a [`ResponseResult`]; batches answer with one
//! result per entry, in request order.

use folgen_domain::{
    CityStory, Episode, EpisodeDetails, GlossaryEntry, MathFact, Playlist, WithEpisode,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// Query Payloads
// =============================================================================

/// The records produced by one named query.
///
/// Serializes as the bare list of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Episodes(Vec<Episode>),
    CityStories(Vec<WithEpisode<CityStory>>),
    MathFacts(Vec<WithEpisode<MathFact>>),
    Playlists(Vec<Playlist>),
    Glossary(Vec<GlossaryEntry>),
    EpisodeDetails(Vec<EpisodeDetails>),
}

impl QueryResponse {
    /// The wire name of the query that produced this payload.
    pub fn query_name(&self) -> &'static str {
        match self {
            QueryResponse::Episodes(_) => "episodes",
            QueryResponse::CityStories(_) => "cityStories",
            QueryResponse::MathFacts(_) => "mathFacts",
            QueryResponse::Playlists(_) => "playlists",
            QueryResponse::Glossary(_) => "glossary",
            QueryResponse::EpisodeDetails(_) => "episodeDetails",
        }
    }

    /// Number of records in the payload.
    pub fn len(&self) -> usize {
        match self {
            QueryResponse::Episodes(records) => records.len(),
            QueryResponse::CityStories(records) => records.len(),
            QueryResponse::MathFacts(records) => records.len(),
            QueryResponse::Playlists(records) => records.len(),
            QueryResponse::Glossary(records) => records.len(),
            QueryResponse::EpisodeDetails(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Response Result
// =============================================================================

/// Result of a query operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseResult {
    /// Query succeeded
    Success {
        /// The records, as a JSON array
        data: serde_json::Value,
    },
    /// Query failed
    Error {
        /// Error classification code
        code: ErrorCode,
        /// Human-readable error message
        message: String,
    },
    /// Unknown response type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl ResponseResult {
    /// Create a success response from a query payload.
    ///
    /// Falls back to an `InternalError` result if the payload cannot be
    /// serialized.
    pub fn from_response(response: &QueryResponse) -> Self {
        match serde_json::to_value(response) {
            Ok(data) => ResponseResult::Success { data },
            Err(e) => ResponseResult::error(
                ErrorCode::InternalError,
                format!("Failed to serialize {}: {}", response.query_name(), e),
            ),
        }
    }

    /// Create an error response
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ResponseResult::Error {
            code,
            message: message.into(),
        }
    }

    /// Check if this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseResult::Success { .. })
    }

    /// Check if this is an error response
    pub fn is_error(&self) -> bool {
        matches!(self, ResponseResult::Error { .. })
    }
}

/// Answer to a [`QueryBatch`](crate::QueryBatch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<ResponseResult>,
}

// =============================================================================
// Error Codes
// =============================================================================

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // === Client Errors (4xx) ===
    /// Request was malformed or invalid
    BadRequest,
    /// Named query does not exist
    UnknownQuery,

    // === Server Errors (5xx) ===
    /// Internal server error
    InternalError,

    /// Unknown error code for forward compatibility
    #[serde(other)]
    Unknown,
}
