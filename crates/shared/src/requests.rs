//! Query requests

use serde::{Deserialize, Serialize};

/// A single named query.
///
/// ```json
/// {"query": "cityStories"}
/// {"query": "glossary", "filter": {"containsSubstring": "apf"}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "query", rename_all = "camelCase")]
pub enum QueryRequest {
    Episodes,
    CityStories,
    MathFacts,
    Playlists,
    Glossary {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filter: Option<GlossaryFilter>,
    },
    EpisodeDetails,
}

impl QueryRequest {
    /// The wire name of this query.
    pub fn name(&self) -> &'static str {
        match self {
            QueryRequest::Episodes => "episodes",
            QueryRequest::CityStories => "cityStories",
            QueryRequest::MathFacts => "mathFacts",
            QueryRequest::Playlists => "playlists",
            QueryRequest::Glossary { .. } => "glossary",
            QueryRequest::EpisodeDetails => "episodeDetails",
        }
    }
}

/// Optional narrowing of the glossary by word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_substring: Option<String>,
}

impl GlossaryFilter {
    pub fn contains(substring: impl Into<String>) -> Self {
        Self {
            contains_substring: Some(substring.into()),
        }
    }

    /// The substring to match, if any; an empty string counts as none.
    pub fn substring(&self) -> Option<&str> {
        self.contains_substring
            .as_deref()
            .filter(|s| !s.is_empty())
    }
}

/// Several queries resolved in one round trip.
///
/// Entries stay raw JSON so that one malformed entry only fails itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryBatch {
    pub queries: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_parameterless_query() {
        let request: QueryRequest = serde_json::from_str(r#"{"query": "mathFacts"}"#).unwrap();
        assert_eq!(request, QueryRequest::MathFacts);
        assert_eq!(request.name(), "mathFacts");
    }

    #[test]
    fn parses_glossary_with_filter() {
        let request: QueryRequest = serde_json::from_str(
            r#"{"query": "glossary", "filter": {"containsSubstring": "apf"}}"#,
        )
        .unwrap();

        assert_eq!(
            request,
            QueryRequest::Glossary {
                filter: Some(GlossaryFilter::contains("apf"))
            }
        );
    }

    #[test]
    fn parses_episode_details() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"query": "episodeDetails"}"#).unwrap();
        assert_eq!(request, QueryRequest::EpisodeDetails);
        assert_eq!(request.name(), "episodeDetails");
    }

    #[test]
    fn parses_glossary_without_filter() {
        let request: QueryRequest = serde_json::from_str(r#"{"query": "glossary"}"#).unwrap();
        assert_eq!(request, QueryRequest::Glossary { filter: None });
    }

    #[test]
    fn unknown_query_is_rejected() {
        let result: Result<QueryRequest, _> = serde_json::from_str(r#"{"query": "folgen"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_substring_counts_as_no_filter() {
        assert_eq!(GlossaryFilter::contains("").substring(), None);
        assert_eq!(GlossaryFilter::default().substring(), None);
        assert_eq!(GlossaryFilter::contains("Ap").substring(), Some("Ap"));
    }
}
