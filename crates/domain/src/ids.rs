use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// Identifier of an [`Episode`](crate::Episode).
///
/// Source identifiers are free-form (`"E1"`, `"folge-12"`, or a bare number),
/// so the id wraps the source text rather than a UUID. The text is kept as
/// given and compared exactly. Numeric source values are accepted and kept in
/// their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawEpisodeId", into = "String")]
pub struct EpisodeId(String);

impl EpisodeId {
    /// Create a new episode id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` if the id is empty or only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("Episode id cannot be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EpisodeId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<EpisodeId> for String {
    fn from(id: EpisodeId) -> String {
        id.0
    }
}

/// Wire form of an episode id before validation.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEpisodeId {
    Text(String),
    Number(i64),
}

impl TryFrom<RawEpisodeId> for EpisodeId {
    type Error = DomainError;

    fn try_from(raw: RawEpisodeId) -> Result<Self, Self::Error> {
        match raw {
            RawEpisodeId::Text(text) => Self::new(text),
            RawEpisodeId::Number(n) => Self::new(n.to_string()),
        }
    }
}

/// Deserialize the episode reference carried by a child record.
///
/// Never fails: a reference that cannot name an episode (blank text, `null`,
/// a list or an object) becomes `None` and later joins to no episode. Numbers
/// keep their decimal form and simply match nothing unless an episode uses
/// the same text.
pub fn deserialize_reference<'de, D>(deserializer: D) -> Result<Option<EpisodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawReference>::deserialize(deserializer)?;
    Ok(raw.and_then(RawReference::into_id))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReference {
    Text(String),
    Integer(i64),
    Float(f64),
    Other(IgnoredAny),
}

impl RawReference {
    fn into_id(self) -> Option<EpisodeId> {
        match self {
            RawReference::Text(text) => EpisodeId::new(text).ok(),
            RawReference::Integer(n) => EpisodeId::new(n.to_string()).ok(),
            RawReference::Float(n) => EpisodeId::new(n.to_string()).ok(),
            RawReference::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_text_is_kept_verbatim() {
        let id = EpisodeId::new("E1 ").unwrap();
        assert_eq!(id.as_str(), "E1 ");
        assert_ne!(id, EpisodeId::new("E1").unwrap());
    }

    #[test]
    fn empty_id_rejected() {
        let err = EpisodeId::new("   ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn deserializes_from_string_or_number() {
        let text: EpisodeId = serde_json::from_str("\"E1\"").unwrap();
        let number: EpisodeId = serde_json::from_str("12").unwrap();
        assert_eq!(text.as_str(), "E1");
        assert_eq!(number.as_str(), "12");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EpisodeId::new("E1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"E1\"");
    }

    #[test]
    fn empty_string_fails_deserialization() {
        let result: Result<EpisodeId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[derive(Deserialize)]
    struct Child {
        #[serde(default, deserialize_with = "deserialize_reference")]
        episode_id: Option<EpisodeId>,
    }

    fn reference(json: &str) -> Option<EpisodeId> {
        serde_json::from_str::<Child>(json).unwrap().episode_id
    }

    #[test]
    fn reference_accepts_text_and_numbers() {
        assert_eq!(reference(r#"{"episode_id": "E1"}"#), Some(EpisodeId::new("E1").unwrap()));
        assert_eq!(reference(r#"{"episode_id": 7}"#), Some(EpisodeId::new("7").unwrap()));
        assert_eq!(reference(r#"{"episode_id": 1.5}"#), Some(EpisodeId::new("1.5").unwrap()));
    }

    #[test]
    fn unusable_reference_becomes_none() {
        assert_eq!(reference(r#"{"episode_id": ""}"#), None);
        assert_eq!(reference(r#"{"episode_id": "  "}"#), None);
        assert_eq!(reference(r#"{"episode_id": null}"#), None);
        assert_eq!(reference(r#"{"episode_id": ["E1"]}"#), None);
        assert_eq!(reference(r#"{"episode_id": {"id": "E1"}}"#), None);
        assert_eq!(reference(r#"{"episode_id": true}"#), None);
        assert_eq!(reference("{}"), None);
    }
}
