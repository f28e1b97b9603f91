//! Episode entity - The root record every other collection points at

use serde::{Deserialize, Serialize};

use crate::EpisodeId;

/// A single broadcast episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    #[serde(alias = "folge")]
    pub id: EpisodeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

impl Episode {
    pub fn new(id: EpisodeId, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_original_field_name_for_id() {
        let episode: Episode =
            serde_json::from_str(r#"{"folge": "E1", "name": "Folge 1", "code": "F1"}"#).unwrap();
        assert_eq!(episode.id.as_str(), "E1");
        assert_eq!(episode.name, "Folge 1");
        assert_eq!(episode.code, "F1");
    }

    #[test]
    fn missing_text_fields_default_to_empty() {
        let episode: Episode = serde_json::from_str(r#"{"id": "E2"}"#).unwrap();
        assert!(episode.name.is_empty());
        assert!(episode.code.is_empty());
    }

    #[test]
    fn missing_id_is_rejected() {
        let result: Result<Episode, _> = serde_json::from_str(r#"{"name": "Folge 1"}"#);
        assert!(result.is_err());
    }
}
