//! Math-fact entity

use serde::{Deserialize, Serialize};

use crate::EpisodeId;

/// A short mathematical segment aired within one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MathFact {
    #[serde(
        default,
        alias = "folge",
        deserialize_with = "crate::ids::deserialize_reference"
    )]
    pub episode_id: Option<EpisodeId>,
    #[serde(default, alias = "startzeit")]
    pub start_time: String,
    #[serde(default, alias = "endzeit")]
    pub end_time: String,
    #[serde(default, alias = "thema")]
    pub topic: String,
    #[serde(default, alias = "beschreibung")]
    pub description: String,
}

impl MathFact {
    pub fn new(episode_id: Option<EpisodeId>, topic: impl Into<String>) -> Self {
        Self {
            episode_id,
            start_time: String::new(),
            end_time: String::new(),
            topic: topic.into(),
            description: String::new(),
        }
    }

    pub fn with_window(mut self, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self.end_time = end_time.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
