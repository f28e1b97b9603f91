//! City-story entity - A time window of location-bound stories within an episode

use serde::{Deserialize, Serialize};

use crate::{EpisodeId, GeoPoint};

/// A block of stories told about places, aired within one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStory {
    /// Owning episode; absent when the source record carries no reference
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
    #[serde(default, alias = "geschichten")]
    pub stories: Vec<Story>,
}

impl CityStory {
    pub fn new(
        episode_id: Option<EpisodeId>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            episode_id,
            start_time: start_time.into(),
            end_time: end_time.into(),
            stories: Vec::new(),
        }
    }

    pub fn with_stories(mut self, stories: Vec<Story>) -> Self {
        self.stories = stories;
        self
    }
}

/// One story about a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(default, alias = "titel")]
    pub title: String,
    #[serde(default, alias = "ort")]
    pub location: String,
    /// Category of the story (the `type` field on the wire)
    #[serde(default, rename = "type", alias = "typ")]
    pub kind: String,
    #[serde(default)]
    pub geo: Option<GeoPoint>,
    #[serde(default, alias = "geschichte")]
    pub narrative: String,
}

impl Story {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            kind: String::new(),
            geo: None,
            narrative: String::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_geo(mut self, geo: GeoPoint) -> Self {
        self.geo = Some(geo);
        self
    }

    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = narrative.into();
        self
    }
}
