use serde::{Deserialize, Serialize};

use crate::{CityStory, Episode, MathFact};

/// An episode together with every city-story and math-fact that points at it.
///
/// Serializes as the episode's own fields plus `cityStories` and `mathFacts`
/// lists, in collection order. Both lists are empty when nothing references
/// the episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeDetails {
    #[serde(flatten)]
    pub episode: Episode,
    pub city_stories: Vec<CityStory>,
    pub math_facts: Vec<MathFact>,
}

impl EpisodeDetails {
    pub fn new(episode: Episode, city_stories: Vec<CityStory>, math_facts: Vec<MathFact>) -> Self {
        Self {
            episode,
            city_stories,
            math_facts,
        }
    }
}
