use serde::{Deserialize, Serialize};

use crate::{CityStory, Episode, EpisodeId, MathFact, Playlist};

/// A record that points at its owning episode by id.
pub trait EpisodeChild {
    /// Collection name used in logs and error messages.
    const COLLECTION: &'static str;

    fn episode_id(&self) -> Option<&EpisodeId>;

    /// Whether this record points at the episode with `id`.
    fn belongs_to(&self, id: &EpisodeId) -> bool {
        self.episode_id() == Some(id)
    }
}

impl EpisodeChild for CityStory {
    const COLLECTION: &'static str = "cityStories";

    fn episode_id(&self) -> Option<&EpisodeId> {
        self.episode_id.as_ref()
    }
}

impl EpisodeChild for MathFact {
    const COLLECTION: &'static str = "mathFacts";

    fn episode_id(&self) -> Option<&EpisodeId> {
        self.episode_id.as_ref()
    }
}

impl EpisodeChild for Playlist {
    const COLLECTION: &'static str = "playlists";

    fn episode_id(&self) -> Option<&EpisodeId> {
        self.episode_id.as_ref()
    }
}

/// A child record together with its resolved episode.
///
/// Serializes as the child's own fields plus an `episode` field, which is
/// `null` when the reference did not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithEpisode<T> {
    #[serde(flatten)]
    pub record: T,
    pub episode: Option<Episode>,
}

impl<T> WithEpisode<T> {
    pub fn new(record: T, episode: Option<Episode>) -> Self {
        Self { record, episode }
    }
}
