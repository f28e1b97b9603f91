//! Composite results - child records joined with the episode they belong to
//!
//! Sources store city-stories, math-facts and playlists flat, with only an
//! episode id. Queries that need the owning episode build a [`WithEpisode`]
//! value instead of patching extra fields onto the record. The reverse view,
//! an episode with everything that points at it, is [`EpisodeDetails`].

mod episode_details;
mod with_episode;

pub use episode_details::EpisodeDetails;
pub use with_episode::{EpisodeChild, WithEpisode};
