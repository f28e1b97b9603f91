pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{CityStory, Episode, GlossaryEntry, Inclusion, MathFact, Playlist, Song, Story};

pub use aggregates::{EpisodeChild, EpisodeDetails, WithEpisode};

pub use error::DomainError;

// Re-export ID types
pub use ids::EpisodeId;

// Re-export value objects
pub use value_objects::GeoPoint;
