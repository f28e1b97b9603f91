//! Common test helpers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::sample_store;
//!
//! #[test]
//! fn episodes_are_served() {
//!     let store = sample_store();
//!     // ... test logic
//! }
//! ```

use std::sync::Arc;

use folgen_domain::{
    CityStory, Episode, EpisodeId, GeoPoint, GlossaryEntry, Inclusion, MathFact, Playlist, Song,
    Story,
};

use crate::stores::{Collections, DataStore};

pub fn episode_id(id: &str) -> EpisodeId {
    EpisodeId::new(id).expect("valid episode id")
}

pub fn episode(id: &str, name: &str) -> Episode {
    let code = name.replace("Folge ", "F");
    Episode::new(episode_id(id), name, code)
}

/// Two episodes, a dangling city-story, a math-fact without reference,
/// one playlist and three glossary words.
pub fn sample_collections() -> Collections {
    Collections {
        episodes: vec![episode("E1", "Folge 1"), episode("E2", "Folge 2")],
        city_stories: vec![
            CityStory::new(Some(episode_id("E1")), "10:00", "10:05").with_stories(vec![
                Story::new("Der Brunnen", "Marktplatz")
                    .with_kind("Sage")
                    .with_geo(GeoPoint::new(50.11, 8.68))
                    .with_narrative("Es war einmal ein Brunnen."),
            ]),
            CityStory::new(Some(episode_id("E9")), "11:00", "11:05"),
        ],
        math_facts: vec![
            MathFact::new(Some(episode_id("E2")), "Primzahlen")
                .with_window("12:00", "12:03")
                .with_description("Es gibt unendlich viele."),
            MathFact::new(None, "Pi").with_window("12:30", "12:31"),
        ],
        playlists: vec![Playlist::new(Some(episode_id("E1")), "10:10").with_songs(vec![
            Song::new("A1", Some(Inclusion::Flag(true))),
            Song::new("B2", Some(Inclusion::Text("nein".to_string()))),
        ])],
        glossary: vec![
            GlossaryEntry::new("Apfel", "Nomen")
                .with_explanation("Eine Frucht")
                .with_examples(vec!["Der Apfel ist rot.".to_string()])
                .with_related_words(vec!["Birne".to_string()]),
            GlossaryEntry::new("Birne", "Nomen").with_related_words(vec!["Apfel".to_string()]),
            GlossaryEntry::new("Übung", "Nomen"),
        ],
    }
}

pub fn sample_store() -> Arc<DataStore> {
    Arc::new(DataStore::new(sample_collections()).expect("sample episodes are unique"))
}
