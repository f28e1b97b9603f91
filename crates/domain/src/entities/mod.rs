//! Domain entities - Records loaded from the static sources

mod city_story;
mod episode;
mod glossary;
mod math_fact;
mod playlist;

pub use city_story::{CityStory, Story};
pub use episode::Episode;
pub use glossary::GlossaryEntry;
pub use math_fact::MathFact;
pub use playlist::{Inclusion, Playlist, Song};
