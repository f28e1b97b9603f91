//! Playlist entity - Songs played within an episode

use serde::{Deserialize, Serialize};

use crate::EpisodeId;

/// The songs played in an episode, starting at `start_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(
        default,
        alias = "folge",
        deserialize_with = "crate::ids::deserialize_reference"
    )]
    pub episode_id: Option<EpisodeId>,
    #[serde(default, alias = "startzeit")]
    pub start_time: String,
    #[serde(default, alias = "lieder")]
    pub songs: Vec<Song>,
}

impl Playlist {
    pub fn new(episode_id: Option<EpisodeId>, start_time: impl Into<String>) -> Self {
        Self {
            episode_id,
            start_time: start_time.into(),
            songs: Vec::new(),
        }
    }

    pub fn with_songs(mut self, songs: Vec<Song>) -> Self {
        self.songs = songs;
        self
    }
}

/// A playlist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    #[serde(default)]
    pub code: String,
    #[serde(default, alias = "enthalten")]
    pub included: Option<Inclusion>,
}

impl Song {
    pub fn new(code: impl Into<String>, included: Option<Inclusion>) -> Self {
        Self {
            code: code.into(),
            included,
        }
    }
}

/// Inclusion marker as it appears in the source: a boolean or a free-text flag.
///
/// Kept verbatim so playlists are served exactly as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Inclusion {
    Flag(bool),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusion_keeps_source_shape() {
        let songs: Vec<Song> = serde_json::from_str(
            r#"[{"code": "A1", "included": true}, {"code": "B2", "enthalten": "ja"}, {"code": "C3"}]"#,
        )
        .unwrap();

        assert_eq!(songs[0].included, Some(Inclusion::Flag(true)));
        assert_eq!(songs[1].included, Some(Inclusion::Text("ja".to_string())));
        assert_eq!(songs[2].included, None);

        let value = serde_json::to_value(&songs).unwrap();
        assert_eq!(value[0]["included"], true);
        assert_eq!(value[1]["included"], "ja");
        assert!(value[2]["included"].is_null());
    }

    #[test]
    fn parses_original_field_names() {
        let playlist: Playlist = serde_json::from_str(
            r#"{"folge": "E1", "startzeit": "10:10", "lieder": [{"code": "A1", "enthalten": false}]}"#,
        )
        .unwrap();

        assert_eq!(playlist.episode_id.unwrap().as_str(), "E1");
        assert_eq!(playlist.start_time, "10:10");
        assert_eq!(playlist.songs.len(), 1);
        assert_eq!(playlist.songs[0].included, Some(Inclusion::Flag(false)));
    }
}
