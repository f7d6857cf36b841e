use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibrarySong {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    pub album_title: String,
    #[serde(default)]
    pub artwork_ref: Option<String>,
    pub duration_seconds: f64,
    #[serde(default)]
    pub genre_names: Vec<String>,
    pub play_count: u32,
    #[serde(default)]
    pub last_played_at: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_year")]
    pub year: i32,
    #[serde(default)]
    pub library_path: Option<PathBuf>,
    #[serde(default = "default_auto_advance_seconds")]
    pub auto_advance_seconds: f64,
}

pub fn default_year() -> i32 {
    2025
}

fn default_auto_advance_seconds() -> f64 {
    6.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            year: default_year(),
            library_path: None,
            auto_advance_seconds: default_auto_advance_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_deserializes_with_missing_optional_fields() {
        let raw = r#"{
            "id": "s1",
            "title": "Song",
            "artist_name": "Artist",
            "album_title": "Album",
            "duration_seconds": 200.0,
            "play_count": 3
        }"#;

        let song: LibrarySong = serde_json::from_str(raw).expect("parse");
        assert_eq!(song.artwork_ref, None);
        assert!(song.genre_names.is_empty());
        assert_eq!(song.last_played_at, None);
    }

    #[test]
    fn settings_defaults_fill_absent_fields() {
        let settings: Settings = serde_json::from_str("{}").expect("parse");
        assert_eq!(settings.year, 2025);
        assert_eq!(settings.auto_advance_seconds, 6.0);
        assert_eq!(settings.library_path, None);
    }
}
