use crate::model::LibrarySong;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const FETCH_PAGE_LIMIT: usize = 500;

pub trait LibrarySource {
    fn fetch_songs(&self) -> Result<Vec<LibrarySong>>;
}

pub struct JsonLibrarySource {
    path: PathBuf,
}

impl JsonLibrarySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LibrarySource for JsonLibrarySource {
    fn fetch_songs(&self) -> Result<Vec<LibrarySong>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let mut songs: Vec<LibrarySong> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        songs.truncate(FETCH_PAGE_LIMIT);
        Ok(songs)
    }
}

pub fn save_snapshot(path: &Path, songs: &[LibrarySong]) -> Result<()> {
    let json = serde_json::to_string_pretty(songs)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

pub struct DemoLibrarySource;

impl LibrarySource for DemoLibrarySource {
    fn fetch_songs(&self) -> Result<Vec<LibrarySong>> {
        Ok(demo_library())
    }
}

pub fn demo_library() -> Vec<LibrarySong> {
    const SONGS: &[(&str, &str, &str, &[&str], f64, u32, Option<i64>)] = &[
        ("Neon Mirage", "Velvet Static", "Afterglow", &["Synth-Pop", "Electronic"], 214.0, 87, Some(1_765_650_000)),
        ("Paper Planes Home", "Velvet Static", "Afterglow", &["Synth-Pop"], 198.0, 61, Some(1_762_441_200)),
        ("Gravel Road Hymn", "June Harrow", "Dust & Honey", &["Country", "Folk"], 243.0, 54, Some(1_758_351_600)),
        ("Cold Coffee", "June Harrow", "Dust & Honey", &["Country"], 205.0, 38, Some(1_755_673_200)),
        ("Midnight Freight", "The Ember Choir", "Signal Fires", &["Indie Rock", "Alternative"], 251.0, 72, Some(1_764_181_200)),
        ("Glasshouse", "The Ember Choir", "Signal Fires", &["Indie Rock"], 233.0, 45, Some(1_760_725_800)),
        ("Low Tide Loop", "Mara Voss", "Harbor Lights", &["R&B", "Soul"], 227.0, 66, Some(1_766_080_800)),
        ("Slow Orbit", "Mara Voss", "Harbor Lights", &["R&B"], 262.0, 29, Some(1_753_340_400)),
        ("Four Corners", "Quartet Nine", "Blue Hours", &["Jazz"], 312.0, 33, Some(1_759_474_800)),
        ("Stairwell Echoes", "Quartet Nine", "Blue Hours", &["Jazz", "Classical"], 287.0, 21, Some(1_756_623_600)),
        ("Overdrive Heart", "Krait", "Molten", &["Metal"], 196.0, 40, Some(1_763_149_200)),
        ("Archive Dust", "Field Notes", "Quiet Maps", &["Ambient"], 341.0, 12, None),
    ];

    SONGS
        .iter()
        .enumerate()
        .map(
            |(index, (title, artist, album, genres, duration, plays, last_played))| LibrarySong {
                id: format!("demo-{index}"),
                title: title.to_string(),
                artist_name: artist.to_string(),
                album_title: album.to_string(),
                artwork_ref: Some(format!("artwork://{}", album.to_lowercase().replace(' ', "-"))),
                duration_seconds: *duration,
                genre_names: genres.iter().map(|genre| genre.to_string()).collect(),
                play_count: *plays,
                last_played_at: *last_played,
            },
        )
        .collect()
}
