use crate::aura::{self, AudioAura, Mood};
use crate::model::LibrarySong;
use crate::patterns::{self, ListeningPatterns};
use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{self, Receiver};
use std::thread;

pub const TOP_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct SongSummary {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    pub album_title: String,
    pub artwork_ref: Option<String>,
    pub play_count: u32,
    pub total_play_seconds: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtistSummary {
    pub rank: usize,
    pub name: String,
    pub artwork_ref: Option<String>,
    pub play_count: u64,
    pub total_play_seconds: f64,
    pub top_song_title: Option<String>,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenreSummary {
    pub rank: usize,
    pub name: String,
    pub play_count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListeningStats {
    pub year: i32,
    pub total_minutes_listened: u64,
    pub total_songs_played: u64,
    pub total_artists_discovered: usize,
    pub top_artists: Vec<ArtistSummary>,
    pub top_songs: Vec<SongSummary>,
    pub top_genres: Vec<GenreSummary>,
    pub patterns: ListeningPatterns,
    pub aura: AudioAura,
}

pub fn compute(songs: &[LibrarySong], year: i32) -> ListeningStats {
    let played: Vec<&LibrarySong> = songs.iter().filter(|song| song.play_count > 0).collect();

    let top_songs = top_songs(&played);
    let top_artists = top_artists(&played);
    let top_genres = top_genres(&played);
    let listening_patterns = patterns::build(&played);
    let audio_aura = aura::generate(&top_genres);

    let total_minutes_listened = played
        .iter()
        .map(|song| (song.duration_seconds * f64::from(song.play_count) / 60.0) as u64)
        .sum();
    let total_songs_played = played
        .iter()
        .map(|song| u64::from(song.play_count))
        .sum();
    let total_artists_discovered = played
        .iter()
        .map(|song| song.artist_name.as_str())
        .collect::<HashSet<&str>>()
        .len();

    ListeningStats {
        year,
        total_minutes_listened,
        total_songs_played,
        total_artists_discovered,
        top_artists,
        top_songs,
        top_genres,
        patterns: listening_patterns,
        aura: audio_aura,
    }
}

pub fn compute_in_background(songs: Vec<LibrarySong>, year: i32) -> Receiver<ListeningStats> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(compute(&songs, year));
    });
    rx
}

fn top_songs(played: &[&LibrarySong]) -> Vec<SongSummary> {
    let mut ranked: Vec<&LibrarySong> = played.to_vec();
    ranked.sort_by(|a, b| b.play_count.cmp(&a.play_count));

    ranked
        .into_iter()
        .take(TOP_LIMIT)
        .map(|song| SongSummary {
            id: song.id.clone(),
            title: song.title.clone(),
            artist_name: song.artist_name.clone(),
            album_title: song.album_title.clone(),
            artwork_ref: song.artwork_ref.clone(),
            play_count: song.play_count,
            total_play_seconds: song.duration_seconds * f64::from(song.play_count),
        })
        .collect()
}

#[derive(Default)]
struct ArtistGroup {
    name: String,
    play_count: u64,
    play_seconds: f64,
    top_song_title: Option<String>,
    genres: Vec<String>,
    artwork_ref: Option<String>,
}

fn top_artists(played: &[&LibrarySong]) -> Vec<ArtistSummary> {
    let mut groups: Vec<ArtistGroup> = Vec::new();
    let mut lookup: HashMap<String, usize> = HashMap::new();

    for song in played {
        let index = *lookup.entry(song.artist_name.clone()).or_insert_with(|| {
            groups.push(ArtistGroup {
                name: song.artist_name.clone(),
                ..ArtistGroup::default()
            });
            groups.len() - 1
        });
        let group = &mut groups[index];

        if group.play_count <= u64::from(song.play_count) {
            group.top_song_title = Some(song.title.clone());
        }
        group.play_count += u64::from(song.play_count);
        group.play_seconds += song.duration_seconds * f64::from(song.play_count);
        for genre in &song.genre_names {
            if !group.genres.iter().any(|known| known == genre) {
                group.genres.push(genre.clone());
            }
        }
        if group.artwork_ref.is_none() {
            group.artwork_ref = song.artwork_ref.clone();
        }
    }

    groups.sort_by(|a, b| b.play_count.cmp(&a.play_count));

    groups
        .into_iter()
        .take(TOP_LIMIT)
        .enumerate()
        .map(|(index, group)| ArtistSummary {
            rank: index + 1,
            name: group.name,
            artwork_ref: group.artwork_ref,
            play_count: group.play_count,
            total_play_seconds: group.play_seconds,
            top_song_title: group.top_song_title,
            genres: group.genres,
        })
        .collect()
}

fn top_genres(played: &[&LibrarySong]) -> Vec<GenreSummary> {
    let mut names: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();

    for song in played {
        for genre in &song.genre_names {
            if !counts.contains_key(genre) {
                names.push(genre.clone());
            }
            *counts.entry(genre.clone()).or_insert(0) += u64::from(song.play_count);
        }
    }

    let total_plays: u64 = played
        .iter()
        .map(|song| u64::from(song.play_count))
        .sum();

    let mut entries: Vec<(String, u64)> = names
        .into_iter()
        .map(|name| {
            let count = counts[&name];
            (name, count)
        })
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries
        .into_iter()
        .take(TOP_LIMIT)
        .enumerate()
        .map(|(index, (name, count))| {
            let percentage = if total_plays > 0 {
                ((count as f64 / total_plays as f64) * 100.0).min(100.0)
            } else {
                0.0
            };
            GenreSummary {
                rank: index + 1,
                name,
                play_count: count,
                percentage,
            }
        })
        .collect()
}

pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_play_time(total_seconds: f64) -> String {
    let total = total_seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes} minutes")
    }
}

impl SongSummary {
    pub fn formatted_play_count(&self) -> String {
        format_count(u64::from(self.play_count))
    }
}

impl ArtistSummary {
    pub fn formatted_play_count(&self) -> String {
        format_count(self.play_count)
    }

    pub fn formatted_play_time(&self) -> String {
        format_play_time(self.total_play_seconds)
    }
}

impl ListeningStats {
    pub fn total_hours(&self) -> u64 {
        self.total_minutes_listened / 60
    }

    pub fn formatted_total_time(&self) -> String {
        let hours = self.total_minutes_listened / 60;
        let minutes = self.total_minutes_listened % 60;
        if hours >= 24 {
            let days = hours / 24;
            let remaining_hours = hours % 24;
            return format!("{days} days, {remaining_hours} hours");
        }
        format!("{hours} hours, {minutes} minutes")
    }

    pub fn sample() -> Self {
        let artists = [
            ("Taylor Swift", 892_u64, 48_600.0, "Anti-Hero", vec!["Pop", "Country"]),
            ("The Weeknd", 654, 35_400.0, "Blinding Lights", vec!["R&B", "Pop"]),
            ("Drake", 521, 28_200.0, "Rich Flex", vec!["Hip-Hop", "R&B"]),
            ("Dua Lipa", 445, 24_000.0, "Levitating", vec!["Pop", "Dance"]),
            ("Bad Bunny", 398, 21_600.0, "Me Porto Bonito", vec!["Reggaeton", "Latin"]),
        ];
        let songs = [
            ("1", "Anti-Hero", "Taylor Swift", "Midnights", 247_u32, 14_820.0),
            ("2", "Blinding Lights", "The Weeknd", "After Hours", 198, 11_880.0),
            ("3", "As It Was", "Harry Styles", "Harry's House", 176, 10_560.0),
            ("4", "Levitating", "Dua Lipa", "Future Nostalgia", 165, 9_900.0),
            ("5", "Heat Waves", "Glass Animals", "Dreamland", 143, 8_580.0),
        ];
        let genres = [
            ("Pop", 3200_u64, 38.0),
            ("Hip-Hop", 1800, 21.0),
            ("R&B", 1400, 17.0),
            ("Rock", 1000, 12.0),
            ("Electronic", 600, 7.0),
        ];

        Self {
            year: crate::model::default_year(),
            total_minutes_listened: 42_680,
            total_songs_played: 8_432,
            total_artists_discovered: 247,
            top_artists: artists
                .into_iter()
                .enumerate()
                .map(|(index, (name, plays, seconds, top_song, genre_list))| ArtistSummary {
                    rank: index + 1,
                    name: name.to_string(),
                    artwork_ref: None,
                    play_count: plays,
                    total_play_seconds: seconds,
                    top_song_title: Some(top_song.to_string()),
                    genres: genre_list.into_iter().map(str::to_string).collect(),
                })
                .collect(),
            top_songs: songs
                .into_iter()
                .map(|(id, title, artist, album, plays, seconds)| SongSummary {
                    id: id.to_string(),
                    title: title.to_string(),
                    artist_name: artist.to_string(),
                    album_title: album.to_string(),
                    artwork_ref: None,
                    play_count: plays,
                    total_play_seconds: seconds,
                })
                .collect(),
            top_genres: genres
                .into_iter()
                .enumerate()
                .map(|(index, (name, plays, percentage))| GenreSummary {
                    rank: index + 1,
                    name: name.to_string(),
                    play_count: plays,
                    percentage,
                })
                .collect(),
            patterns: ListeningPatterns {
                hourly: patterns::sample_hourly(),
                weekday: patterns::sample_weekday(),
            },
            aura: AudioAura {
                primary: Mood::Uplifting,
                secondary: Mood::Energetic,
                description: String::from(
                    "Sunshine in audio form. Your music choices spread positivity and keep the good vibes flowing all year long.",
                ),
            },
        }
    }
}
