use crate::config;
use crate::library::{DemoLibrarySource, JsonLibrarySource, LibrarySource};
use crate::palette::{self, PaletteCache, Rgb};
use crate::stats::{self, ListeningStats};
use crate::story::{StoryCard, StoryDeck};
use anyhow::Result;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

const TICK_SECONDS: f64 = 0.1;

#[derive(Debug, Default)]
pub struct RunOptions {
    pub library_path: Option<PathBuf>,
    pub year: Option<i32>,
    pub sample: bool,
    pub auto: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Ready(ListeningStats),
    EmptyLibrary,
    FetchFailed(String),
}

pub fn load_stats(source: &dyn LibrarySource, year: i32) -> LoadOutcome {
    let songs = match source.fetch_songs() {
        Ok(songs) => songs,
        Err(err) => return LoadOutcome::FetchFailed(format!("{err:#}")),
    };

    if !songs.iter().any(|song| song.play_count > 0) {
        return LoadOutcome::EmptyLibrary;
    }

    let receiver = stats::compute_in_background(songs, year);
    match receiver.recv() {
        Ok(stats) => LoadOutcome::Ready(stats),
        Err(_) => LoadOutcome::FetchFailed(String::from("stats worker dropped its result")),
    }
}

pub fn run(options: RunOptions) -> Result<()> {
    let settings = config::load_settings()?;
    let year = options.year.unwrap_or(settings.year);

    let stats = if options.sample {
        ListeningStats::sample()
    } else {
        let source: Box<dyn LibrarySource> = match options
            .library_path
            .clone()
            .or_else(|| settings.library_path.clone())
        {
            Some(path) => Box::new(JsonLibrarySource::new(path)),
            None => Box::new(DemoLibrarySource),
        };

        match load_stats(source.as_ref(), year) {
            LoadOutcome::Ready(stats) => stats,
            LoadOutcome::EmptyLibrary => {
                println!("Your library has no played songs yet, so there is nothing to wrap.");
                return Ok(());
            }
            LoadOutcome::FetchFailed(reason) => anyhow::bail!("library fetch failed: {reason}"),
        }
    };

    let mut deck = StoryDeck::new(settings.auto_advance_seconds);
    let mut cache = PaletteCache::new();

    render_card(&stats, &deck, &mut cache);
    if options.auto {
        loop {
            thread::sleep(Duration::from_millis((TICK_SECONDS * 1000.0) as u64));
            if deck.tick(TICK_SECONDS) {
                render_card(&stats, &deck, &mut cache);
            }
            if deck.at_end() && deck.progress() >= 1.0 {
                break;
            }
        }
    } else {
        while deck.advance() {
            render_card(&stats, &deck, &mut cache);
        }
    }

    Ok(())
}

pub fn card_gradient(card: StoryCard, stats: &ListeningStats, cache: &mut PaletteCache) -> Vec<Rgb> {
    match card {
        StoryCard::Welcome => vec![[0.2, 0.1, 0.5], [0.5, 0.2, 0.6], [0.1, 0.1, 0.3]],
        StoryCard::TotalTime => vec![[0.1, 0.3, 0.5], [0.2, 0.1, 0.4], [0.1, 0.2, 0.3]],
        StoryCard::TopArtist => match stats.top_artists.first() {
            Some(artist) => {
                let fallback = artist
                    .genres
                    .first()
                    .map(|genre| genre_gradient(genre))
                    .unwrap_or_else(|| palette::DEFAULT_GRADIENT.to_vec());
                match &artist.artwork_ref {
                    Some(artwork) => cache.get_or_insert_with(artwork, || fallback).to_vec(),
                    None => fallback,
                }
            }
            None => palette::DEFAULT_GRADIENT.to_vec(),
        },
        StoryCard::TopSongs => vec![[0.8, 0.3, 0.4], [0.6, 0.2, 0.5], [0.4, 0.2, 0.6]],
        StoryCard::TopGenres => match stats.top_genres.first() {
            Some(genre) => genre_gradient(&genre.name),
            None => palette::DEFAULT_GRADIENT.to_vec(),
        },
        StoryCard::Patterns => vec![[0.2, 0.3, 0.6], [0.1, 0.2, 0.4], [0.15, 0.15, 0.3]],
        StoryCard::AudioAura => stats.aura.gradient().to_vec(),
        StoryCard::Summary => vec![[0.9, 0.5, 0.2], [0.8, 0.2, 0.5], [0.4, 0.1, 0.6]],
    }
}

fn genre_gradient(name: &str) -> Vec<Rgb> {
    let base = palette::genre_color(name);
    vec![base, palette::darken(base, 0.3), [0.05, 0.05, 0.05]]
}

fn render_card(stats: &ListeningStats, deck: &StoryDeck, cache: &mut PaletteCache) {
    let card = deck.current_card();
    let swatch: Vec<String> = card_gradient(card, stats, cache)
        .into_iter()
        .map(palette::to_hex)
        .collect();

    println!();
    println!(
        "[{}/{}] {}  ({})",
        deck.current_index() + 1,
        deck.card_count(),
        card.label(),
        swatch.join(" ")
    );
    for line in card_lines(card, stats) {
        println!("  {line}");
    }
}

fn card_lines(card: StoryCard, stats: &ListeningStats) -> Vec<String> {
    match card {
        StoryCard::Welcome => vec![
            format!("Your {} in music is ready.", stats.year),
            String::from("Tap through to see what you had on repeat."),
        ],
        StoryCard::TotalTime => vec![
            format!(
                "{} minutes of listening",
                stats::format_count(stats.total_minutes_listened)
            ),
            format!("That's {}.", stats.formatted_total_time()),
        ],
        StoryCard::TopArtist => match stats.top_artists.first() {
            Some(artist) => {
                let mut lines = vec![
                    format!("#1 artist: {}", artist.name),
                    format!(
                        "{} plays, {} together",
                        artist.formatted_play_count(),
                        artist.formatted_play_time()
                    ),
                ];
                if let Some(title) = &artist.top_song_title {
                    lines.push(format!("Most played: {title}"));
                }
                lines
            }
            None => vec![String::from("No artists played this year.")],
        },
        StoryCard::TopSongs => {
            if stats.top_songs.is_empty() {
                return vec![String::from("No songs played this year.")];
            }
            stats
                .top_songs
                .iter()
                .enumerate()
                .map(|(index, song)| {
                    format!(
                        "{}. {} - {} ({} plays)",
                        index + 1,
                        song.title,
                        song.artist_name,
                        song.formatted_play_count()
                    )
                })
                .collect()
        }
        StoryCard::TopGenres => {
            if stats.top_genres.is_empty() {
                return vec![String::from("No genres tagged this year.")];
            }
            stats
                .top_genres
                .iter()
                .map(|genre| format!("{}. {} ({:.0}%)", genre.rank, genre.name, genre.percentage))
                .collect()
        }
        StoryCard::Patterns => vec![
            format!(
                "Peak hour: {} ({})",
                stats.patterns.peak_hour_clock(),
                stats.patterns.peak_hour_label()
            ),
            format!("Busiest day: {}", stats.patterns.peak_weekday_name()),
        ],
        StoryCard::AudioAura => vec![
            format!(
                "{} + {}",
                stats.aura.primary.label(),
                stats.aura.secondary.label()
            ),
            stats.aura.description.clone(),
        ],
        StoryCard::Summary => vec![
            format!(
                "{} songs played across {} artists",
                stats::format_count(stats.total_songs_played),
                stats::format_count(stats.total_artists_discovered as u64)
            ),
            format!(
                "{} minutes listened in {}",
                stats::format_count(stats.total_minutes_listened),
                stats.year
            ),
            String::from("See you next year."),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::demo_library;
    use crate::model::LibrarySong;
    use anyhow::anyhow;

    struct FailingSource;

    impl LibrarySource for FailingSource {
        fn fetch_songs(&self) -> Result<Vec<LibrarySong>> {
            Err(anyhow!("authorization denied"))
        }
    }

    struct FixedSource(Vec<LibrarySong>);

    impl LibrarySource for FixedSource {
        fn fetch_songs(&self) -> Result<Vec<LibrarySong>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn fetch_failure_and_empty_library_are_distinct_outcomes() {
        let failed = load_stats(&FailingSource, 2025);
        assert!(matches!(failed, LoadOutcome::FetchFailed(ref reason) if reason.contains("authorization denied")));

        let mut unplayed = demo_library();
        for song in &mut unplayed {
            song.play_count = 0;
        }
        assert_eq!(
            load_stats(&FixedSource(unplayed), 2025),
            LoadOutcome::EmptyLibrary
        );

        assert_eq!(
            load_stats(&FixedSource(Vec::new()), 2025),
            LoadOutcome::EmptyLibrary
        );
    }

    #[test]
    fn ready_outcome_matches_direct_computation() {
        let songs = demo_library();
        let outcome = load_stats(&FixedSource(songs.clone()), 2025);

        assert_eq!(
            outcome,
            LoadOutcome::Ready(stats::compute(&songs, 2025))
        );
    }

    #[test]
    fn every_card_renders_lines_for_the_sample() {
        let stats = ListeningStats::sample();
        for card in crate::story::CARDS {
            assert!(!card_lines(card, &stats).is_empty());
        }
    }

    #[test]
    fn empty_stats_render_placeholder_lines() {
        let stats = stats::compute(&[], 2025);

        assert_eq!(
            card_lines(StoryCard::TopSongs, &stats),
            vec![String::from("No songs played this year.")]
        );
        assert_eq!(
            card_lines(StoryCard::TopArtist, &stats),
            vec![String::from("No artists played this year.")]
        );
    }

    #[test]
    fn top_artist_gradient_is_cached_by_artwork_ref() {
        let stats = stats::compute(&demo_library(), 2025);
        let mut cache = PaletteCache::new();

        let first = card_gradient(StoryCard::TopArtist, &stats, &mut cache);
        assert_eq!(cache.len(), 1);
        let second = card_gradient(StoryCard::TopArtist, &stats, &mut cache);

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn aura_card_uses_the_mood_gradient() {
        let stats = ListeningStats::sample();
        let mut cache = PaletteCache::new();

        let gradient = card_gradient(StoryCard::AudioAura, &stats, &mut cache);
        assert_eq!(gradient, stats.aura.gradient().to_vec());
    }
}
