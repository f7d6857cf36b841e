use crate::model::LibrarySong;
use std::collections::HashMap;
use time::{OffsetDateTime, UtcOffset};

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ListeningPatterns {
    pub hourly: HashMap<u8, u32>,
    pub weekday: HashMap<u8, u32>,
}

pub fn build(songs: &[&LibrarySong]) -> ListeningPatterns {
    build_with_offset(songs, local_offset())
}

fn build_with_offset(songs: &[&LibrarySong], offset: UtcOffset) -> ListeningPatterns {
    let mut hourly: HashMap<u8, u32> = HashMap::new();
    let mut weekday: HashMap<u8, u32> = HashMap::new();

    for song in songs {
        let Some(timestamp) = song.last_played_at else {
            continue;
        };
        let Ok(moment) = OffsetDateTime::from_unix_timestamp(timestamp) else {
            continue;
        };

        let local = moment.to_offset(offset);
        let hour = local.hour();
        let day = local.weekday().number_days_from_sunday() + 1;

        let bucket = hourly.entry(hour).or_insert(0);
        *bucket = bucket.saturating_add(song.play_count);
        let bucket = weekday.entry(day).or_insert(0);
        *bucket = bucket.saturating_add(song.play_count);
    }

    if hourly.is_empty() {
        hourly = sample_hourly();
    }
    if weekday.is_empty() {
        weekday = sample_weekday();
    }

    ListeningPatterns { hourly, weekday }
}

fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

pub fn sample_hourly() -> HashMap<u8, u32> {
    HashMap::from([
        (8, 120),
        (9, 180),
        (10, 150),
        (11, 130),
        (12, 200),
        (13, 220),
        (14, 190),
        (15, 160),
        (16, 180),
        (17, 250),
        (18, 320),
        (19, 380),
        (20, 420),
        (21, 450),
        (22, 380),
        (23, 280),
        (0, 150),
        (1, 80),
    ])
}

pub fn sample_weekday() -> HashMap<u8, u32> {
    HashMap::from([
        (1, 1200),
        (2, 980),
        (3, 1050),
        (4, 1100),
        (5, 1150),
        (6, 1400),
        (7, 1350),
    ])
}

impl ListeningPatterns {
    pub fn peak_hour(&self) -> u8 {
        peak_key(&self.hourly).unwrap_or(12)
    }

    pub fn peak_weekday(&self) -> u8 {
        peak_key(&self.weekday).unwrap_or(1)
    }

    pub fn peak_hour_label(&self) -> &'static str {
        match self.peak_hour() {
            5..=8 => "Early Bird",
            9..=11 => "Morning Groover",
            12..=13 => "Lunch Break DJ",
            14..=16 => "Afternoon Vibes",
            17..=19 => "Evening Listener",
            20..=23 => "Night Owl",
            _ => "Midnight Explorer",
        }
    }

    pub fn peak_weekday_name(&self) -> &'static str {
        let day = self.peak_weekday();
        if !(1..=7).contains(&day) {
            return "Unknown";
        }
        WEEKDAY_NAMES[usize::from(day) - 1]
    }

    pub fn peak_hour_clock(&self) -> String {
        format_hour(self.peak_hour())
    }
}

fn peak_key(map: &HashMap<u8, u32>) -> Option<u8> {
    let mut keys: Vec<u8> = map.keys().copied().collect();
    keys.sort_unstable();

    let mut best: Option<(u8, u32)> = None;
    for key in keys {
        let count = map[&key];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

fn format_hour(hour: u8) -> String {
    let (digits, half) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{digits} {half}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LibrarySong;

    fn song(play_count: u32, last_played_at: Option<i64>) -> LibrarySong {
        LibrarySong {
            id: String::from("s"),
            title: String::from("t"),
            artist_name: String::from("a"),
            album_title: String::from("b"),
            artwork_ref: None,
            duration_seconds: 180.0,
            genre_names: Vec::new(),
            play_count,
            last_played_at,
        }
    }

    #[test]
    fn buckets_weighted_by_play_count() {
        let friday_afternoon = 1_609_515_000;
        let songs = [song(7, Some(friday_afternoon))];
        let refs: Vec<&LibrarySong> = songs.iter().collect();

        let patterns = build_with_offset(&refs, UtcOffset::UTC);

        assert_eq!(patterns.hourly.get(&15), Some(&7));
        assert_eq!(patterns.weekday.get(&6), Some(&7));
        assert_eq!(patterns.hourly.len(), 1);
        assert_eq!(patterns.weekday.len(), 1);
    }

    #[test]
    fn songs_without_timestamps_fall_back_to_samples() {
        let songs = [song(10, None), song(3, None)];
        let refs: Vec<&LibrarySong> = songs.iter().collect();

        let patterns = build_with_offset(&refs, UtcOffset::UTC);

        assert_eq!(patterns.hourly, sample_hourly());
        assert_eq!(patterns.weekday, sample_weekday());
    }

    #[test]
    fn fallback_peaks_match_sample_distribution() {
        let patterns = ListeningPatterns {
            hourly: sample_hourly(),
            weekday: sample_weekday(),
        };

        assert_eq!(patterns.peak_hour(), 21);
        assert_eq!(patterns.peak_weekday(), 6);
        assert_eq!(patterns.peak_weekday_name(), "Friday");
        assert_eq!(patterns.peak_hour_label(), "Night Owl");
    }

    #[test]
    fn tied_peaks_pick_the_smallest_key() {
        let patterns = ListeningPatterns {
            hourly: HashMap::from([(22, 50), (7, 50), (13, 10)]),
            weekday: HashMap::from([(4, 9), (2, 9)]),
        };

        assert_eq!(patterns.peak_hour(), 7);
        assert_eq!(patterns.peak_weekday(), 2);
    }

    #[test]
    fn hour_band_labels_cover_the_day() {
        let label_for = |hour: u8| {
            let patterns = ListeningPatterns {
                hourly: HashMap::from([(hour, 1)]),
                weekday: sample_weekday(),
            };
            patterns.peak_hour_label()
        };

        assert_eq!(label_for(5), "Early Bird");
        assert_eq!(label_for(8), "Early Bird");
        assert_eq!(label_for(9), "Morning Groover");
        assert_eq!(label_for(12), "Lunch Break DJ");
        assert_eq!(label_for(14), "Afternoon Vibes");
        assert_eq!(label_for(17), "Evening Listener");
        assert_eq!(label_for(20), "Night Owl");
        assert_eq!(label_for(23), "Night Owl");
        assert_eq!(label_for(0), "Midnight Explorer");
        assert_eq!(label_for(3), "Midnight Explorer");
    }

    #[test]
    fn clock_labels_use_twelve_hour_time() {
        assert_eq!(format_hour(0), "12 AM");
        assert_eq!(format_hour(9), "9 AM");
        assert_eq!(format_hour(12), "12 PM");
        assert_eq!(format_hour(21), "9 PM");
    }
}
