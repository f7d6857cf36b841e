use crate::palette::Rgb;
use crate::stats::GenreSummary;
use std::cmp::Ordering;

pub const MOODS: [Mood; 8] = [
    Mood::Energetic,
    Mood::Melancholic,
    Mood::Chill,
    Mood::Intense,
    Mood::Dreamy,
    Mood::Uplifting,
    Mood::Bold,
    Mood::Introspective,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Energetic,
    Melancholic,
    Chill,
    Intense,
    Dreamy,
    Uplifting,
    Bold,
    Introspective,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Self::Energetic => "Energetic",
            Self::Melancholic => "Melancholic",
            Self::Chill => "Chill",
            Self::Intense => "Intense",
            Self::Dreamy => "Dreamy",
            Self::Uplifting => "Uplifting",
            Self::Bold => "Bold",
            Self::Introspective => "Introspective",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Self::Energetic => [1.0, 0.4, 0.2],
            Self::Melancholic => [0.4, 0.4, 0.8],
            Self::Chill => [0.3, 0.8, 0.7],
            Self::Intense => [0.8, 0.1, 0.3],
            Self::Dreamy => [0.7, 0.5, 0.9],
            Self::Uplifting => [1.0, 0.8, 0.2],
            Self::Bold => [0.9, 0.2, 0.5],
            Self::Introspective => [0.3, 0.5, 0.7],
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Energetic => "lightning.bolt",
            Self::Melancholic => "cloud.rain",
            Self::Chill => "leaf",
            Self::Intense => "flame",
            Self::Dreamy => "moon.stars",
            Self::Uplifting => "sun.max",
            Self::Bold => "star.fill",
            Self::Introspective => "heart",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Energetic => 0,
            Self::Melancholic => 1,
            Self::Chill => 2,
            Self::Intense => 3,
            Self::Dreamy => 4,
            Self::Uplifting => 5,
            Self::Bold => 6,
            Self::Introspective => 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioAura {
    pub primary: Mood,
    pub secondary: Mood,
    pub description: String,
}

impl AudioAura {
    pub fn gradient(&self) -> [Rgb; 3] {
        let [r, g, b] = self.primary.color();
        [
            self.primary.color(),
            self.secondary.color(),
            [r * 0.6, g * 0.6, b * 0.6],
        ]
    }
}

const GENRE_RULES: &[(&[&str], &[Mood])] = &[
    (&["pop"], &[Mood::Uplifting, Mood::Energetic]),
    (&["hip", "rap"], &[Mood::Bold, Mood::Energetic]),
    (&["rock"], &[Mood::Intense, Mood::Bold]),
    (&["r&b", "soul"], &[Mood::Chill, Mood::Introspective]),
    (&["electronic", "dance"], &[Mood::Energetic, Mood::Bold]),
    (&["jazz"], &[Mood::Chill, Mood::Dreamy]),
    (&["classical"], &[Mood::Introspective, Mood::Melancholic]),
    (&["indie", "alternative"], &[Mood::Dreamy, Mood::Introspective]),
    (&["metal"], &[Mood::Intense, Mood::Bold]),
    (&["country"], &[Mood::Uplifting, Mood::Melancholic]),
];

pub fn generate(genres: &[GenreSummary]) -> AudioAura {
    let mut scores = [0.0_f64; MOODS.len()];
    let mut scored = [false; MOODS.len()];

    for genre in genres {
        for mood in moods_for_genre(&genre.name) {
            scores[mood.index()] += genre.percentage;
            scored[mood.index()] = true;
        }
    }

    let mut ranked: Vec<Mood> = MOODS
        .iter()
        .copied()
        .filter(|mood| scored[mood.index()])
        .collect();
    ranked.sort_by(|a, b| {
        scores[b.index()]
            .partial_cmp(&scores[a.index()])
            .unwrap_or(Ordering::Equal)
    });

    let primary = ranked.first().copied().unwrap_or(Mood::Chill);
    let secondary = ranked.get(1).copied().unwrap_or(Mood::Dreamy);

    AudioAura {
        primary,
        secondary,
        description: describe(primary, secondary),
    }
}

pub fn moods_for_genre(name: &str) -> &'static [Mood] {
    let lowered = name.to_lowercase();
    for (keywords, moods) in GENRE_RULES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return moods;
        }
    }
    &[Mood::Chill]
}

fn describe(primary: Mood, secondary: Mood) -> String {
    let curated = match (primary, secondary) {
        (Mood::Energetic, Mood::Bold) => {
            "Your music radiates unstoppable energy. You're the life of the party, always ready to turn up the volume and seize the moment."
        }
        (Mood::Chill, Mood::Dreamy) => {
            "You find peace in the ethereal. Your playlist is a sanctuary of calm, perfect for late-night contemplation and peaceful moments."
        }
        (Mood::Intense, Mood::Bold) => {
            "You don't just listen to music—you feel it in your bones. Your taste is fierce, unapologetic, and impossible to ignore."
        }
        (Mood::Uplifting, Mood::Energetic) => {
            "Sunshine in audio form. Your music choices spread positivity and keep the good vibes flowing all year long."
        }
        (Mood::Introspective, Mood::Melancholic) => {
            "A thoughtful soul with depth. Your music reflects your rich inner world and appreciation for emotional complexity."
        }
        (Mood::Dreamy, Mood::Introspective) => {
            "You're a daydreamer with impeccable taste. Your playlist paints pictures of starlit skies and quiet moments of wonder."
        }
        (Mood::Bold, Mood::Intense) => {
            "Fearless and powerful. Your music hits hard and makes a statement—just like you."
        }
        _ => {
            return format!(
                "Your unique blend of {} and {} vibes creates a sound that's distinctly you.",
                primary.label().to_lowercase(),
                secondary.label().to_lowercase()
            );
        }
    };
    curated.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre(name: &str, percentage: f64) -> GenreSummary {
        GenreSummary {
            rank: 0,
            name: name.to_string(),
            play_count: 0,
            percentage,
        }
    }

    #[test]
    fn pop_and_hip_hop_profile_reads_energetic_uplifting() {
        let aura = generate(&[genre("Pop", 60.0), genre("Hip-Hop", 40.0)]);

        assert_eq!(aura.primary, Mood::Energetic);
        assert_eq!(aura.secondary, Mood::Uplifting);
    }

    #[test]
    fn empty_profile_defaults_to_chill_dreamy() {
        let aura = generate(&[]);

        assert_eq!(aura.primary, Mood::Chill);
        assert_eq!(aura.secondary, Mood::Dreamy);
        assert!(aura.description.contains("sanctuary of calm"));
    }

    #[test]
    fn single_scored_mood_defaults_secondary_to_dreamy() {
        let aura = generate(&[genre("whale sounds", 100.0)]);

        assert_eq!(aura.primary, Mood::Chill);
        assert_eq!(aura.secondary, Mood::Dreamy);
    }

    #[test]
    fn first_matching_keyword_rule_wins() {
        assert_eq!(
            moods_for_genre("Pop Rock"),
            &[Mood::Uplifting, Mood::Energetic]
        );
        assert_eq!(moods_for_genre("Rap Metal"), &[Mood::Bold, Mood::Energetic]);
        assert_eq!(moods_for_genre("Polka"), &[Mood::Chill]);
    }

    #[test]
    fn keyword_matching_is_plain_substring() {
        assert_eq!(moods_for_genre("Trip-Hop"), &[Mood::Chill]);
        assert_eq!(moods_for_genre("Hip-Hop"), &[Mood::Bold, Mood::Energetic]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            moods_for_genre("CLASSICAL"),
            &[Mood::Introspective, Mood::Melancholic]
        );
    }

    #[test]
    fn score_ties_resolve_by_mood_list_order() {
        let aura = generate(&[genre("Jazz", 100.0)]);

        assert_eq!(aura.primary, Mood::Chill);
        assert_eq!(aura.secondary, Mood::Dreamy);
    }

    #[test]
    fn uncurated_pair_gets_interpolated_description() {
        let aura = generate(&[genre("Country", 80.0), genre("Pop", 30.0)]);

        assert_eq!(aura.primary, Mood::Uplifting);
        assert_eq!(aura.secondary, Mood::Melancholic);
        assert_eq!(
            aura.description,
            "Your unique blend of uplifting and melancholic vibes creates a sound that's distinctly you."
        );
    }

    #[test]
    fn gradient_dims_the_primary_for_the_third_stop() {
        let aura = generate(&[genre("Pop", 60.0), genre("Hip-Hop", 40.0)]);
        let gradient = aura.gradient();

        assert_eq!(gradient[0], Mood::Energetic.color());
        assert_eq!(gradient[1], Mood::Uplifting.color());
        assert!(gradient[2][0] < gradient[0][0]);
    }
}
