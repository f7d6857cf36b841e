pub const CARDS: [StoryCard; 8] = [
    StoryCard::Welcome,
    StoryCard::TotalTime,
    StoryCard::TopArtist,
    StoryCard::TopSongs,
    StoryCard::TopGenres,
    StoryCard::Patterns,
    StoryCard::AudioAura,
    StoryCard::Summary,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryCard {
    Welcome,
    TotalTime,
    TopArtist,
    TopSongs,
    TopGenres,
    Patterns,
    AudioAura,
    Summary,
}

impl StoryCard {
    pub fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::TotalTime => "Minutes Listened",
            Self::TopArtist => "Top Artist",
            Self::TopSongs => "Top Songs",
            Self::TopGenres => "Top Genres",
            Self::Patterns => "Listening Patterns",
            Self::AudioAura => "Audio Aura",
            Self::Summary => "Your Year",
        }
    }
}

const MIN_AUTO_ADVANCE_SECONDS: f64 = 0.1;

#[derive(Debug)]
pub struct StoryDeck {
    current: usize,
    progress: f64,
    auto_advance_seconds: f64,
}

impl StoryDeck {
    pub fn new(auto_advance_seconds: f64) -> Self {
        Self {
            current: 0,
            progress: 0.0,
            auto_advance_seconds: auto_advance_seconds.max(MIN_AUTO_ADVANCE_SECONDS),
        }
    }

    pub fn card_count(&self) -> usize {
        CARDS.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_card(&self) -> StoryCard {
        CARDS[self.current]
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn at_end(&self) -> bool {
        self.current == CARDS.len() - 1
    }

    pub fn advance(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.current += 1;
        self.progress = 0.0;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.progress = 0.0;
        true
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= CARDS.len() {
            return false;
        }
        self.current = index;
        self.progress = 0.0;
        true
    }

    pub fn tick(&mut self, elapsed_seconds: f64) -> bool {
        if elapsed_seconds <= 0.0 {
            return false;
        }
        self.progress += elapsed_seconds / self.auto_advance_seconds;
        if self.progress < 1.0 {
            return false;
        }
        if self.advance() {
            return true;
        }
        self.progress = 1.0;
        false
    }
}
