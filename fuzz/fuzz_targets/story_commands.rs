#![no_main]

use libfuzzer_sys::fuzz_target;
use replay::story::{StoryDeck, CARDS};

fuzz_target!(|data: &[u8]| {
    let mut deck = StoryDeck::new(0.5);

    for byte in data {
        match byte % 5 {
            0 => {
                let _ = deck.advance();
            }
            1 => {
                let _ = deck.retreat();
            }
            2 => {
                let _ = deck.jump_to(usize::from(*byte));
            }
            3 => {
                let _ = deck.tick(f64::from(*byte) / 16.0);
            }
            _ => {
                let _ = deck.tick(-1.0);
            }
        }

        assert!(deck.current_index() < CARDS.len());
        assert!(deck.progress() >= 0.0);
        assert!(deck.progress() <= 1.0);
    }
});
