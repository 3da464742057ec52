//! Formatting utilities for terminal output

use crate::core::Round;

/// Format the revealed word with `_` for hidden slots, uppercase, space separated
#[must_use]
pub fn slots_to_string(slots: &[Option<char>]) -> String {
    slots
        .iter()
        .map(|slot| slot.map_or('_', |c| c.to_ascii_uppercase()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value as usize * width / max as usize).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Widest the attempts bar gets; beyond this cells stand for several attempts
pub const MAX_BAR_WIDTH: usize = 26;

/// Remaining attempts as a bar, one cell per attempt up to [`MAX_BAR_WIDTH`]
#[must_use]
pub fn attempts_bar(round: &Round) -> String {
    let max = round.max_attempts();
    let width = (max as usize).min(MAX_BAR_WIDTH);
    create_progress_bar(round.attempts_remaining(), max, width)
}

/// Letters tried so far that are not in the word, in alphabetical order
#[must_use]
pub fn missed_letters(round: &Round) -> String {
    use crate::core::{ALPHABET, LetterState};

    ALPHABET
        .iter()
        .filter(|&&c| round.letter_state(c) == LetterState::Miss)
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_hidden() {
        assert_eq!(slots_to_string(&[None, None, None]), "_ _ _");
    }

    #[test]
    fn slots_partially_revealed() {
        assert_eq!(slots_to_string(&[Some('c'), None, Some('t')]), "C _ T");
    }

    #[test]
    fn slots_empty() {
        assert_eq!(slots_to_string(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0, 100, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100, 100, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50, 100, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0, 0, 3), "░░░");
    }

    #[test]
    fn attempts_bar_tracks_misses() {
        let mut round = Round::new("cat", 4);
        round.guess('z');
        assert_eq!(attempts_bar(&round), "███░");
    }

    #[test]
    fn missed_letters_sorted() {
        let mut round = Round::new("cat", 6);
        round.guess('z');
        round.guess('c');
        round.guess('b');
        assert_eq!(missed_letters(&round), "B Z");
    }

    #[test]
    fn attempts_bar_width_is_capped() {
        let mut round = Round::new("cat", 200_000);
        assert_eq!(attempts_bar(&round).chars().count(), MAX_BAR_WIDTH);

        round.guess('z');
        let bar = attempts_bar(&round);
        assert_eq!(bar.chars().count(), MAX_BAR_WIDTH);
        assert!(bar.starts_with('█'));
    }
}
