//! A single Hangman round
//!
//! A Round owns the target word, the reveal state of every slot and the attempts counter.
//! Win and loss are derived from that state on every call, never stored.

use super::validation::reveal_letter;
use rustc_hash::FxHashSet;

/// Result of applying one guess to a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word; `revealed` slots now show it
    Hit { revealed: usize },
    /// The letter does not occur; `charged` is true if an attempt was spent
    Miss { charged: bool },
}

impl GuessOutcome {
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit { .. })
    }
}

/// How a letter fared in the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Untried,
    Hit,
    Miss,
}

/// One play-through from word selection to win or loss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    target: String,
    slots: Vec<Option<char>>,
    attempts_remaining: u32,
    max_attempts: u32,
    guessed: FxHashSet<char>,
}

impl Round {
    /// Start a round for `word` with `max_attempts` misses allowed
    ///
    /// The word is trimmed and lowercased. Every slot starts hidden.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Round;
    ///
    /// let round = Round::new("Cat", 6);
    /// assert_eq!(round.target(), "cat");
    /// assert_eq!(round.slots(), &[None::<char>; 3]);
    /// assert_eq!(round.attempts_remaining(), 6);
    /// ```
    #[must_use]
    pub fn new(word: &str, max_attempts: u32) -> Self {
        let target = word.trim().to_lowercase();
        let slots = vec![None; target.chars().count()];

        Self {
            target,
            slots,
            attempts_remaining: max_attempts,
            max_attempts,
            guessed: FxHashSet::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Every slot revealed (an empty word is never won)
    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(Option::is_some)
    }

    /// No attempts left
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.attempts_remaining == 0
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Apply a guessed letter
    ///
    /// A hit reveals every matching slot and never costs an attempt. A miss costs one
    /// attempt, but only while the round is still open and attempts remain.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_lowercase();
        let was_terminal = self.is_terminal();
        self.guessed.insert(letter);

        if reveal_letter(&self.target, &mut self.slots, letter) {
            let revealed = self.target.chars().filter(|&c| c == letter).count();
            return GuessOutcome::Hit { revealed };
        }

        let charged = !was_terminal && self.attempts_remaining > 0;
        if charged {
            self.attempts_remaining -= 1;
        }
        GuessOutcome::Miss { charged }
    }

    /// Whether `letter` was tried this round, and with what result
    #[must_use]
    pub fn letter_state(&self, letter: char) -> LetterState {
        let letter = letter.to_ascii_lowercase();
        if !self.guessed.contains(&letter) {
            LetterState::Untried
        } else if self.target.contains(letter) {
            LetterState::Hit
        } else {
            LetterState::Miss
        }
    }

    /// Number of distinct letters tried so far
    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.guessed.len()
    }
}
