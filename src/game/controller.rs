//! Game state controller
//!
//! Owns the current round and decides which inputs are accepted in which phase.
//! Win and loss are read off the round on demand.

use crate::core::{GuessOutcome, Round, parse_letter};
use tracing::{debug, info, warn};

/// Stored phase of the controller
///
/// `Won` and `Lost` are not phases: they are derived from the round (see [`GameStatus`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Loading,
    Playing,
    Unavailable,
}

/// What the player currently sees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the word source
    Loading,
    /// The word source gave nothing usable
    Unavailable,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Proof of which round a pending fetch belongs to
///
/// Handed out by [`GameController::begin_round`]; a fetched word is only accepted
/// with the ticket of the most recent round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTicket(u64);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    fn record(&mut self, won: bool) {
        self.rounds_played += 1;
        if won {
            self.rounds_won += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

/// Drives rounds from loading to win or loss
#[derive(Debug)]
pub struct GameController {
    max_attempts: u32,
    phase: Phase,
    round: Option<Round>,
    generation: u64,
    pressed_key: Option<char>,
    stats: Statistics,
}

impl GameController {
    /// Create a controller; no round exists until [`begin_round`](Self::begin_round)
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            phase: Phase::Loading,
            round: None,
            generation: 0,
            pressed_key: None,
            stats: Statistics::default(),
        }
    }

    /// Enter the loading phase for a new round
    ///
    /// The previous round is dropped and any fetch still in flight for it is superseded.
    pub fn begin_round(&mut self) -> RoundTicket {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.round = None;
        self.pressed_key = None;
        info!(generation = self.generation, "starting round");
        RoundTicket(self.generation)
    }

    /// Deliver the fetched word for the round identified by `ticket`
    ///
    /// Returns `false` if the ticket belongs to a superseded round, in which case nothing
    /// changes. An empty word, or one with characters no key can guess, leaves the
    /// controller in [`GameStatus::Unavailable`].
    pub fn finish_loading(&mut self, ticket: RoundTicket, word: &str) -> bool {
        if ticket.0 != self.generation {
            warn!(
                stale = ticket.0,
                current = self.generation,
                "discarding word for superseded round"
            );
            return false;
        }
        if self.phase != Phase::Loading {
            return false;
        }

        let word = word.trim();
        if word.is_empty() {
            warn!("no word available");
            self.phase = Phase::Unavailable;
            return true;
        }
        if !word.chars().all(|c| parse_letter(c).is_some()) {
            warn!(word, "word has characters that cannot be guessed");
            self.phase = Phase::Unavailable;
            return true;
        }

        self.round = Some(Round::new(word, self.max_attempts));
        self.phase = Phase::Playing;
        info!(letters = word.chars().count(), "round ready");
        true
    }

    /// Apply a guessed letter to the current round
    ///
    /// Ignored (returns `None`) unless a round is being played and is not yet over.
    pub fn guess(&mut self, letter: char) -> Option<GuessOutcome> {
        if self.phase != Phase::Playing {
            return None;
        }
        let round = self.round.as_mut()?;
        if round.is_terminal() {
            return None;
        }

        let outcome = round.guess(letter);
        debug!(
            letter = %letter.to_ascii_lowercase(),
            ?outcome,
            attempts = round.attempts_remaining(),
            "guess"
        );

        if round.is_terminal() {
            let won = round.is_won();
            self.stats.record(won);
            info!(won, word = round.target(), "round over");
        }
        Some(outcome)
    }

    /// Derived status; never cached
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match (self.phase, &self.round) {
            (Phase::Loading, _) => GameStatus::Loading,
            (Phase::Unavailable, _) | (Phase::Playing, None) => GameStatus::Unavailable,
            (Phase::Playing, Some(round)) if round.is_won() => GameStatus::Won,
            (Phase::Playing, Some(round)) if round.is_lost() => GameStatus::Lost,
            (Phase::Playing, Some(_)) => GameStatus::Playing,
        }
    }

    /// A restart is offered once the round is over or no word could be fetched
    #[must_use]
    pub fn can_restart(&self) -> bool {
        let status = self.status();
        status.is_terminal() || status == GameStatus::Unavailable
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn pressed_key(&self) -> Option<char> {
        self.pressed_key
    }

    pub fn press_key(&mut self, letter: char) {
        self.pressed_key = Some(letter.to_ascii_lowercase());
    }

    pub fn release_key(&mut self) {
        self.pressed_key = None;
    }
}
