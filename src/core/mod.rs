//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and deterministic.

pub mod alphabet;
mod attempts;
mod round;
pub mod validation;

pub use alphabet::{ALPHABET, parse_letter};
pub use attempts::AttemptsBand;
pub use round::{GuessOutcome, LetterState, Round};
