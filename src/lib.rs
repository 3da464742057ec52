//! Hangman
//!
//! A terminal Hangman game. Each round fetches one word from a remote word-list service
//! (or a local word list), then the player guesses letters until every slot is revealed
//! or the attempts run out.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::game::{GameController, GameStatus};
//!
//! let mut game = GameController::new(6);
//! let ticket = game.begin_round();
//! game.finish_loading(ticket, "cat");
//!
//! for letter in ['c', 'a', 't'] {
//!     game.guess(letter);
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Round orchestration
pub mod game;

// Word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Ambient concerns
pub mod config;
pub mod error;
pub mod logging;
