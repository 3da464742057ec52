//! Display functions for line mode

use super::formatters::{attempts_bar, missed_letters, slots_to_string};
use crate::core::{AttemptsBand, GuessOutcome, Round};
use crate::game::{GameController, GameStatus, Statistics};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

fn colorize_attempts(text: String, band: AttemptsBand) -> ColoredString {
    match band {
        AttemptsBand::Comfortable => text.green(),
        AttemptsBand::Warning => text.yellow(),
        AttemptsBand::Critical => text.red(),
    }
}

/// Print the revealed word, the attempts counter and the misses so far
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_round<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    let remaining = round.attempts_remaining();
    let band = AttemptsBand::from_remaining(remaining);

    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(out, "  Word:      {}", slots_to_string(round.slots()).bold())?;
    writeln!(
        out,
        "  Attempts:  {} {}",
        colorize_attempts(remaining.to_string(), band).bold(),
        colorize_attempts(attempts_bar(round), band)
    )?;

    let missed = missed_letters(round);
    if !missed.is_empty() {
        writeln!(out, "  Missed:    {}", missed.bright_black())?;
    }
    writeln!(out, "{}", "─".repeat(40).cyan())
}

/// Print the effect of one guess
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_guess<W: Write>(out: &mut W, letter: char, outcome: GuessOutcome) -> io::Result<()> {
    let shown = letter.to_ascii_uppercase();
    match outcome {
        GuessOutcome::Hit { revealed } => {
            writeln!(out, "{}", format!("✓ {shown}: {revealed} revealed").green())
        }
        GuessOutcome::Miss { .. } => writeln!(out, "{}", format!("✗ {shown}: not in the word").red()),
    }
}

/// Print the end-of-round banner
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_outcome<W: Write>(out: &mut W, game: &GameController) -> io::Result<()> {
    match (game.status(), game.round()) {
        (GameStatus::Won, Some(round)) => {
            writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
            writeln!(out, "  {}", "You win!".bright_green().bold())?;
            writeln!(out, "  The word was {}", round.target().to_uppercase().bold())?;
            writeln!(out, "{}", "═".repeat(40).bright_cyan())
        }
        (GameStatus::Lost, Some(round)) => {
            writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
            writeln!(out, "  {}", round.target().to_uppercase().bright_yellow().bold())?;
            writeln!(out, "  {}", "Better luck next time!".red().bold())?;
            writeln!(out, "{}", "═".repeat(40).bright_cyan())
        }
        _ => writeln!(out, "\n{}", "No word available.".red().bold()),
    }
}

/// Print session statistics
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "  Rounds: {} | Won: {} ({:.0}%) | Streak: {} (best {})",
        stats.rounds_played,
        stats.rounds_won,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    )
}
