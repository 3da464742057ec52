//! Simple interactive CLI mode
//!
//! Line-based Hangman without the TUI

use crate::core::parse_letter;
use crate::game::{GameController, GameStatus};
use crate::output::{print_guess, print_outcome, print_round, print_statistics};
use crate::wordlists::{WordSource, fetch_word_or_empty};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<S: WordSource>(source: &S, attempts: u32, runtime: &Handle) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play(source, attempts, runtime, &mut stdin.lock(), &mut stdout)
}

fn play<S, R, W>(
    source: &S,
    attempts: u32,
    runtime: &Handle,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║          Hangman - Line Mode          ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(out, "Type one or more letters and press Enter.")?;
    writeln!(out, "Commands: 'new' for a new word, 'quit' to exit\n")?;

    let mut game = GameController::new(attempts);

    'rounds: loop {
        load_round(&mut game, source, runtime);

        loop {
            match game.status() {
                GameStatus::Loading => continue 'rounds,
                GameStatus::Unavailable => {
                    print_outcome(out, &game)?;
                    if ask_yes(input, out, "Try again? (yes/no)")? {
                        continue 'rounds;
                    }
                    break 'rounds;
                }
                GameStatus::Won | GameStatus::Lost => {
                    print_outcome(out, &game)?;
                    print_statistics(out, game.stats())?;
                    if ask_yes(input, out, "Play again? (yes/no)")? {
                        continue 'rounds;
                    }
                    break 'rounds;
                }
                GameStatus::Playing => {
                    if let Some(round) = game.round() {
                        print_round(out, round)?;
                    }

                    let Some(line) = read_line(input, out, "Guess")? else {
                        break 'rounds;
                    };

                    match line.to_lowercase().as_str() {
                        "quit" | "exit" => break 'rounds,
                        "new" => continue 'rounds,
                        text => guess_letters(&mut game, text, out)?,
                    }
                }
            }
        }
    }

    writeln!(out, "\nThanks for playing!\n")?;
    Ok(())
}

/// Fetch the next word behind a spinner and hand it to the controller
fn load_round<S: WordSource>(game: &mut GameController, source: &S, runtime: &Handle) {
    let ticket = game.begin_round();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Fetching a word...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let word = runtime.block_on(fetch_word_or_empty(source));
    spinner.finish_and_clear();

    game.finish_loading(ticket, &word);
}

/// Apply every letter in `text`, stopping once the round is over
fn guess_letters<W: Write>(game: &mut GameController, text: &str, out: &mut W) -> Result<()> {
    let mut any = false;

    for letter in text.chars().filter_map(parse_letter) {
        any = true;
        if let Some(outcome) = game.guess(letter) {
            print_guess(out, letter, outcome)?;
        }
        if game.status().is_terminal() {
            break;
        }
    }

    if !any {
        writeln!(out, "Letters only, please.")?;
    }
    Ok(())
}

fn ask_yes<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<bool> {
    Ok(read_line(input, out, prompt)?
        .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y")))
}

/// Read one trimmed line after a prompt; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
