//! Hangman - CLI
//!
//! Terminal Hangman with TUI and line modes. Words come from a remote word-list service
//! unless a local source is chosen.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    config::{DEFAULT_ATTEMPTS, GameConfig, MAX_ATTEMPTS},
    interactive::{App, run_tui},
    logging::{self, Fallback},
    wordlists::DEFAULT_WORD_URL,
};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before the attempts run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Misses allowed per round (1-26)
    #[arg(short, long, global = true, default_value_t = DEFAULT_ATTEMPTS,
          value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ATTEMPTS)))]
    attempts: u32,

    /// Word source: 'remote' (default), 'embedded', or path to a word file
    #[arg(short, long, global = true, default_value = "remote")]
    source: String,

    /// Word-list service queried by the remote source
    #[arg(short, long, global = true, default_value = DEFAULT_WORD_URL)]
    url: String,

    /// Play this word every round instead of fetching one
    #[arg(short, long, global = true)]
    word: Option<String>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let config = GameConfig::new(cli.attempts, &cli.source, &cli.url, cli.word)
        .context("Failed to set up word source")?
        .with_log_file(cli.log_file)
        .with_verbose(cli.verbose);

    let fallback = match command {
        Commands::Play => Fallback::Discard,
        Commands::Simple => Fallback::Stderr,
    };
    logging::init(config.log_file.as_deref(), config.verbose, fallback)?;

    let runtime = Runtime::new().context("Failed to start async runtime")?;
    info!(attempts = config.attempts, source = %cli.source, "starting");

    match command {
        Commands::Play => run_play_command(config, &runtime),
        Commands::Simple => run_simple(&config.source, config.attempts, runtime.handle()),
    }
}

fn run_play_command(config: GameConfig, runtime: &Runtime) -> Result<()> {
    let app = App::new(config.source, config.attempts, runtime.handle().clone());
    run_tui(app)
}
