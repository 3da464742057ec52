//! Tracing setup
//!
//! The TUI owns the terminal, so it only logs when a file is given. Line mode falls
//! back to stderr.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter
pub const LOG_ENV: &str = "HANGMAN_LOG";

/// Where log lines go when no file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Discard,
    Stderr,
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("hangman={default_level}")))
}

/// Install the global subscriber
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init(log_file: Option<&Path>, verbose: bool, fallback: Fallback) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(false);

    match (log_file, fallback) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        (None, Fallback::Stderr) => builder.with_writer(std::io::stderr).init(),
        (None, Fallback::Discard) => builder.with_writer(std::io::sink).init(),
    }

    Ok(())
}
