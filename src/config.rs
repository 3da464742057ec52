//! Runtime configuration
//!
//! Resolved once from the command line and passed down to whichever front end runs.

use crate::error::WordSourceError;
use crate::wordlists::SourceKind;
use std::path::PathBuf;

/// Misses allowed per round when `--attempts` is not given
pub const DEFAULT_ATTEMPTS: u32 = 10;

/// Upper bound for `--attempts`; one per letter of the alphabet
pub const MAX_ATTEMPTS: u32 = 26;

/// Everything a front end needs to run rounds
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub attempts: u32,
    pub source: SourceKind,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl GameConfig {
    /// Build a configuration from raw option values
    ///
    /// A fixed `word` takes precedence over `source`. `attempts` is clamped to
    /// `1..=MAX_ATTEMPTS`.
    ///
    /// # Errors
    /// Returns an error if `source` names a word file that cannot be read.
    pub fn new(
        attempts: u32,
        source: &str,
        url: &str,
        word: Option<String>,
    ) -> Result<Self, WordSourceError> {
        let source = match word {
            Some(word) => SourceKind::Fixed(word),
            None => SourceKind::from_name(source, url)?,
        };

        Ok(Self {
            attempts: attempts.clamp(1, MAX_ATTEMPTS),
            source,
            log_file: None,
            verbose: false,
        })
    }

    #[must_use]
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DEFAULT_WORD_URL;

    #[test]
    fn fixed_word_wins_over_source() {
        let config =
            GameConfig::new(6, "remote", DEFAULT_WORD_URL, Some("otter".to_string())).unwrap();
        assert!(matches!(config.source, SourceKind::Fixed(ref w) if w == "otter"));
        assert_eq!(config.attempts, 6);
    }

    #[test]
    fn remote_source_uses_url() {
        let config = GameConfig::new(DEFAULT_ATTEMPTS, "remote", "http://example.test", None)
            .unwrap()
            .with_verbose(true);
        assert!(matches!(
            config.source,
            SourceKind::Remote(ref client) if client.url() == "http://example.test"
        ));
        assert!(config.verbose);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn unreadable_word_file_is_an_error() {
        let result = GameConfig::new(DEFAULT_ATTEMPTS, "/missing/words.txt", DEFAULT_WORD_URL, None);
        assert!(result.is_err());
    }

    #[test]
    fn attempts_are_clamped() {
        let config = GameConfig::new(u32::MAX, "embedded", DEFAULT_WORD_URL, None).unwrap();
        assert_eq!(config.attempts, MAX_ATTEMPTS);

        let config = GameConfig::new(0, "embedded", DEFAULT_WORD_URL, None).unwrap();
        assert_eq!(config.attempts, 1);
    }
}
