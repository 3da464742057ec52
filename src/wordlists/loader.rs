//! Local word pools
//!
//! Provides functions to load word lists from files or use the embedded constant,
//! and a pool that hands out a random word per round.

use super::WordSource;
use crate::error::WordSourceError;
use rand::prelude::IndexedRandom;
use std::fs;
use std::path::Path;

/// A local list of candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a random word from the pool
    ///
    /// # Errors
    /// Returns `WordSourceError::EmptyList` if the pool holds no words.
    pub fn pick(&self) -> Result<String, WordSourceError> {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(WordSourceError::EmptyList)
    }
}

impl WordSource for WordPool {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        self.pick()
    }
}

/// Load words from a file, one per line
///
/// Blank lines, `#` comments and lines with non-alphabetic characters are skipped.
///
/// # Errors
///
/// Returns `WordSourceError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let pool = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", pool.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordPool, WordSourceError> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

fn words_from_lines(content: &str) -> WordPool {
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| line.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_lowercase)
        .collect();

    WordPool::new(words)
}

/// Convert an embedded string slice to a word pool
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::EMBEDDED_WORDS;
///
/// let pool = words_from_slice(EMBEDDED_WORDS);
/// assert_eq!(pool.len(), EMBEDDED_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordPool {
    WordPool::new(slice.iter().map(|&s| s.to_lowercase()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_all() {
        let pool = words_from_slice(&["crane", "Slate", "irate"]);
        assert_eq!(pool.len(), 3);
        assert_eq!(
            pool,
            WordPool::new(vec!["crane".into(), "slate".into(), "irate".into()])
        );
    }

    #[test]
    fn words_from_lines_skips_noise() {
        let pool = words_from_lines("# header\napple\n\n  Pear \nice-cream\nx1\nplum\n");
        assert_eq!(
            pool,
            WordPool::new(vec!["apple".into(), "pear".into(), "plum".into()])
        );
    }

    #[test]
    fn pick_comes_from_pool() {
        let pool = words_from_slice(&["alpha", "beta", "gamma"]);
        for _ in 0..20 {
            let word = pool.pick().unwrap();
            assert!(["alpha", "beta", "gamma"].contains(&word.as_str()));
        }
    }

    #[test]
    fn pick_from_empty_pool_fails() {
        let pool = words_from_slice(&[]);
        assert!(pool.is_empty());
        assert!(matches!(pool.pick(), Err(WordSourceError::EmptyList)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(WordSourceError::Io(_))));
    }

    #[tokio::test]
    async fn pool_serves_as_word_source() {
        let pool = words_from_slice(&["otter"]);
        assert_eq!(pool.fetch_word().await.unwrap(), "otter");
    }
}
