//! Word sources for Hangman
//!
//! A round starts from one word obtained from a [`WordSource`]: the remote word-list
//! service by default, or a local pool (embedded or loaded from a file).

mod embedded;
pub mod loader;
pub mod remote;

pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};
pub use loader::WordPool;
pub use remote::{DEFAULT_WORD_URL, RemoteWordClient};

use crate::error::WordSourceError;
use std::future::Future;
use tracing::error;

/// Something that can produce the target word for a new round
pub trait WordSource: Send + Sync {
    /// Obtain one word, lowercase
    fn fetch_word(&self) -> impl Future<Output = Result<String, WordSourceError>> + Send;
}

/// Enum wrapper for all word sources
///
/// Allows runtime selection of the source while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum SourceKind {
    /// Remote word-list service (default)
    Remote(RemoteWordClient),
    /// Local pool, embedded or loaded from a file
    Pool(WordPool),
    /// The same word every round
    Fixed(String),
}

impl WordSource for SourceKind {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        match self {
            Self::Remote(client) => client.fetch_word().await,
            Self::Pool(pool) => pool.fetch_word().await,
            Self::Fixed(word) => Ok(word.trim().to_lowercase()),
        }
    }
}

impl SourceKind {
    /// Create a source from its name
    ///
    /// Supported names: "remote" (queries `url`), "embedded". Anything else is treated
    /// as a path to a word file.
    ///
    /// # Errors
    /// Returns `WordSourceError::Io` if a word file cannot be read.
    pub fn from_name(name: &str, url: &str) -> Result<Self, WordSourceError> {
        match name {
            "remote" => Ok(Self::Remote(RemoteWordClient::new(url))),
            "embedded" => Ok(Self::Pool(loader::words_from_slice(EMBEDDED_WORDS))),
            path => Ok(Self::Pool(loader::load_from_file(path)?)),
        }
    }
}

/// Fetch a word, degrading any failure to an empty string
///
/// The error is logged. Callers must treat `""` as "no word available".
pub async fn fetch_word_or_empty<S: WordSource>(source: &S) -> String {
    match source.fetch_word().await {
        Ok(word) => word,
        Err(e) => {
            error!(error = %e, "failed to fetch word");
            String::new()
        }
    }
}
