//! Error types

use thiserror::Error;

/// Failures while obtaining a word for a new round
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("word request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("word list response is not a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("word list is empty")]
    EmptyList,

    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}
