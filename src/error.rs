//! Error types for input that is rejected before it reaches the engine.
//!
//! Game outcomes (a solve that runs out of candidates, a strategy that
//! stops making progress) are not errors; see [`crate::bot::SolveOutcome`].

use std::path::PathBuf;
use thiserror::Error;

use crate::feedback::MAX_WORD_LENGTH;

/// Errors raised at the boundary of the engine.
#[derive(Error, Debug)]
pub enum WordleError {
    /// A word or feedback string does not have the configured length
    #[error("'{word}' has length {actual}, expected {expected}")]
    WordLength {
        word: String,
        actual: usize,
        expected: usize,
    },

    /// A word contains characters outside `a-z`
    #[error("'{0}' must contain only the letters a-z")]
    InvalidWord(String),

    /// A feedback string could not be parsed
    #[error("invalid feedback '{feedback}': {reason}")]
    InvalidFeedback { feedback: String, reason: String },

    /// Word lengths that do not fit a packed pattern
    #[error("unsupported word length {0}")]
    UnsupportedWordLength(usize),

    /// A word list was empty after loading
    #[error("word list is empty")]
    EmptyDictionary,

    /// A word list could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, WordleError>;

/// Check that `word` is `expected` lowercase ASCII letters, and that
/// `expected` fits a packed pattern.
pub fn validate_word(word: &str, expected: usize) -> Result<()> {
    if expected > MAX_WORD_LENGTH {
        return Err(WordleError::UnsupportedWordLength(expected));
    }
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(WordleError::InvalidWord(word.to_string()));
    }
    if word.len() != expected {
        return Err(WordleError::WordLength {
            word: word.to_string(),
            actual: word.len(),
            expected,
        });
    }
    Ok(())
}
