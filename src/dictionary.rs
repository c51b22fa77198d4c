//! Word list loading.
//!
//! A word list is plain text with one word per line. Words are lowercased
//! and blank lines are skipped; anything else that is not `n` letters is
//! rejected.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{validate_word, Result, WordleError};
use crate::feedback::MAX_WORD_LENGTH;

/// Parse a word list from text.
pub fn parse_word_list(text: &str, n: usize) -> Result<Vec<String>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let word = line.to_lowercase();
            validate_word(&word, n)?;
            Ok(word)
        })
        .collect()
}

/// Read a word list from a file. An empty list is an error.
pub fn load_word_list(path: impl AsRef<Path>, n: usize) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| WordleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&text, n)?;
    if words.is_empty() {
        return Err(WordleError::EmptyDictionary);
    }
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Merge a solution list into a guessing list: every solution is also a
/// legal guess. Order is kept and duplicates are dropped.
pub fn merge_vocabulary(solutions: &[String], guesses: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    guesses
        .into_iter()
        .chain(solutions.iter().cloned())
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Load the solution list and the guessing list. Without a guessing list
/// the solutions are used for both.
pub fn load_dictionaries(
    solutions_path: impl AsRef<Path>,
    guesses_path: Option<&Path>,
    n: usize,
) -> Result<(Vec<String>, Vec<String>)> {
    if n > MAX_WORD_LENGTH {
        return Err(WordleError::UnsupportedWordLength(n));
    }
    let solutions = load_word_list(solutions_path, n)?;
    let guesses = match guesses_path {
        Some(path) => merge_vocabulary(&solutions, load_word_list(path, n)?),
        None => merge_vocabulary(&solutions, Vec::new()),
    };
    Ok((solutions, guesses))
}
