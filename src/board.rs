//! The guess history of one game.

use crate::error::{validate_word, Result, WordleError};
use crate::feedback::{Pattern, MAX_WORD_LENGTH};
use crate::filter;
use crate::query::Query;

/// One committed guess and the feedback it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEntry {
    pub guess: String,
    pub pattern: Pattern,
}

/// A Wordle board: the guesses made so far and how each was scored.
///
/// Entries are only ever appended or popped from the end, so callers can
/// push a hypothetical guess, look at the result and pop it again.
/// A board belongs to a single solve; parallel work clones it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    n: usize,
    entries: Vec<GuessEntry>,
}

impl Board {
    pub fn new(word_length: usize) -> Self {
        Self {
            n: word_length,
            entries: Vec::new(),
        }
    }

    pub fn word_length(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[GuessEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&GuessEntry> {
        self.entries.last()
    }

    pub fn guesses(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.guess.as_str())
    }

    /// Append a guess with the pattern it was scored with.
    pub fn push(&mut self, guess: impl Into<String>, pattern: Pattern) {
        let guess = guess.into();
        debug_assert_eq!(guess.len(), self.n);
        debug_assert_eq!(pattern.len(), self.n);
        self.entries.push(GuessEntry { guess, pattern });
    }

    /// Validate a guess and its dotted feedback string (e.g. `"slate"`,
    /// `"sL..E"`) and append them.
    pub fn push_scored(&mut self, guess: &str, feedback: &str) -> Result<()> {
        if self.n > MAX_WORD_LENGTH {
            return Err(WordleError::UnsupportedWordLength(self.n));
        }
        let guess = guess.to_ascii_lowercase();
        validate_word(&guess, self.n)?;
        let pattern = Pattern::parse(&guess, feedback)?;
        self.push(guess, pattern);
        Ok(())
    }

    /// Remove the most recent guess.
    pub fn pop(&mut self) -> Option<GuessEntry> {
        self.entries.pop()
    }

    /// Compile the current history. The query must be rebuilt after any
    /// push or pop.
    pub fn query(&self) -> Query {
        Query::compile(self)
    }

    /// Words from `words` that are consistent with every guess on the board.
    pub fn filter(&self, words: &[String]) -> Vec<String> {
        filter::filter_by_query(&self.query(), words)
    }

    /// Whether the last guess was answered with all-correct.
    pub fn is_solved(&self) -> bool {
        self.last().is_some_and(|e| e.pattern.is_solved())
    }
}
