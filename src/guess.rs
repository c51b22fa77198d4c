//! Ranked guesses as returned by strategies.

use std::collections::HashSet;

/// A guess and the score a strategy gave it. Whether a higher or a lower
/// score is better depends on the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    pub word: String,
    pub score: f64,
}

impl ScoredGuess {
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

/// Keep the first occurrence of each word, preserving order.
pub fn remove_duplicate_guesses(guesses: &mut Vec<ScoredGuess>) {
    let mut seen = HashSet::new();
    guesses.retain(|g| seen.insert(g.word.clone()));
}

/// Stable sort, highest score first.
pub fn sort_descending(guesses: &mut [ScoredGuess]) {
    guesses.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Stable sort, lowest score first.
pub fn sort_ascending(guesses: &mut [ScoredGuess]) {
    guesses.sort_by(|a, b| a.score.total_cmp(&b.score));
}

/// Index of the first highest score.
pub(crate) fn first_max(scores: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &score) in scores.iter().enumerate() {
        if best.map_or(true, |b| score > scores[b]) {
            best = Some(i);
        }
    }
    best
}

/// Index of the first lowest score.
pub(crate) fn first_min(scores: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &score) in scores.iter().enumerate() {
        if best.map_or(true, |b| score < scores[b]) {
            best = Some(i);
        }
    }
    best
}

/// Live candidates followed by the guessing vocabulary. Strategies break
/// ties by first position, so a candidate beats an equally scored outside
/// word.
pub(crate) fn guess_pool<'a>(candidates: &'a [String], vocabulary: &'a [String]) -> Vec<&'a String> {
    candidates.iter().chain(vocabulary.iter()).collect()
}
