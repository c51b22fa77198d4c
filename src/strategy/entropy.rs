//! Letter-frequency entropy strategy.
//!
//! Scores a guess by the entropy of its distinct letters under the
//! candidates' letter frequencies. It never scores actual feedback
//! partitions, which keeps it cheap enough for the full guessing
//! vocabulary.

use std::sync::Arc;

use rayon::prelude::*;

use super::{trivial_ranking, Strategy};
use crate::board::Board;
use crate::config::SolverConfig;
use crate::guess::{first_max, guess_pool, remove_duplicate_guesses, sort_descending, ScoredGuess};

/// Share of words containing each letter, indexed from 'a'.
pub type FrequencyTable = [f64; 26];

/// Fraction of `words` that contain each letter at least once.
///
/// A letter every candidate contains gets frequency 1 and so contributes
/// nothing to [`entropy`]; only letters that split the candidates score.
pub fn letter_frequencies(words: &[String]) -> FrequencyTable {
    let mut counts = [0usize; 26];
    for word in words {
        let mut seen = 0u32;
        for b in word.bytes() {
            let idx = (b - b'a') as usize;
            if seen & (1 << idx) == 0 {
                counts[idx] += 1;
                seen |= 1 << idx;
            }
        }
    }

    let mut freqs = [0.0; 26];
    if words.is_empty() {
        return freqs;
    }
    for (freq, &count) in freqs.iter_mut().zip(&counts) {
        *freq = count as f64 / words.len() as f64;
    }
    freqs
}

/// Zero the letters in `mask` (bit 0 = 'a').
pub fn remove_known_letters(freqs: &FrequencyTable, mask: u32) -> FrequencyTable {
    let mut out = *freqs;
    for (idx, freq) in out.iter_mut().enumerate() {
        if mask & (1 << idx) != 0 {
            *freq = 0.0;
        }
    }
    out
}

/// `-sum(p * log2 p)` over the distinct letters of `word`.
pub fn entropy(word: &str, freqs: &FrequencyTable) -> f64 {
    let mut seen = 0u32;
    let mut e = 0.0;
    for b in word.bytes() {
        let idx = (b - b'a') as usize;
        if seen & (1 << idx) != 0 {
            continue;
        }
        seen |= 1 << idx;
        let p = freqs[idx];
        if p > 0.0 {
            e -= p * p.log2();
        }
    }
    e
}

pub struct EntropyStrategy {
    vocabulary: Arc<Vec<String>>,
    max_guesses_returned: usize,
    exclude_known_letters: bool,
}

impl EntropyStrategy {
    pub fn new(vocabulary: Arc<Vec<String>>, config: &SolverConfig) -> Self {
        Self {
            vocabulary,
            max_guesses_returned: config.max_guesses_returned,
            exclude_known_letters: config.exclude_known_letters,
        }
    }

    fn frequencies(&self, board: &Board, candidates: &[String]) -> FrequencyTable {
        let freqs = letter_frequencies(candidates);
        if self.exclude_known_letters && !board.is_empty() {
            remove_known_letters(&freqs, board.query().correct_mask())
        } else {
            freqs
        }
    }

    /// Candidates come first so they win ties against outside words.
    fn score_pool<'a>(&'a self, board: &Board, candidates: &'a [String]) -> (Vec<&'a String>, Vec<f64>) {
        let freqs = self.frequencies(board, candidates);
        let pool = guess_pool(candidates, &self.vocabulary);
        let scores = pool.par_iter().map(|w| entropy(w, &freqs)).collect();
        (pool, scores)
    }
}

impl Strategy for EntropyStrategy {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn max_guesses_returned(&self) -> usize {
        self.max_guesses_returned
    }

    fn rank(&self, board: &Board, candidates: &[String], limit: usize) -> Vec<ScoredGuess> {
        if let Some(trivial) = trivial_ranking(candidates, 0.0) {
            return trivial;
        }

        let (pool, scores) = self.score_pool(board, candidates);
        let mut guesses: Vec<ScoredGuess> = pool
            .into_iter()
            .zip(scores)
            .map(|(w, s)| ScoredGuess::new(w.clone(), s))
            .collect();
        remove_duplicate_guesses(&mut guesses);
        sort_descending(&mut guesses);
        guesses.truncate(limit);
        guesses
    }

    fn best_guess(&self, board: &Board, candidates: &[String]) -> Option<ScoredGuess> {
        if let Some(trivial) = trivial_ranking(candidates, 0.0) {
            return trivial.into_iter().next();
        }

        let (pool, scores) = self.score_pool(board, candidates);
        let best = first_max(&scores)?;
        Some(ScoredGuess::new(pool[best].clone(), scores[best]))
    }
}
