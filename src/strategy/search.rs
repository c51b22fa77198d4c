//! Exhaustive search-space strategy, and the blend of it with entropy.

use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;

use super::{trivial_ranking, EntropyStrategy, Strategy};
use crate::board::Board;
use crate::config::SolverConfig;
use crate::filter::{count_matching, group_sizes};
use crate::guess::{first_min, guess_pool, remove_duplicate_guesses, sort_ascending, ScoredGuess};

/// Subtracted from the score of guesses that are live candidates.
const CANDIDATE_PREFERENCE: f64 = 0.5;

/// Expected number of candidates left after `guess`, assuming each
/// candidate is equally likely to be the solution.
pub fn expected_remaining(guess: &str, candidates: &[String]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let total: usize = group_sizes(guess, candidates).values().map(|g| g * g).sum();
    total as f64 / candidates.len() as f64
}

/// Picks the guess that leaves the smallest search space summed over every
/// candidate taken as the solution.
///
/// Each reachable pattern is pushed onto a scratch board holding just the
/// guess, compiled to a query and counted against the candidates. Only the
/// new guess is needed because the candidates are already filtered by the
/// rest of the board.
pub struct SearchStrategy {
    vocabulary: Arc<Vec<String>>,
    max_guesses_returned: usize,
}

impl SearchStrategy {
    pub fn new(vocabulary: Arc<Vec<String>>, config: &SolverConfig) -> Self {
        Self {
            vocabulary,
            max_guesses_returned: config.max_guesses_returned,
        }
    }

    /// Sum over candidates of the size of the search space left if that
    /// candidate were the solution. Lower is better.
    pub fn search_space_total(&self, board: &Board, guess: &str, candidates: &[String]) -> usize {
        let mut scratch = Board::new(board.word_length());
        let mut total = 0;
        for (pattern, weight) in group_sizes(guess, candidates) {
            scratch.push(guess, pattern);
            total += weight * count_matching(&scratch.query(), candidates);
            scratch.pop();
        }
        total
    }

    fn score_pool<'a>(&'a self, board: &Board, candidates: &'a [String]) -> (Vec<&'a String>, Vec<f64>) {
        let live: HashSet<&str> = candidates.iter().map(String::as_str).collect();
        let pool = guess_pool(candidates, &self.vocabulary);
        let scores = pool
            .par_iter()
            .map(|w| {
                let total = self.search_space_total(board, w, candidates) as f64;
                if live.contains(w.as_str()) {
                    total - CANDIDATE_PREFERENCE
                } else {
                    total
                }
            })
            .collect();
        (pool, scores)
    }
}

impl Strategy for SearchStrategy {
    fn name(&self) -> &'static str {
        "search"
    }

    fn max_guesses_returned(&self) -> usize {
        self.max_guesses_returned
    }

    fn rank(&self, board: &Board, candidates: &[String], limit: usize) -> Vec<ScoredGuess> {
        if let Some(trivial) = trivial_ranking(candidates, 1.0) {
            return trivial;
        }

        let (pool, scores) = self.score_pool(board, candidates);
        let mut guesses: Vec<ScoredGuess> = pool
            .into_iter()
            .zip(scores)
            .map(|(w, s)| ScoredGuess::new(w.clone(), s))
            .collect();
        remove_duplicate_guesses(&mut guesses);
        sort_ascending(&mut guesses);
        guesses.truncate(limit);
        guesses
    }

    fn best_guess(&self, board: &Board, candidates: &[String]) -> Option<ScoredGuess> {
        if let Some(trivial) = trivial_ranking(candidates, 1.0) {
            return trivial.into_iter().next();
        }

        let (pool, scores) = self.score_pool(board, candidates);
        let best = first_min(&scores)?;
        Some(ScoredGuess::new(pool[best].clone(), scores[best]))
    }
}

/// Entropy while the candidate set is large, exhaustive search once it is
/// small enough to afford.
pub struct BlendedStrategy {
    entropy: EntropyStrategy,
    search: SearchStrategy,
    threshold: usize,
}

impl BlendedStrategy {
    pub fn new(vocabulary: Arc<Vec<String>>, config: &SolverConfig) -> Self {
        Self {
            entropy: EntropyStrategy::new(vocabulary.clone(), config),
            search: SearchStrategy::new(vocabulary, config),
            threshold: config.blend_threshold,
        }
    }

    fn pick(&self, candidates: &[String]) -> &dyn Strategy {
        if candidates.len() > self.threshold {
            &self.entropy
        } else {
            &self.search
        }
    }
}

impl Strategy for BlendedStrategy {
    fn name(&self) -> &'static str {
        "blended"
    }

    fn max_guesses_returned(&self) -> usize {
        self.search.max_guesses_returned()
    }

    fn rank(&self, board: &Board, candidates: &[String], limit: usize) -> Vec<ScoredGuess> {
        self.pick(candidates).rank(board, candidates, limit)
    }

    fn best_guess(&self, board: &Board, candidates: &[String]) -> Option<ScoredGuess> {
        self.pick(candidates).best_guess(board, candidates)
    }
}
