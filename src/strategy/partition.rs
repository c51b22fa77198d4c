//! Score-grouping strategy.
//!
//! For every guess, score it against each candidate as if that candidate
//! were the solution and count the distinct patterns. More groups means a
//! finer split of the search space; among equal counts a smaller largest
//! group is better, and a guess that could itself be the answer gets a
//! small bonus.

use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;

use super::{trivial_ranking, Strategy};
use crate::board::Board;
use crate::config::{PartitionWeights, SolverConfig};
use crate::filter::score_group_count;
use crate::guess::{first_max, guess_pool, remove_duplicate_guesses, sort_descending, ScoredGuess};

pub struct PartitionStrategy {
    vocabulary: Arc<Vec<String>>,
    max_guesses_returned: usize,
    weights: PartitionWeights,
}

impl PartitionStrategy {
    pub fn new(vocabulary: Arc<Vec<String>>, config: &SolverConfig) -> Self {
        Self {
            vocabulary,
            max_guesses_returned: config.max_guesses_returned,
            weights: config.partition,
        }
    }

    /// Group count plus the balance and candidate bonuses.
    pub fn score_guess(&self, guess: &str, candidates: &[String], is_candidate: bool) -> f64 {
        let (groups, largest) = score_group_count(guess, candidates);
        let mut score = groups as f64;
        if largest > 0 {
            score += self.weights.balance_weight / largest as f64;
        }
        if is_candidate {
            score += self.weights.candidate_bonus;
        }
        score
    }

    fn score_pool<'a>(&'a self, candidates: &'a [String]) -> (Vec<&'a String>, Vec<f64>) {
        let live: HashSet<&str> = candidates.iter().map(String::as_str).collect();
        let pool = guess_pool(candidates, &self.vocabulary);
        let scores = pool
            .par_iter()
            .map(|w| self.score_guess(w, candidates, live.contains(w.as_str())))
            .collect();
        (pool, scores)
    }
}

impl Strategy for PartitionStrategy {
    fn name(&self) -> &'static str {
        "partition"
    }

    fn max_guesses_returned(&self) -> usize {
        self.max_guesses_returned
    }

    fn rank(&self, _board: &Board, candidates: &[String], limit: usize) -> Vec<ScoredGuess> {
        if let Some(trivial) = trivial_ranking(candidates, 1.0) {
            return trivial;
        }

        let (pool, scores) = self.score_pool(candidates);
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

    fn best_guess(&self, _board: &Board, candidates: &[String]) -> Option<ScoredGuess> {
        if let Some(trivial) = trivial_ranking(candidates, 1.0) {
            return trivial.into_iter().next();
        }

        let (pool, scores) = self.score_pool(candidates);
        let best = first_max(&scores)?;
        Some(ScoredGuess::new(pool[best].clone(), scores[best]))
    }
}
