//! Walks the whole decision tree a strategy produces for a candidate set.
//!
//! The explorer plays every possible game at once: at each node it asks the
//! strategy for a guess, splits the candidates by the pattern that guess
//! would receive, and recurses into every group. The resulting node count
//! and depth range measure how good the strategy is on that set.

use tracing::{trace, warn};

use crate::board::Board;
use crate::filter::partition;
use crate::strategy::Strategy;

/// Totals gathered over one exploration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Nodes visited, leaves included. Empty branches are not counted.
    pub visited_nodes: usize,
    /// Leaves where a single candidate was left.
    pub solved: usize,
    /// Branches that ran out of candidates or stopped shrinking.
    pub failures: usize,
    /// Guesses needed to reach the shallowest and deepest solved leaf,
    /// counting the guesses already on the board.
    pub min_depth: Option<usize>,
    pub max_depth: Option<usize>,
}

impl SearchResult {
    fn record_leaf(&mut self, depth: usize) {
        self.solved += 1;
        self.min_depth = Some(self.min_depth.map_or(depth, |d| d.min(depth)));
        self.max_depth = Some(self.max_depth.map_or(depth, |d| d.max(depth)));
    }
}

pub struct Explorer<'a> {
    strategy: &'a dyn Strategy,
}

impl<'a> Explorer<'a> {
    pub fn new(strategy: &'a dyn Strategy) -> Self {
        Self { strategy }
    }

    /// Explore every game reachable from `board` when the solution is one
    /// of `candidates`. The board is left as it was found.
    pub fn search(&self, board: &mut Board, candidates: &[String]) -> SearchResult {
        let mut result = SearchResult::default();
        self.search_into(board, candidates, &mut result);
        result
    }

    fn search_into(&self, board: &mut Board, candidates: &[String], result: &mut SearchResult) {
        match candidates {
            [] => {
                result.failures += 1;
                return;
            }
            [only] => {
                result.visited_nodes += 1;
                let already_guessed = board.last().is_some_and(|e| &e.guess == only);
                let depth = if already_guessed { board.len() } else { board.len() + 1 };
                result.record_leaf(depth);
                return;
            }
            _ => {}
        }

        result.visited_nodes += 1;
        let Some(guess) = self.strategy.best_guess(board, candidates) else {
            result.failures += 1;
            return;
        };
        trace!(guess = %guess.word, depth = board.len(), remaining = candidates.len(), "exploring");
        self.split_into(board, &guess.word, candidates, result);
    }

    /// Like [`Explorer::search`], but the first guess is `guess` instead of
    /// the strategy's choice.
    pub fn search_from(&self, board: &mut Board, guess: &str, candidates: &[String]) -> SearchResult {
        let mut result = SearchResult::default();
        if candidates.is_empty() {
            result.failures += 1;
            return result;
        }
        result.visited_nodes += 1;
        self.split_into(board, guess, candidates, &mut result);
        result
    }

    fn split_into(&self, board: &mut Board, guess: &str, candidates: &[String], result: &mut SearchResult) {
        for (pattern, group) in partition(guess, candidates) {
            if group.len() == candidates.len() && !pattern.is_solved() {
                warn!(
                    strategy = self.strategy.name(),
                    guess,
                    remaining = candidates.len(),
                    "guess does not split the candidates"
                );
                result.failures += 1;
                continue;
            }
            board.push(guess, pattern);
            self.search_into(board, &group, result);
            board.pop();
        }
    }
}
