//! Guess selection strategies.
//!
//! Every strategy ranks guesses for a board and its live candidate set.
//! Candidates are assumed to be already filtered by the board.

mod entropy;
mod lookahead;
mod partition;
mod search;

pub use entropy::{entropy, letter_frequencies, remove_known_letters, EntropyStrategy, FrequencyTable};
pub use lookahead::LookaheadStrategy;
pub use partition::PartitionStrategy;
pub use search::{expected_remaining, BlendedStrategy, SearchStrategy};

use std::str::FromStr;
use std::sync::Arc;

use crate::board::Board;
use crate::config::SolverConfig;
use crate::guess::ScoredGuess;

/// Picks the next guess for a board.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Upper bound on the length of [`Strategy::best_guesses`].
    fn max_guesses_returned(&self) -> usize;

    /// Up to `limit` guesses, best first. Empty when there are no
    /// candidates; a single candidate is returned as is.
    fn rank(&self, board: &Board, candidates: &[String], limit: usize) -> Vec<ScoredGuess>;

    fn best_guesses(&self, board: &Board, candidates: &[String]) -> Vec<ScoredGuess> {
        self.rank(board, candidates, self.max_guesses_returned())
    }

    fn best_guess(&self, board: &Board, candidates: &[String]) -> Option<ScoredGuess> {
        self.rank(board, candidates, 1).into_iter().next()
    }
}

/// The answer for the degenerate cases that need no computation.
pub(crate) fn trivial_ranking(candidates: &[String], score: f64) -> Option<Vec<ScoredGuess>> {
    match candidates {
        [] => Some(Vec::new()),
        [only] => Some(vec![ScoredGuess::new(only.clone(), score)]),
        _ => None,
    }
}

/// The strategies that can be built by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Entropy,
    Partition,
    Search,
    Blended,
    Lookahead,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Entropy,
        StrategyKind::Partition,
        StrategyKind::Search,
        StrategyKind::Blended,
        StrategyKind::Lookahead,
    ];

    /// Build the strategy over a guessing vocabulary.
    pub fn build(self, vocabulary: Arc<Vec<String>>, config: &SolverConfig) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Entropy => Box::new(EntropyStrategy::new(vocabulary, config)),
            StrategyKind::Partition => Box::new(PartitionStrategy::new(vocabulary, config)),
            StrategyKind::Search => Box::new(SearchStrategy::new(vocabulary, config)),
            StrategyKind::Blended => Box::new(BlendedStrategy::new(vocabulary, config)),
            StrategyKind::Lookahead => {
                let sub = Box::new(PartitionStrategy::new(vocabulary, config));
                Box::new(LookaheadStrategy::new(sub, config))
            }
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "entropy" => Ok(StrategyKind::Entropy),
            "partition" | "grouping" | "groups" => Ok(StrategyKind::Partition),
            "search" => Ok(StrategyKind::Search),
            "blended" => Ok(StrategyKind::Blended),
            "lookahead" => Ok(StrategyKind::Lookahead),
            _ => Err(format!(
                "unknown strategy '{}' (expected entropy, partition, search, blended or lookahead)",
                s
            )),
        }
    }
}
