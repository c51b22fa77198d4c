//! The solve loop: guess, score, narrow, repeat.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, error, info, warn};

use crate::board::Board;
use crate::error::{validate_word, Result, WordleError};
use crate::feedback::{Pattern, MAX_WORD_LENGTH};
use crate::filter::filter_by_query;
use crate::guess::ScoredGuess;
use crate::strategy::Strategy;

/// Why a solve stopped without finding the solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// No candidate is consistent with the board: the solution is missing
    /// from the dictionary or the board contradicts it.
    Contradiction,
    /// A guess left at least as many candidates as before it.
    NoProgress {
        guess: String,
        before: usize,
        after: usize,
    },
}

/// How a solve ended, with every guess made on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved { guesses: Vec<String> },
    Failed { reason: FailureReason, guesses: Vec<String> },
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved { .. })
    }

    /// Number of guesses it took, or `None` for a failed solve.
    pub fn guess_count(&self) -> Option<usize> {
        match self {
            SolveOutcome::Solved { guesses } => Some(guesses.len()),
            SolveOutcome::Failed { .. } => None,
        }
    }

    pub fn guesses(&self) -> &[String] {
        match self {
            SolveOutcome::Solved { guesses } | SolveOutcome::Failed { guesses, .. } => guesses,
        }
    }
}

/// Results of solving many puzzles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    /// Guess count -> number of puzzles solved in that many guesses.
    pub distribution: BTreeMap<usize, usize>,
}

impl BatchSummary {
    /// Mean guesses over the solved puzzles.
    pub fn average(&self) -> f64 {
        if self.solved == 0 {
            return 0.0;
        }
        self.total_guesses as f64 / self.solved as f64
    }
}

fn guesses_since(board: &Board, prior: usize) -> Vec<String> {
    board.guesses().skip(prior).map(str::to_string).collect()
}

/// Solves puzzles against a solution vocabulary using one strategy.
pub struct Bot {
    solutions: Arc<Vec<String>>,
    strategy: Arc<dyn Strategy>,
    word_length: usize,
}

impl Bot {
    pub fn new(solutions: Arc<Vec<String>>, strategy: Arc<dyn Strategy>, word_length: usize) -> Self {
        Self {
            solutions,
            strategy,
            word_length,
        }
    }

    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// The first guess of a solve: `requested` lowercased and checked, or
    /// the strategy's pick over the whole solution list.
    pub fn opening_guess(&self, requested: Option<&str>) -> Result<String> {
        if let Some(opening) = requested {
            let opening = opening.to_ascii_lowercase();
            validate_word(&opening, self.word_length)?;
            return Ok(opening);
        }
        if self.word_length > MAX_WORD_LENGTH {
            return Err(WordleError::UnsupportedWordLength(self.word_length));
        }
        let start = Instant::now();
        let best = self
            .strategy
            .best_guess(&Board::new(self.word_length), &self.solutions)
            .ok_or(WordleError::EmptyDictionary)?;
        info!(opening = %best.word, elapsed = ?start.elapsed(), "picked opening guess");
        Ok(best.word)
    }

    /// Solve for `hidden` starting with `opening` on an empty board.
    pub fn solve(&self, hidden: &str, opening: &str) -> Result<SolveOutcome> {
        let mut board = Board::new(self.word_length);
        self.solve_on(&mut board, hidden, opening)
    }

    /// Solve on a board that may already hold guesses. The board keeps the
    /// full history afterwards.
    pub fn solve_on(&self, board: &mut Board, hidden: &str, opening: &str) -> Result<SolveOutcome> {
        validate_word(hidden, self.word_length)?;
        validate_word(opening, self.word_length)?;

        let prior = board.len();

        board.push(opening, Pattern::score(hidden, opening));
        let mut remaining = board.filter(&self.solutions);
        debug!(guess = opening, remaining = remaining.len(), "opening guess");

        loop {
            if board.last().is_some_and(|e| e.guess == hidden) {
                let guesses = guesses_since(board, prior);
                info!(hidden, guesses = guesses.len(), "solved");
                return Ok(SolveOutcome::Solved { guesses });
            }
            if remaining.is_empty() {
                warn!(hidden, "no candidates left");
                return Ok(SolveOutcome::Failed {
                    reason: FailureReason::Contradiction,
                    guesses: guesses_since(board, prior),
                });
            }

            let before = remaining.len();
            let guess = if before <= 2 {
                remaining[0].clone()
            } else {
                match self.strategy.best_guess(board, &remaining) {
                    Some(ScoredGuess { word, .. }) => word,
                    None => {
                        return Ok(SolveOutcome::Failed {
                            reason: FailureReason::Contradiction,
                            guesses: guesses_since(board, prior),
                        })
                    }
                }
            };

            let pattern = Pattern::score(hidden, &guess);
            board.push(guess.clone(), pattern);
            remaining = filter_by_query(&board.query(), &remaining);
            debug!(guess = %guess, pattern = %pattern.render(&guess), remaining = remaining.len(), "turn");

            if !pattern.is_solved() && remaining.len() >= before {
                error!(
                    strategy = self.strategy.name(),
                    hidden,
                    guess = %guess,
                    before,
                    after = remaining.len(),
                    "guess did not shrink the search space"
                );
                return Ok(SolveOutcome::Failed {
                    reason: FailureReason::NoProgress {
                        guess,
                        before,
                        after: remaining.len(),
                    },
                    guesses: guesses_since(board, prior),
                });
            }
        }
    }

    /// Ranked guesses for an interactive board.
    pub fn suggest(&self, board: &Board, candidates: &[String]) -> Vec<ScoredGuess> {
        self.strategy.best_guesses(board, candidates)
    }

    /// Solve every word in `hidden` on the rayon pool. Each puzzle gets its
    /// own board; only the totals are shared.
    pub fn solve_batch(&self, hidden: &[String], opening: &str) -> Result<BatchSummary> {
        validate_word(opening, self.word_length)?;

        let solved = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);
        let total_guesses = AtomicUsize::new(0);

        let counts: Vec<Option<usize>> = hidden
            .par_iter()
            .map(|word| {
                let count = match self.solve(word, opening) {
                    Ok(outcome) => outcome.guess_count(),
                    Err(err) => {
                        warn!(word = %word, %err, "skipping malformed puzzle");
                        None
                    }
                };
                match count {
                    Some(n) => {
                        solved.fetch_add(1, Ordering::Relaxed);
                        total_guesses.fetch_add(n, Ordering::Relaxed);
                    }
                    None => {
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                }
                count
            })
            .collect();

        let mut distribution = BTreeMap::new();
        for n in counts.into_iter().flatten() {
            *distribution.entry(n).or_insert(0) += 1;
        }

        let summary = BatchSummary {
            solved: solved.into_inner(),
            failed: failed.into_inner(),
            total_guesses: total_guesses.into_inner(),
            distribution,
        };
        info!(
            strategy = self.strategy.name(),
            solved = summary.solved,
            failed = summary.failed,
            average = summary.average(),
            "batch finished"
        );
        Ok(summary)
    }
}
