//! # Wordle Bot
//!
//! A multithreaded Wordle decision engine.
//!
//! Given the guesses made so far and the feedback they received, the engine
//! narrows the candidate solutions and ranks the next guesses with one of
//! several strategies: letter-frequency entropy, partition counting,
//! exhaustive search-space totals, or a lookahead over any of them. The
//! [`Bot`] drives a strategy to a solution and the [`Explorer`] measures a
//! strategy over every possible game.

pub mod board;
pub mod bot;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod explorer;
pub mod feedback;
pub mod filter;
pub mod guess;
pub mod pattern_table;
pub mod query;
pub mod strategy;

pub use board::{Board, GuessEntry};
pub use bot::{BatchSummary, Bot, FailureReason, SolveOutcome};
pub use config::{LookaheadConfig, LookaheadMode, PartitionWeights, SolverConfig};
pub use dictionary::{load_dictionaries, load_word_list, parse_word_list};
pub use error::{Result, WordleError};
pub use explorer::{Explorer, SearchResult};
pub use feedback::{score, score_string, Feedback, Pattern};
pub use guess::ScoredGuess;
pub use pattern_table::{PatternTable, PatternTableSolver};
pub use query::Query;
pub use strategy::{Strategy, StrategyKind};

/// Word length for classic Wordle
pub const WORD_LENGTH: usize = config::DEFAULT_WORD_LENGTH;
