//! Lookahead over a shortlist from a cheaper strategy.
//!
//! The sub-strategy only prunes: it proposes `prune_width` guesses and each
//! of them is evaluated by looking further down the game tree, either with
//! a bounded-depth expected-guess recursion or with a full explorer run per
//! partition. How deep to look is picked from the candidate count, and
//! large sets get the sub-strategy's ranking unchanged.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use rayon::prelude::*;
use tracing::trace;

use super::{expected_remaining, trivial_ranking, Strategy};
use crate::board::Board;
use crate::config::{LookaheadConfig, LookaheadMode, SolverConfig};
use crate::explorer::Explorer;
use crate::filter::partition;
use crate::guess::{remove_duplicate_guesses, sort_ascending, ScoredGuess};

/// Expected guesses to finish `m` candidates when every guess is one of
/// them and each miss leaves the answer known. No strategy can do better,
/// so it is used where the recursion stops.
fn lower_bound(m: usize) -> f64 {
    2.0 - 1.0 / m as f64
}

fn fingerprint(words: &[String]) -> u64 {
    let mut hasher = DefaultHasher::new();
    words.hash(&mut hasher);
    hasher.finish()
}

type CacheKey = (String, usize, u64);

/// Memoized expected-guess values for one top-level call.
#[derive(Default)]
struct LookaheadCache {
    entries: HashMap<CacheKey, f64>,
    hits: usize,
}

/// State of one recursive evaluation. Lives for a single `rank` or
/// `best_guess` call, so nothing carries over between solves.
struct Evaluation<'a> {
    shortlist: &'a [String],
    config: &'a LookaheadConfig,
    cache: LookaheadCache,
}

impl<'a> Evaluation<'a> {
    fn new(shortlist: &'a [String], config: &'a LookaheadConfig) -> Self {
        Self {
            shortlist,
            config,
            cache: LookaheadCache::default(),
        }
    }

    /// Expected number of guesses to finish `words`, this guess included.
    ///
    /// Gives up and returns the running total once it reaches `alpha`; such
    /// partial values are not cached. A guess that cannot split `words`
    /// costs infinity.
    fn expected_guesses(&mut self, guess: &str, words: &[String], depth: usize, alpha: f64) -> f64 {
        let key = (guess.to_string(), depth, fingerprint(words));
        if let Some(&cached) = self.cache.entries.get(&key) {
            self.cache.hits += 1;
            return cached;
        }

        let groups = partition(guess, words);
        if groups.len() == 1 && !groups.keys().any(|p| p.is_solved()) {
            self.cache.entries.insert(key, f64::INFINITY);
            return f64::INFINITY;
        }

        let n = words.len() as f64;
        let mut total = 0.0;
        for (pattern, group) in &groups {
            let probability = group.len() as f64 / n;
            let cost = if pattern.is_solved() {
                1.0
            } else if depth == 0 || group.len() == 1 {
                1.0 + lower_bound(group.len())
            } else {
                1.0 + self.best_next(group, depth - 1)
            };
            total += probability * cost;
            if total >= alpha {
                return total;
            }
        }

        self.cache.entries.insert(key, total);
        total
    }

    /// Lowest expected guess count over the follow-up options for `words`.
    fn best_next(&mut self, words: &[String], depth: usize) -> f64 {
        if words.len() == 1 {
            return 1.0;
        }
        let mut best = f64::INFINITY;
        for option in self.next_options(words) {
            let cost = self.expected_guesses(&option, words, depth, best);
            if cost < best {
                best = cost;
            }
        }
        best
    }

    /// Small sets are guessed from themselves; otherwise the shortlist and
    /// the words are ranked by expected remaining words and cut to
    /// `inner_width`.
    fn next_options(&self, words: &[String]) -> Vec<String> {
        if words.len() <= self.config.small_set_threshold {
            return words.to_vec();
        }
        let mut seen = HashSet::new();
        let mut scored: Vec<(f64, &String)> = words
            .iter()
            .chain(self.shortlist)
            .filter(|w| seen.insert(w.as_str()))
            .map(|w| (expected_remaining(w, words), w))
            .collect();
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));
        scored
            .into_iter()
            .take(self.config.inner_width)
            .map(|(_, w)| w.clone())
            .collect()
    }
}

pub struct LookaheadStrategy {
    sub: Box<dyn Strategy>,
    max_guesses_returned: usize,
    config: LookaheadConfig,
}

impl LookaheadStrategy {
    pub fn new(sub: Box<dyn Strategy>, config: &SolverConfig) -> Self {
        Self {
            sub,
            max_guesses_returned: config.max_guesses_returned,
            config: config.lookahead,
        }
    }

    pub fn with_lookahead(mut self, config: LookaheadConfig) -> Self {
        self.config = config;
        self
    }

    fn shortlist(&self, board: &Board, candidates: &[String]) -> Vec<String> {
        let mut words: Vec<String> = self
            .sub
            .rank(board, candidates, self.config.prune_width)
            .into_iter()
            .map(|g| g.word)
            .collect();
        if candidates.len() <= self.config.small_set_threshold {
            words.extend(candidates.iter().cloned());
            let mut seen = HashSet::new();
            words.retain(|w| seen.insert(w.clone()));
        }
        words
    }

    /// Visited explorer nodes when `guess` is played first, with every
    /// failed branch charged as a full candidate set.
    fn explore_cost(&self, board: &Board, guess: &str, candidates: &[String]) -> f64 {
        let groups = partition(guess, candidates);
        if groups.len() == 1 && !groups.keys().any(|p| p.is_solved()) {
            return f64::INFINITY;
        }
        let mut board = board.clone();
        let result = Explorer::new(self.sub.as_ref()).search_from(&mut board, guess, candidates);
        (result.visited_nodes + result.failures * candidates.len()) as f64
    }

    fn evaluate(&self, board: &Board, candidates: &[String], depth: usize, prune: bool) -> Vec<ScoredGuess> {
        let shortlist = self.shortlist(board, candidates);
        let mut guesses = match self.config.mode {
            LookaheadMode::Expected => {
                let mut eval = Evaluation::new(&shortlist, &self.config);
                let mut best = f64::INFINITY;
                let mut guesses = Vec::with_capacity(shortlist.len());
                for guess in &shortlist {
                    let alpha = if prune { best } else { f64::INFINITY };
                    let score = eval.expected_guesses(guess, candidates, depth, alpha);
                    // Pruned scores only bound the true value from below.
                    if score < best {
                        best = score;
                    }
                    guesses.push(ScoredGuess::new(guess.clone(), score));
                }
                trace!(
                    depth,
                    cached = eval.cache.entries.len(),
                    hits = eval.cache.hits,
                    "lookahead evaluated"
                );
                guesses
            }
            LookaheadMode::Exhaustive => shortlist
                .par_iter()
                .map(|guess| ScoredGuess::new(guess.clone(), self.explore_cost(board, guess, candidates)))
                .collect(),
        };
        guesses.retain(|g| g.score.is_finite());
        remove_duplicate_guesses(&mut guesses);
        sort_ascending(&mut guesses);
        guesses
    }
}

impl Strategy for LookaheadStrategy {
    fn name(&self) -> &'static str {
        "lookahead"
    }

    fn max_guesses_returned(&self) -> usize {
        self.max_guesses_returned
    }

    fn rank(&self, board: &Board, candidates: &[String], limit: usize) -> Vec<ScoredGuess> {
        if let Some(trivial) = trivial_ranking(candidates, 1.0) {
            return trivial;
        }
        let depth = self.config.depth_for(candidates.len());
        if depth == 0 {
            trace!(remaining = candidates.len(), "too many candidates for lookahead");
            return self.sub.rank(board, candidates, limit);
        }

        let mut guesses = self.evaluate(board, candidates, depth, false);
        if guesses.is_empty() {
            return self.sub.rank(board, candidates, limit);
        }
        guesses.truncate(limit);
        guesses
    }

    fn best_guess(&self, board: &Board, candidates: &[String]) -> Option<ScoredGuess> {
        if let Some(trivial) = trivial_ranking(candidates, 1.0) {
            return trivial.into_iter().next();
        }
        let depth = self.config.depth_for(candidates.len());
        if depth == 0 {
            return self.sub.best_guess(board, candidates);
        }

        self.evaluate(board, candidates, depth, true)
            .into_iter()
            .next()
            .or_else(|| self.sub.best_guess(board, candidates))
    }
}
