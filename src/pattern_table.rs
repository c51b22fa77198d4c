//! Precomputed guess x solution pattern table with exact-entropy ranking.
//!
//! Every pattern is computed once up front, in parallel, so narrowing the
//! candidates and ranking guesses afterwards are table lookups. This is a
//! drop-in alternative to [`crate::strategy::EntropyStrategy`]: it ranks by
//! the Shannon entropy of the actual pattern distribution instead of
//! letter frequencies.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::board::Board;
use crate::error::{Result, WordleError};
use crate::feedback::Pattern;
use crate::guess::{first_max, remove_duplicate_guesses, ScoredGuess};
use crate::strategy::{trivial_ranking, Strategy};

/// Longest word whose packed pattern fits the table's `u16` cells.
pub const MAX_TABLE_WORD_LENGTH: usize = 8;

pub struct PatternTable {
    n: usize,
    solutions: Vec<String>,
    guesses: Vec<String>,
    /// Packed patterns, one row of `solutions.len()` cells per guess.
    cells: Vec<u16>,
    solution_index: HashMap<String, usize>,
    max_guesses_returned: usize,
}

impl PatternTable {
    pub fn build(solutions: Vec<String>, guesses: Vec<String>) -> Result<Self> {
        let n = solutions.first().ok_or(WordleError::EmptyDictionary)?.len();
        if guesses.is_empty() {
            return Err(WordleError::EmptyDictionary);
        }
        if n > MAX_TABLE_WORD_LENGTH {
            return Err(WordleError::UnsupportedWordLength(n));
        }
        for word in solutions.iter().chain(&guesses) {
            crate::error::validate_word(word, n)?;
        }

        let cells = guesses
            .par_iter()
            .flat_map_iter(|guess| solutions.iter().map(move |s| Pattern::score(s, guess).bits() as u16))
            .collect();
        let solution_index = solutions
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();

        Ok(Self {
            n,
            solutions,
            guesses,
            cells,
            solution_index,
            max_guesses_returned: 10,
        })
    }

    pub fn with_max_guesses_returned(mut self, max: usize) -> Self {
        self.max_guesses_returned = max;
        self
    }

    pub fn word_length(&self) -> usize {
        self.n
    }

    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn guess_index(&self, guess: &str) -> Option<usize> {
        self.guesses.iter().position(|g| g == guess)
    }

    fn cell(&self, guess_idx: usize, solution_idx: usize) -> u16 {
        self.cells[guess_idx * self.solutions.len() + solution_idx]
    }

    /// Pattern `guesses[guess_idx]` receives against `solutions[solution_idx]`.
    pub fn pattern(&self, guess_idx: usize, solution_idx: usize) -> Option<Pattern> {
        if guess_idx >= self.guesses.len() || solution_idx >= self.solutions.len() {
            return None;
        }
        Pattern::from_bits(self.cell(guess_idx, solution_idx) as u32, self.n)
    }

    /// Shannon entropy in bits of the patterns a guess produces over the
    /// given solution indices.
    pub fn entropy(&self, guess_idx: usize, remaining: &[usize]) -> f64 {
        if remaining.len() <= 1 {
            return 0.0;
        }
        let mut counts: HashMap<u16, u32> = HashMap::new();
        for &s in remaining {
            *counts.entry(self.cell(guess_idx, s)).or_insert(0) += 1;
        }

        let total = remaining.len() as f64;
        counts
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }

    fn entropies(&self, remaining: &[usize]) -> Vec<f64> {
        (0..self.guesses.len())
            .into_par_iter()
            .map(|g| self.entropy(g, remaining))
            .collect()
    }

    fn indices_of(&self, candidates: &[String]) -> Vec<usize> {
        candidates
            .iter()
            .filter_map(|w| self.solution_index.get(w).copied())
            .collect()
    }
}

impl Strategy for PatternTable {
    fn name(&self) -> &'static str {
        "table"
    }

    fn max_guesses_returned(&self) -> usize {
        self.max_guesses_returned
    }

    fn rank(&self, _board: &Board, candidates: &[String], limit: usize) -> Vec<ScoredGuess> {
        if let Some(trivial) = trivial_ranking(candidates, 0.0) {
            return trivial;
        }
        let remaining = self.indices_of(candidates);
        let live: HashSet<&str> = candidates.iter().map(String::as_str).collect();

        let mut guesses: Vec<(ScoredGuess, bool)> = self
            .guesses
            .iter()
            .zip(self.entropies(&remaining))
            .map(|(w, e)| (ScoredGuess::new(w.clone(), e), live.contains(w.as_str())))
            .collect();
        guesses.sort_by(|(a, a_live), (b, b_live)| {
            b.score.total_cmp(&a.score).then(b_live.cmp(a_live))
        });

        let mut ranked: Vec<ScoredGuess> = guesses.into_iter().map(|(g, _)| g).collect();
        if ranked.first().map_or(true, |g| g.score <= 0.0) {
            // Nothing splits the candidates; guessing one of them still does.
            ranked.insert(0, ScoredGuess::new(candidates[0].clone(), 0.0));
            remove_duplicate_guesses(&mut ranked);
        }
        ranked.truncate(limit);
        ranked
    }
}

/// Stateful solve over a [`PatternTable`]: narrow with observed patterns and
/// ask for the next guess.
pub struct PatternTableSolver<'a> {
    table: &'a PatternTable,
    remaining: Vec<usize>,
}

impl<'a> PatternTableSolver<'a> {
    pub fn new(table: &'a PatternTable) -> Self {
        Self {
            table,
            remaining: (0..table.solutions.len()).collect(),
        }
    }

    /// Make every solution possible again. The table is kept.
    pub fn reset(&mut self) {
        self.remaining = (0..self.table.solutions.len()).collect();
    }

    /// Keep the solutions for which `guess_idx` would have scored `observed`.
    pub fn update_remaining(&mut self, guess_idx: usize, observed: Pattern) {
        let bits = observed.bits() as u16;
        let table = self.table;
        self.remaining.retain(|&s| table.cell(guess_idx, s) == bits);
    }

    pub fn num_remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn remaining_words(&self) -> Vec<&'a str> {
        let table = self.table;
        self.remaining
            .iter()
            .map(|&s| table.solutions[s].as_str())
            .collect()
    }

    pub fn entropy(&self, guess_idx: usize) -> f64 {
        self.table.entropy(guess_idx, &self.remaining)
    }

    /// Index into the table's guesses with the highest entropy, first wins
    /// ties. When no guess splits what remains, the first remaining
    /// solution is picked if it is also a guess. `None` once nothing
    /// remains.
    pub fn best_guess_index(&self) -> Option<usize> {
        let &first = self.remaining.first()?;
        let entropies = self.table.entropies(&self.remaining);
        let best = first_max(&entropies)?;
        if entropies[best] > 0.0 {
            return Some(best);
        }
        self.table
            .guess_index(&self.table.solutions[first])
            .or(Some(best))
    }

    pub fn best_guess(&self) -> Option<&'a str> {
        let table = self.table;
        self.best_guess_index().map(|g| table.guesses[g].as_str())
    }
}
