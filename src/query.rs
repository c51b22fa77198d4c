//! Compiled constraints derived from a board's guess history.
//!
//! A [`Query`] is a snapshot: it goes stale as soon as the board it was
//! compiled from is pushed or popped, and has to be compiled again.

use crate::board::Board;
use crate::feedback::Feedback;

const ALPHABET: usize = 26;

fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

/// Letter constraints a candidate word must meet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    n: usize,
    /// Required letter per position.
    correct: Vec<Option<u8>>,
    /// Letters the word must contain somewhere.
    must_contain: u32,
    /// Per position, the letters that cannot appear there.
    cant_contain: Vec<u32>,
    /// Total occurrence bounds per letter. Only checked when `counted`.
    min_count: [u8; ALPHABET],
    max_count: [u8; ALPHABET],
    counted: bool,
}

impl Query {
    /// A query that accepts every word of length `n`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            correct: vec![None; n],
            must_contain: 0,
            cant_contain: vec![0; n],
            min_count: [0; ALPHABET],
            max_count: [n.min(u8::MAX as usize) as u8; ALPHABET],
            counted: false,
        }
    }

    /// Compile the board into a query that also bounds how many times each
    /// letter may occur. Filtering with this query keeps exactly the words
    /// that would reproduce every pattern on the board.
    pub fn compile(board: &Board) -> Self {
        let mut query = Self::compile_positional(board);
        query.counted = true;
        for entry in board.entries() {
            let guess = entry.guess.as_bytes();
            let mut marked = [0u8; ALPHABET];
            let mut has_absent = [false; ALPHABET];
            for (i, fb) in entry.pattern.iter().enumerate() {
                let idx = (guess[i] - b'a') as usize;
                match fb {
                    Feedback::Absent => has_absent[idx] = true,
                    Feedback::Correct | Feedback::Present => marked[idx] += 1,
                }
            }
            for idx in 0..ALPHABET {
                query.min_count[idx] = query.min_count[idx].max(marked[idx]);
                if has_absent[idx] {
                    query.max_count[idx] = query.max_count[idx].min(marked[idx]);
                }
            }
        }
        query
    }

    /// Compile the board using fixed positions, forbidden letters and the
    /// must-contain set only.
    ///
    /// An absent mark only forbids its letter everywhere when that letter is
    /// not already known to be in the word. Otherwise it is a surplus copy of
    /// a repeated letter and only rules out its own position.
    pub fn compile_positional(board: &Board) -> Self {
        let mut query = Self::new(board.word_length());
        let mut known_correct = 0u32;

        for entry in board.entries() {
            let guess = entry.guess.as_bytes();
            let pattern = entry.pattern;

            for (i, fb) in pattern.iter().enumerate() {
                if fb == Feedback::Correct {
                    query.set_correct(i, guess[i]);
                    known_correct |= letter_bit(guess[i]);
                }
            }
            for (i, fb) in pattern.iter().enumerate() {
                if fb == Feedback::Present {
                    query.set_must_contain(guess[i]);
                    query.set_cant_contain_at(i, guess[i]);
                }
            }
            for (i, fb) in pattern.iter().enumerate() {
                if fb != Feedback::Absent {
                    continue;
                }
                let bit = letter_bit(guess[i]);
                if (known_correct | query.must_contain) & bit == 0 {
                    query.set_cant_contain(guess[i]);
                } else {
                    query.set_cant_contain_at(i, guess[i]);
                }
            }
        }
        query
    }

    fn set_correct(&mut self, index: usize, letter: u8) {
        self.correct[index] = Some(letter);
        self.must_contain |= letter_bit(letter);
    }

    fn set_must_contain(&mut self, letter: u8) {
        self.must_contain |= letter_bit(letter);
    }

    fn set_cant_contain(&mut self, letter: u8) {
        let bit = letter_bit(letter);
        for mask in &mut self.cant_contain {
            *mask |= bit;
        }
    }

    fn set_cant_contain_at(&mut self, index: usize, letter: u8) {
        self.cant_contain[index] |= letter_bit(letter);
    }

    pub fn word_length(&self) -> usize {
        self.n
    }

    /// Letter fixed at `index`, if known.
    pub fn correct_at(&self, index: usize) -> Option<char> {
        self.correct.get(index).copied().flatten().map(char::from)
    }

    /// Bit mask (bit 0 = 'a') of the letters fixed at some position.
    pub fn correct_mask(&self) -> u32 {
        self.correct
            .iter()
            .flatten()
            .fold(0, |mask, &letter| mask | letter_bit(letter))
    }

    /// Bit mask (bit 0 = 'a') of the letters the word must contain.
    pub fn must_contain_mask(&self) -> u32 {
        self.must_contain
    }

    /// Occurrence bounds for `letter`, when counts are tracked.
    pub fn count_bounds(&self, letter: char) -> Option<(u8, u8)> {
        if !self.counted || !letter.is_ascii_lowercase() {
            return None;
        }
        let idx = (letter as u8 - b'a') as usize;
        Some((self.min_count[idx], self.max_count[idx]))
    }

    /// True when no word can satisfy the query.
    pub fn is_contradictory(&self) -> bool {
        let fixed_but_forbidden = self
            .correct
            .iter()
            .zip(&self.cant_contain)
            .any(|(fixed, forbidden)| matches!(fixed, Some(l) if forbidden & letter_bit(*l) != 0));
        if fixed_but_forbidden {
            return true;
        }
        let forbidden_everywhere = self.cant_contain.iter().fold(u32::MAX, |acc, m| acc & m);
        if self.n > 0 && self.must_contain & forbidden_everywhere != 0 {
            return true;
        }
        if self.counted {
            let bounds_crossed = self
                .min_count
                .iter()
                .zip(&self.max_count)
                .any(|(min, max)| min > max);
            let required: usize = self.min_count.iter().map(|&c| c as usize).sum();
            return bounds_crossed || required > self.n;
        }
        false
    }

    /// Check a word against every constraint.
    pub fn satisfies(&self, word: &str) -> bool {
        let word = word.as_bytes();
        if word.len() != self.n {
            return false;
        }

        let mut word_mask = 0u32;
        let mut counts = [0u8; ALPHABET];
        for (i, &letter) in word.iter().enumerate() {
            if matches!(self.correct[i], Some(fixed) if fixed != letter) {
                return false;
            }
            let bit = letter_bit(letter);
            if self.cant_contain[i] & bit != 0 {
                return false;
            }
            word_mask |= bit;
            counts[(letter - b'a') as usize] += 1;
        }

        if self.must_contain & word_mask != self.must_contain {
            return false;
        }

        !self.counted
            || counts
                .iter()
                .zip(self.min_count.iter().zip(&self.max_count))
                .all(|(count, (min, max))| count >= min && count <= max)
    }
}
