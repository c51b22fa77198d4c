//! Feedback calculation for Wordle guesses.
//!
//! This module computes the feedback pattern (correct/present/absent) for a
//! guess against a solution, and converts patterns to and from the textual
//! forms used at the edges of the program.

use crate::error::{Result, WordleError};

/// Longest word a [`Pattern`] can describe (2 bits per position in a `u32`).
pub const MAX_WORD_LENGTH: usize = 16;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    /// Letter not in word (gray), or every copy of it is already accounted for
    Absent,
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
}

impl Feedback {
    fn code(self) -> u32 {
        match self {
            Feedback::Absent => 1,
            Feedback::Correct => 2,
            Feedback::Present => 3,
        }
    }

    fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Feedback::Absent),
            2 => Some(Feedback::Correct),
            3 => Some(Feedback::Present),
            _ => None,
        }
    }

    /// Convert to a character for display
    pub fn to_emoji(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_compact_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' | '.' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// The feedback for a whole guess, packed 2 bits per position.
///
/// Every position of a finished pattern holds a non-zero code, so two
/// patterns are equal exactly when their feedback sequences are equal.
/// The derived ordering is total and stable, which lets patterns key
/// ordered maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    bits: u32,
    len: u8,
}

impl Pattern {
    /// Create a new pattern from individual feedback values
    pub fn from_feedbacks(feedbacks: &[Feedback]) -> Self {
        debug_assert!(feedbacks.len() <= MAX_WORD_LENGTH);
        let mut bits = 0u32;
        for (i, fb) in feedbacks.iter().enumerate() {
            bits |= fb.code() << (i << 1);
        }
        Self {
            bits,
            len: feedbacks.len() as u8,
        }
    }

    /// The all-correct pattern for words of length `len`.
    pub fn solved(len: usize) -> Self {
        Self::from_feedbacks(&vec![Feedback::Correct; len])
    }

    /// Rebuild a pattern from its packed form. Returns `None` if any of the
    /// first `len` positions is unset or `len` is out of range.
    pub fn from_bits(bits: u32, len: usize) -> Option<Self> {
        if len > MAX_WORD_LENGTH {
            return None;
        }
        let pattern = Self {
            bits,
            len: len as u8,
        };
        let used = if len == MAX_WORD_LENGTH {
            u32::MAX
        } else {
            (1u32 << (len * 2)) - 1
        };
        if bits & !used != 0 || (0..len).any(|i| Feedback::from_code((bits >> (i * 2)) & 3).is_none()) {
            return None;
        }
        Some(pattern)
    }

    pub fn bits(self) -> u32 {
        self.bits
    }

    pub fn len(self) -> usize {
        self.len as usize
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Feedback at position `index`.
    pub fn get(self, index: usize) -> Feedback {
        debug_assert!(index < self.len());
        match (self.bits >> (index << 1)) & 3 {
            2 => Feedback::Correct,
            3 => Feedback::Present,
            _ => Feedback::Absent,
        }
    }

    pub fn iter(self) -> impl Iterator<Item = Feedback> {
        (0..self.len()).map(move |i| self.get(i))
    }

    /// Convert pattern to a vector of feedbacks
    pub fn to_feedbacks(self) -> Vec<Feedback> {
        self.iter().collect()
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_solved(self) -> bool {
        self.iter().all(|fb| fb == Feedback::Correct)
    }

    /// Score `guess` against `solution`.
    ///
    /// Two passes over the words: exact matches are marked first and consume
    /// their letter from the solution's letter counts, then the remaining
    /// positions take `Present` while the letter still has copies left.
    /// A letter therefore never gets more non-absent marks than it has
    /// copies in the solution.
    pub fn score(solution: &str, guess: &str) -> Self {
        let solution = solution.as_bytes();
        let guess = guess.as_bytes();
        debug_assert_eq!(solution.len(), guess.len());
        debug_assert!(guess.len() <= MAX_WORD_LENGTH);

        let mut remaining = [0u8; 26];
        let mut bits = 0u32;

        for (i, (&g, &s)) in guess.iter().zip(solution).enumerate() {
            if g == s {
                bits |= Feedback::Correct.code() << (i << 1);
            } else {
                remaining[(s - b'a') as usize] += 1;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if (bits >> (i << 1)) & 3 != 0 {
                continue;
            }
            let slot = &mut remaining[(g - b'a') as usize];
            let fb = if *slot > 0 {
                *slot -= 1;
                Feedback::Present
            } else {
                Feedback::Absent
            };
            bits |= fb.code() << (i << 1);
        }

        Self {
            bits,
            len: guess.len() as u8,
        }
    }

    /// Parse the dotted feedback form used at the boundary, e.g. guess
    /// `"slate"` with feedback `"sL..E"`: lowercase is correct, uppercase is
    /// present elsewhere, `.` is absent.
    pub fn parse(guess: &str, feedback: &str) -> Result<Self> {
        let invalid = |reason: String| WordleError::InvalidFeedback {
            feedback: feedback.to_string(),
            reason,
        };

        if feedback.chars().count() != guess.len() {
            return Err(WordleError::WordLength {
                word: feedback.to_string(),
                actual: feedback.chars().count(),
                expected: guess.len(),
            });
        }
        if guess.len() > MAX_WORD_LENGTH {
            return Err(WordleError::UnsupportedWordLength(guess.len()));
        }

        let mut feedbacks = Vec::with_capacity(guess.len());
        for (i, (c, g)) in feedback.chars().zip(guess.chars()).enumerate() {
            let fb = match c {
                '.' => Feedback::Absent,
                c if c.is_ascii_lowercase() => Feedback::Correct,
                c if c.is_ascii_uppercase() => Feedback::Present,
                c => return Err(invalid(format!("unexpected character '{}'", c))),
            };
            if fb != Feedback::Absent && c.to_ascii_lowercase() != g {
                return Err(invalid(format!(
                    "position {} names '{}' but the guess has '{}'",
                    i + 1,
                    c,
                    g
                )));
            }
            feedbacks.push(fb);
        }
        Ok(Self::from_feedbacks(&feedbacks))
    }

    /// Parse a pattern from a string like "gybbb" or "21000"
    pub fn parse_compact(s: &str) -> Result<Self> {
        if s.chars().count() > MAX_WORD_LENGTH {
            return Err(WordleError::UnsupportedWordLength(s.chars().count()));
        }
        let feedbacks = s
            .chars()
            .map(|c| {
                Feedback::from_compact_char(c).ok_or_else(|| WordleError::InvalidFeedback {
                    feedback: s.to_string(),
                    reason: format!("unexpected character '{}'", c),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_feedbacks(&feedbacks))
    }

    /// Render in the dotted form, e.g. `"sL..E"`.
    pub fn render(self, guess: &str) -> String {
        guess
            .chars()
            .zip(self.iter())
            .map(|(c, fb)| match fb {
                Feedback::Correct => c.to_ascii_lowercase(),
                Feedback::Present => c.to_ascii_uppercase(),
                Feedback::Absent => '.',
            })
            .collect()
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.iter().map(Feedback::to_emoji).collect()
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// Score `guess` against `solution`. See [`Pattern::score`].
pub fn score(solution: &str, guess: &str) -> Pattern {
    Pattern::score(solution, guess)
}

/// Score `guess` against `solution` and render the result in dotted form.
pub fn score_string(solution: &str, guess: &str) -> String {
    Pattern::score(solution, guess).render(guess)
}
