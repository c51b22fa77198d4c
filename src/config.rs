//! Tunable settings for the strategies and the solver.

/// Word length used when nothing else is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Settings shared by the strategies and the solve loop.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub word_length: usize,
    /// Upper bound on the length of ranked guess lists.
    pub max_guesses_returned: usize,
    /// Zero the frequency of letters already fixed on the board before
    /// scoring guesses by entropy.
    pub exclude_known_letters: bool,
    pub partition: PartitionWeights,
    pub lookahead: LookaheadConfig,
    /// Candidate count above which the blended strategy uses entropy
    /// instead of exhaustive search.
    pub blend_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses_returned: 10,
            exclude_known_letters: true,
            partition: PartitionWeights::default(),
            lookahead: LookaheadConfig::default(),
            blend_threshold: 99,
        }
    }
}

/// Tie-breaking bonuses for the partition strategy. A guess scores its
/// group count plus these bonuses, so both must stay below 1 in total for
/// the group count to dominate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionWeights {
    /// Multiplied by `1 / largest group size`.
    pub balance_weight: f64,
    /// Added when the guess is itself a live candidate.
    pub candidate_bonus: f64,
}

impl Default for PartitionWeights {
    fn default() -> Self {
        Self {
            balance_weight: 0.5,
            candidate_bonus: 0.25,
        }
    }
}

/// How the lookahead strategy evaluates its shortlisted guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookaheadMode {
    /// Recursive expected-guess estimate with alpha pruning and memoization.
    Expected,
    /// Full explorer run per partition, scored by visited nodes.
    Exhaustive,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookaheadConfig {
    /// How many guesses the sub-strategy shortlists.
    pub prune_width: usize,
    /// How many follow-up guesses each recursive step considers.
    pub inner_width: usize,
    pub mode: LookaheadMode,
    /// Pick the depth from the candidate count; otherwise use `fixed_depth`.
    pub adaptive: bool,
    pub fixed_depth: usize,
    /// At or below this many candidates the candidates themselves are
    /// always considered as guesses.
    pub small_set_threshold: usize,
    /// Above this many candidates no lookahead is done.
    pub max_candidates: usize,
}

impl Default for LookaheadConfig {
    fn default() -> Self {
        Self {
            prune_width: 100,
            inner_width: 25,
            mode: LookaheadMode::Expected,
            adaptive: true,
            fixed_depth: 1,
            small_set_threshold: 6,
            max_candidates: 100,
        }
    }
}

impl LookaheadConfig {
    /// Lookahead depth for a candidate set of the given size. Zero means
    /// the sub-strategy's ranking is used as is.
    pub fn depth_for(&self, candidates: usize) -> usize {
        if candidates > self.max_candidates {
            return 0;
        }
        if !self.adaptive {
            return self.fixed_depth;
        }
        match candidates {
            0..=10 => 3,
            11..=30 => 2,
            _ => 1,
        }
    }
}
