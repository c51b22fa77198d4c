//! Narrowing word lists by a compiled query or by a single scored guess.
//!
//! Every filter keeps the relative order of the input, so filtering an
//! already filtered list with a further constraint gives the same list as
//! filtering the original with both.

use std::collections::{BTreeMap, BTreeSet};

use crate::feedback::Pattern;
use crate::query::Query;

/// Words that satisfy `query`.
pub fn filter_by_query(query: &Query, words: &[String]) -> Vec<String> {
    words.iter().filter(|w| query.satisfies(w)).cloned().collect()
}

/// Words that would produce exactly `target` when `guess` is scored against
/// them.
pub fn filter_by_pattern(guess: &str, target: Pattern, words: &[String]) -> Vec<String> {
    words
        .iter()
        .filter(|w| Pattern::score(w, guess) == target)
        .cloned()
        .collect()
}

/// Number of words that satisfy `query`.
pub fn count_matching(query: &Query, words: &[String]) -> usize {
    words.iter().filter(|w| query.satisfies(w)).count()
}

/// Group `words` by the pattern `guess` scores against each of them.
pub fn partition(guess: &str, words: &[String]) -> BTreeMap<Pattern, Vec<String>> {
    let mut groups: BTreeMap<Pattern, Vec<String>> = BTreeMap::new();
    for word in words {
        groups
            .entry(Pattern::score(word, guess))
            .or_default()
            .push(word.clone());
    }
    groups
}

/// Group sizes of [`partition`] without collecting the words.
pub fn group_sizes(guess: &str, words: &[String]) -> BTreeMap<Pattern, usize> {
    let mut sizes = BTreeMap::new();
    for word in words {
        *sizes.entry(Pattern::score(word, guess)).or_insert(0) += 1;
    }
    sizes
}

/// Number of groups `guess` splits `words` into, and the size of the
/// largest one.
pub fn score_group_count(guess: &str, words: &[String]) -> (usize, usize) {
    let sizes = group_sizes(guess, words);
    let largest = sizes.values().copied().max().unwrap_or(0);
    (sizes.len(), largest)
}

/// The words in the group `guess` puts under `target`.
pub fn score_group(guess: &str, target: Pattern, words: &[String]) -> Vec<String> {
    filter_by_pattern(guess, target, words)
}

/// Every pattern `guess` can receive against at least one of `words`.
pub fn scores_by_guess(guess: &str, words: &[String]) -> BTreeSet<Pattern> {
    words.iter().map(|w| Pattern::score(w, guess)).collect()
}
