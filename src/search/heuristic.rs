//! Hamming-distance heuristic
//!
//! Maps every accepted word to its letter distance from the goal. Built
//! once per (dictionary, goal) pair, before the search starts, and shares
//! its key set with the graph.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Build the heuristic map for the filtered word sequence
///
/// Each distinct word maps to the count of positions where its letter
/// differs from the goal's. The goal itself maps to 0 when present.
#[must_use]
pub fn build_heuristic(words: &[Word], goal: &Word) -> FxHashMap<Word, u32> {
    words
        .iter()
        .map(|word| (word.clone(), word.hamming_distance(goal)))
        .collect()
}
