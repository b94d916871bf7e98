//! Implicit word graph
//!
//! Two words are adjacent when they differ in exactly one letter and both
//! belong to the dictionary. The graph is built once from the filtered word
//! list and never mutated during search.

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Adjacency map over the accepted word set
pub struct WordGraph {
    adjacency: FxHashMap<Word, Vec<Word>>,
}

/// All single-letter-substitution variants of `word` present in `word_set`
///
/// Candidates are generated position-major (index 0 upward) and
/// letter-minor (a through z, skipping the letter already in place), so the
/// returned order is deterministic. Every result differs from `word` in
/// exactly one position and is itself an accepted word; a word is never its
/// own neighbor.
#[must_use]
pub fn neighbors(word_set: &FxHashSet<Word>, word: &Word) -> Vec<Word> {
    let mut found = Vec::new();
    let mut candidate = word.bytes().to_vec();

    for i in 0..candidate.len() {
        let original = candidate[i];
        for letter in b'a'..=b'z' {
            if letter == original {
                continue;
            }
            candidate[i] = letter;
            if let Some(neighbor) = Word::from_ascii_lowercase(&candidate) {
                if word_set.contains(&neighbor) {
                    found.push(neighbor);
                }
            }
        }
        candidate[i] = original;
    }
    found
}

impl WordGraph {
    /// Build the graph from the filtered word sequence
    ///
    /// The sequence is deduplicated into the word set first; each distinct
    /// word's neighbor list is computed exactly once even when the word
    /// appears multiple times in the input.
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let word_set: FxHashSet<Word> = words.iter().cloned().collect();

        let adjacency = word_set
            .iter()
            .map(|word| (word.clone(), neighbors(&word_set, word)))
            .collect();

        Self { adjacency }
    }

    /// Neighbor list for a word, empty for words outside the graph
    ///
    /// A start word absent from the dictionary therefore has no outgoing
    /// edges and the search degenerates to frontier exhaustion instead of a
    /// lookup failure.
    #[must_use]
    pub fn neighbors_of(&self, word: &Word) -> &[Word] {
        self.adjacency.get(word).map_or(&[], Vec::as_slice)
    }

    /// Membership test for the accepted word set
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.adjacency.contains_key(word)
    }

    /// Number of distinct words in the graph
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// True iff the graph has no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
