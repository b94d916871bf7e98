//! Priority frontier for the search loop
//!
//! A binary min-heap of (word, priority) pairs. Duplicate entries for the
//! same word may coexist; nothing is replaced on insert. Equal priorities
//! pop in insertion order, which keeps the search deterministic for a given
//! dictionary ordering.

use crate::core::Word;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry {
    priority: u32,
    seq: u64,
    word: Word,
}

// Heap order is (priority, seq); seq is unique per frontier so two entries
// never compare equal and the word itself never participates in ordering.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.priority, self.seq).cmp(&(other.priority, other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Entry {}

/// Min-priority frontier with stable tie-breaking
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a (word, priority) pairing
    ///
    /// A word already present with another priority gets a second entry;
    /// stale entries are popped in their turn and skipped by the caller's
    /// cost check.
    pub fn insert(&mut self, word: Word, priority: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            word,
        }));
    }

    /// True iff no pairings remain
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pairings currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Remove and return the word with the smallest priority
    ///
    /// Ties go to the entry inserted earliest. Returns `None` on an empty
    /// frontier.
    pub fn pop(&mut self) -> Option<Word> {
        self.heap.pop().map(|Reverse(entry)| entry.word)
    }
}
