//! End-to-end ladder finding
//!
//! Wires the dictionary loader, graph builder, heuristic, search engine,
//! and path reconstructor into the one operation the CLI exposes.

use crate::core::{Word, WordError};
use crate::dictionary::loader::{filter_by_length, read_dictionary};
use crate::search::{WordGraph, build_heuristic, reconstruct, search};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// Configuration for one ladder run
pub struct FindConfig {
    pub dictionary: PathBuf,
    pub start: String,
    pub goal: String,
}

/// Result of a successful ladder run
#[derive(Debug)]
pub struct LadderResult {
    /// Start-to-goal word sequence, endpoints included
    pub path: Vec<Word>,
    /// Accumulated cost recorded for the goal
    pub cost: u32,
    /// Number of words that received a visit record
    pub explored: usize,
    /// Size of the filtered word set the graph was built from
    pub dictionary_size: usize,
}

impl LadderResult {
    /// Number of single-letter transformations in the path
    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

fn parse_word(text: &str, role: &str) -> Result<Word> {
    Word::new(text).map_err(|e: WordError| anyhow::anyhow!("invalid {role} word '{text}': {e}"))
}

/// Find a minimum-cost ladder from start to goal through the dictionary
///
/// Validates the words before touching the file, reads and filters the
/// dictionary, builds the graph and heuristic, runs the search, and
/// reconstructs the path.
///
/// # Errors
///
/// Returns an error when either word is invalid, the lengths differ, the
/// dictionary cannot be read, or no ladder connects the two words. Every
/// failure carries a printable message; the binary exits non-zero on all of
/// them.
pub fn find_path(config: &FindConfig) -> Result<LadderResult> {
    let start = parse_word(&config.start, "start")?;
    let goal = parse_word(&config.goal, "goal")?;

    if start.len() != goal.len() {
        bail!(
            "start word '{start}' ({} letters) and goal word '{goal}' ({} letters) \
             must have the same length",
            start.len(),
            goal.len()
        );
    }

    let raw = read_dictionary(&config.dictionary).with_context(|| {
        format!(
            "failed to read dictionary file '{}'",
            config.dictionary.display()
        )
    })?;
    let words = filter_by_length(&raw, start.len());

    let graph = WordGraph::build(&words);
    let heuristic = build_heuristic(&words, &goal);

    let visits = search(&graph, &heuristic, &start, &goal);
    let path = reconstruct(&visits, &start, &goal)?;

    let cost = visits.get(&goal).map_or(0, |visit| visit.cost);

    Ok(LadderResult {
        path,
        cost,
        explored: visits.len(),
        dictionary_size: graph.len(),
    })
}
