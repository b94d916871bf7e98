//! Dictionary loading utilities
//!
//! Reads a raw word list from disk and filters it down to the words that
//! can participate in a ladder of a given length.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Read the raw dictionary file to a string
///
/// The file is read to completion and the handle released before any graph
/// construction begins.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::dictionary::loader::read_dictionary;
///
/// let raw = read_dictionary("data/words.txt").unwrap();
/// println!("Read {} bytes", raw.len());
/// ```
pub fn read_dictionary<P: AsRef<Path>>(path: P) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Filter raw dictionary lines to valid words of the target length
///
/// Lines are trimmed of surrounding whitespace; lines of the wrong length or
/// that fail word validation are skipped. Order is preserved and no
/// deduplication happens here — the graph builder dedups when it forms the
/// word set.
#[must_use]
pub fn filter_by_length(raw: &str, target_length: usize) -> Vec<Word> {
    raw.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.len() == target_length {
                Word::new(trimmed).ok()
            } else {
                None
            }
        })
        .collect()
}
