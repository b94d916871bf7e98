//! Word Ladder
//!
//! Finds a minimum-cost transformation path between two equal-length words,
//! where each step changes exactly one letter and every intermediate word
//! belongs to a supplied dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Word;
//! use word_ladder::search::{WordGraph, build_heuristic, reconstruct, search};
//!
//! let words: Vec<Word> = ["cat", "cot", "dot", "dog"]
//!     .iter()
//!     .map(|t| Word::new(*t).unwrap())
//!     .collect();
//!
//! let start = Word::new("cat").unwrap();
//! let goal = Word::new("dog").unwrap();
//!
//! let graph = WordGraph::build(&words);
//! let heuristic = build_heuristic(&words, &goal);
//! let visits = search(&graph, &heuristic, &start, &goal);
//!
//! let path = reconstruct(&visits, &start, &goal).unwrap();
//! assert_eq!(path.first(), Some(&start));
//! assert_eq!(path.last(), Some(&goal));
//! ```

// Core domain types
pub mod core;

// Dictionary input
pub mod dictionary;

// Graph search pipeline
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
