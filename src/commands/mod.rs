//! Command implementations

pub mod find;

pub use find::{FindConfig, LadderResult, find_path};
