//! Dictionary input for ladder construction
//!
//! The dictionary is a runtime input read once per run; nothing is embedded
//! in the binary or persisted between runs.

pub mod loader;

pub use loader::{filter_by_length, read_dictionary};
