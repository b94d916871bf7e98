//! Terminal output formatting

pub mod display;

pub use display::{print_path, print_summary};
