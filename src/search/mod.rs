//! Word-ladder graph search
//!
//! The pieces of the search pipeline: the implicit word graph, the
//! Hamming-distance heuristic, the priority frontier, the search loop, and
//! path reconstruction.

pub mod engine;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod path;

pub use engine::{Visit, search};
pub use frontier::Frontier;
pub use graph::{WordGraph, neighbors};
pub use heuristic::build_heuristic;
pub use path::{NoSolution, reconstruct};
