//! Heuristic-guided search over the word graph
//!
//! The traversal has the classic A* shape: frontier, cost map, predecessor
//! map. The cost model is not textbook A*, though: the step cost into a
//! neighbor is the neighbor's own heuristic value rather than a unit edge
//! cost with the heuristic added only for prioritization, and the loop
//! stops the first time the goal is dequeued. See DESIGN.md for why both
//! are kept.

use super::frontier::Frontier;
use super::graph::WordGraph;
use crate::core::Word;
use rustc_hash::FxHashMap;

/// Best known route to a word: cumulative cost plus the predecessor it was
/// reached from
///
/// Cost and predecessor live in one record so they can only ever be updated
/// together. The start word holds cost 0 and no predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub cost: u32,
    pub came_from: Option<Word>,
}

/// Run the search from `start` toward `goal`
///
/// Returns the visit map as it stands at loop termination, whether the goal
/// was reached or the frontier was exhausted. Path reconstruction decides
/// which of the two happened.
#[must_use]
pub fn search(
    graph: &WordGraph,
    heuristic: &FxHashMap<Word, u32>,
    start: &Word,
    goal: &Word,
) -> FxHashMap<Word, Visit> {
    let mut frontier = Frontier::new();
    frontier.insert(start.clone(), 0);

    let mut visits: FxHashMap<Word, Visit> = FxHashMap::default();
    visits.insert(
        start.clone(),
        Visit {
            cost: 0,
            came_from: None,
        },
    );

    while let Some(current) = frontier.pop() {
        if current == *goal {
            break;
        }

        let current_cost = visits[&current].cost;

        for neighbor in graph.neighbors_of(&current) {
            // Neighbors come from the graph, and the heuristic shares the
            // graph's key set, so the lookup cannot miss.
            let Some(&step) = heuristic.get(neighbor) else {
                continue;
            };
            let new_cost = current_cost + step;

            let improved = visits
                .get(neighbor)
                .is_none_or(|visit| new_cost < visit.cost);

            if improved {
                visits.insert(
                    neighbor.clone(),
                    Visit {
                        cost: new_cost,
                        came_from: Some(current.clone()),
                    },
                );
                frontier.insert(neighbor.clone(), new_cost);
            }
        }
    }

    visits
}
