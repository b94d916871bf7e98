//! Path reconstruction from the visit map
//!
//! Walks predecessors backward from the goal and reverses the chain into
//! start-to-goal order.

use super::engine::Visit;
use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// The goal was never connected to the start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoSolution {
    pub start: Word,
    pub goal: Word,
}

impl fmt::Display for NoSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no solution: no ladder connects '{}' to '{}'",
            self.start, self.goal
        )
    }
}

impl std::error::Error for NoSolution {}

/// Rebuild the start-to-goal word sequence
///
/// Walks back from the goal through `came_from` links, collecting every
/// word including both endpoints, then reverses. A word without a visit
/// record encountered before the start is reached means the goal was
/// unreachable.
///
/// # Errors
///
/// Returns [`NoSolution`] when the predecessor chain from the goal does not
/// reach the start.
pub fn reconstruct(
    visits: &FxHashMap<Word, Visit>,
    start: &Word,
    goal: &Word,
) -> Result<Vec<Word>, NoSolution> {
    let mut path = Vec::new();
    let mut current = goal.clone();

    while current != *start {
        path.push(current.clone());
        match visits.get(&current) {
            Some(Visit {
                came_from: Some(prev),
                ..
            }) => current = prev.clone(),
            // Either no record at all or an unexpected parentless record;
            // both mean the chain never reaches the start.
            _ => {
                return Err(NoSolution {
                    start: start.clone(),
                    goal: goal.clone(),
                });
            }
        }
    }
    path.push(start.clone());
    path.reverse();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn visit(cost: u32, came_from: Option<&str>) -> Visit {
        Visit {
            cost,
            came_from: came_from.map(|t| word(t)),
        }
    }

    #[test]
    fn reconstruct_walks_chain_back_to_start() {
        let mut visits = FxHashMap::default();
        visits.insert(word("cat"), visit(0, None));
        visits.insert(word("cot"), visit(2, Some("cat")));
        visits.insert(word("dot"), visit(3, Some("cot")));
        visits.insert(word("dog"), visit(3, Some("dot")));

        let path = reconstruct(&visits, &word("cat"), &word("dog")).unwrap();

        assert_eq!(path, vec![word("cat"), word("cot"), word("dot"), word("dog")]);
    }

    #[test]
    fn reconstructed_steps_differ_by_one_letter() {
        let mut visits = FxHashMap::default();
        visits.insert(word("cat"), visit(0, None));
        visits.insert(word("cot"), visit(2, Some("cat")));
        visits.insert(word("dot"), visit(3, Some("cot")));

        let path = reconstruct(&visits, &word("cat"), &word("dot")).unwrap();

        for pair in path.windows(2) {
            assert_eq!(pair[0].hamming_distance(&pair[1]), 1);
        }
        assert_eq!(path.first(), Some(&word("cat")));
        assert_eq!(path.last(), Some(&word("dot")));
    }

    #[test]
    fn start_equals_goal_gives_single_word() {
        let mut visits = FxHashMap::default();
        visits.insert(word("cat"), visit(0, None));

        let path = reconstruct(&visits, &word("cat"), &word("cat")).unwrap();
        assert_eq!(path, vec![word("cat")]);
    }

    #[test]
    fn missing_goal_record_is_no_solution() {
        let mut visits = FxHashMap::default();
        visits.insert(word("cat"), visit(0, None));

        let err = reconstruct(&visits, &word("cat"), &word("dog")).unwrap_err();
        assert_eq!(err.start, word("cat"));
        assert_eq!(err.goal, word("dog"));
    }

    #[test]
    fn broken_chain_is_no_solution() {
        let mut visits = FxHashMap::default();
        visits.insert(word("cat"), visit(0, None));
        // dog claims a predecessor that was never visited
        visits.insert(word("dog"), visit(3, Some("dot")));

        assert!(reconstruct(&visits, &word("cat"), &word("dog")).is_err());
    }

    #[test]
    fn no_solution_display_names_both_words() {
        let err = NoSolution {
            start: word("cat"),
            goal: word("dog"),
        };
        let message = err.to_string();
        assert!(message.contains("no solution"));
        assert!(message.contains("cat"));
        assert!(message.contains("dog"));
    }
}
