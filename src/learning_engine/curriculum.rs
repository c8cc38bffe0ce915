//! The fixed curriculum graph.
//!
//! Every combination of operation × complement requirement × digit level,
//! generated in one canonical nested order. Level adjacency ("next level")
//! is purely positional, so the sequence must be identical on every call.

use crate::learning_engine::models::{ComplementRequirement, DigitLevel, Level, Operation};

/// Build all 60 levels: outer loop operation, middle loop complement,
/// inner loop digit level. Every level starts locked with zeroed counters.
pub fn build_all_levels() -> Vec<Level> {
    let mut levels = Vec::with_capacity(
        Operation::ALL.len() * ComplementRequirement::ALL.len() * DigitLevel::ALL.len(),
    );
    for operation in Operation::ALL {
        for complement in ComplementRequirement::ALL {
            for digit_level in DigitLevel::ALL {
                levels.push(Level::new(operation, complement, digit_level));
            }
        }
    }
    levels
}

/// Successor of `current` by array position, or `None` at the end of the
/// curriculum. Adjacency lives in this one function so an explicit-graph
/// redesign stays a local change.
pub fn next_level_index(all_levels: &[Level], current: usize) -> Option<usize> {
    let next = current + 1;
    (next < all_levels.len()).then_some(next)
}
