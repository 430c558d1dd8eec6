//! Bounded best-first search over board configurations.
//!
//! The driver lives in [`astar`]; [`frontier`] holds the priority structure
//! and the dominance-pruned visited set; [`bfs`] is the uniform-cost oracle
//! the tests cross-check optimality against.
//!
//! A search is a pure function of `(start, goal, limits)`: it allocates and
//! owns its frontier, visited set and node arena, touches nothing outside
//! the call, and is safe to run concurrently with independent arguments.
//! The only built-in stopping signals are the two budgets in
//! [`SearchLimits`]; a caller that needs responsive cancellation has to
//! wrap the search on its own thread.

pub mod astar;
pub mod bfs;
pub mod frontier;

use crate::board::Board;

#[derive(Debug, Clone, Copy)]
/// Search budgets used to bound time and memory consumption.
///
/// These are not byte limits but correlate strongly with both:
/// - `max_expansions`: number of nodes popped from the frontier
/// - `max_frontier`: soft cap on the frontier size; once an insertion lands
///   above it, the remaining successors of the current expansion are dropped
pub struct SearchLimits {
    pub max_expansions: u64,
    pub max_frontier: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_expansions: 200_000,
            max_frontier: 500_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Running counters tracked during one search invocation.
pub struct SearchStats {
    /// Nodes popped from the frontier (stale pops included).
    pub expansions: u64,
    /// Nodes pushed onto the frontier (root included).
    pub generated: u64,
    /// High-water mark of the frontier size.
    pub max_frontier_len: usize,
    /// Whether the frontier cap ever caused successors to be dropped. When
    /// set, frontier exhaustion is no longer proof of unreachability.
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Terminal outcome of a search. Never a panic on a well-formed board.
pub enum SearchOutcome {
    /// Shortest path from start to goal, both endpoints included.
    Found(Vec<Board>),
    /// Provably unreachable: mismatched permutation parity, or the whole
    /// parity class was exhausted without truncation.
    Unsolvable,
    /// Inconclusive: a budget ran out before reachability was resolved.
    /// Retrying with larger [`SearchLimits`] may still succeed.
    BoundExceeded,
}

#[derive(Debug, Clone)]
/// Outcome plus the counters accumulated while producing it.
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchResult {
    /// The path if the search succeeded.
    pub fn path(&self) -> Option<&[Board]> {
        match &self.outcome {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Number of slides in a found path (`path.len() - 1`).
    pub fn moves(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }
}
