//! A* driver over the slide graph.
//!
//! Nodes live in an arena and refer to their parent by index, so the search
//! tree (a DAG converging backward to the start) needs no shared-ownership
//! pointers: reconstruction walks indices and the whole arena is dropped
//! when the search returns.

use crate::board::Board;
use crate::heuristic;
use crate::search::frontier::{Frontier, NodeId, OpenEntry, VisitedSet};
use crate::search::{SearchLimits, SearchOutcome, SearchResult, SearchStats};

#[derive(Debug, Clone, Copy)]
struct Node {
    board: Board,
    g: u32,
    parent: Option<NodeId>,
}

/// Find a shortest slide sequence from `start` to `goal` within `limits`.
///
/// Outcomes:
/// - [`SearchOutcome::Found`]: optimal path, both endpoints included. When
///   `stats.truncated` is set the path is still optimal among explored
///   nodes, but the soft frontier cap dropped successors, so completeness
///   no longer holds.
/// - [`SearchOutcome::Unsolvable`]: the parities of `start` and `goal`
///   differ (checked before any expansion, and against the *supplied*
///   goal, not the canonical one), or the frontier emptied without ever
///   being truncated.
/// - [`SearchOutcome::BoundExceeded`]: a budget ran out first, or the
///   frontier emptied after truncation dropped successors.
pub fn solve(start: &Board, goal: &Board, limits: SearchLimits) -> SearchResult {
    let mut stats = SearchStats::default();

    // Cheap global pre-check: on an odd-width board, reachability is exactly
    // parity equality. Hopeless inputs fail before any search.
    if start.parity() != goal.parity() {
        return SearchResult {
            outcome: SearchOutcome::Unsolvable,
            stats,
        };
    }

    let mut arena: Vec<Node> = Vec::new();
    let mut frontier = Frontier::new();
    let mut visited = VisitedSet::new();

    arena.push(Node {
        board: *start,
        g: 0,
        parent: None,
    });
    frontier.push(OpenEntry {
        f: heuristic::manhattan(start, goal),
        g: 0,
        node: 0,
    });
    stats.generated = 1;
    stats.max_frontier_len = 1;

    loop {
        if stats.expansions > limits.max_expansions {
            return SearchResult {
                outcome: SearchOutcome::BoundExceeded,
                stats,
            };
        }
        let Some(entry) = frontier.pop() else {
            break;
        };
        stats.expansions += 1;
        let node = arena[entry.node];

        // Stale heap entry: a cheaper or equal route was settled since this
        // one was pushed.
        if visited.dominates(&node.board, node.g) {
            continue;
        }
        visited.record(node.board, node.g);

        if node.board == *goal {
            return SearchResult {
                outcome: SearchOutcome::Found(reconstruct(&arena, entry.node)),
                stats,
            };
        }

        for succ in node.board.neighbors() {
            let g = node.g + 1;
            if visited.dominates(&succ, g) {
                continue;
            }
            let f = g + heuristic::manhattan(&succ, goal);
            let id = arena.len();
            arena.push(Node {
                board: succ,
                g,
                parent: Some(entry.node),
            });
            frontier.push(OpenEntry { f, g, node: id });
            stats.generated += 1;
            stats.max_frontier_len = stats.max_frontier_len.max(frontier.len());
            if frontier.len() > limits.max_frontier {
                // Soft cap: drop the remaining successors of this expansion
                // instead of failing the whole search.
                stats.truncated = true;
                break;
            }
        }
    }

    // The frontier emptied. Past the parity check this only happens when
    // the cap dropped successors, which is inconclusive. An untruncated
    // exhaustion would mean neighbor generation lost part of the parity
    // class, and that must not be reported as a budget problem.
    let outcome = if stats.truncated {
        SearchOutcome::BoundExceeded
    } else {
        SearchOutcome::Unsolvable
    };
    SearchResult { outcome, stats }
}

fn reconstruct(arena: &[Node], last: NodeId) -> Vec<Board> {
    let mut path = Vec::new();
    let mut cur = Some(last);
    while let Some(id) = cur {
        path.push(arena[id].board);
        cur = arena[id].parent;
    }
    path.reverse();
    path
}
