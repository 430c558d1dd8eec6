//! Uniform-cost breadth-first oracle.
//!
//! Heuristic-free shortest distances over the same `neighbors()` relation
//! the A* driver expands. Slow but trivially correct, which is exactly what
//! the optimality and parity cross-check tests need.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::board::Board;

/// Shortest slide distance from `start` to `goal`, or `None` if `goal` is
/// not reachable within `max_depth` slides.
pub fn shortest_distance(start: &Board, goal: &Board, max_depth: u32) -> Option<u32> {
    let mut dist: FxHashMap<Board, u32> = FxHashMap::default();
    let mut queue: VecDeque<Board> = VecDeque::new();

    dist.insert(*start, 0);
    queue.push_back(*start);

    while let Some(cur) = queue.pop_front() {
        let d = dist[&cur];
        if cur == *goal {
            return Some(d);
        }
        if d == max_depth {
            continue;
        }
        for succ in cur.neighbors() {
            if !dist.contains_key(&succ) {
                dist.insert(succ, d + 1);
                queue.push_back(succ);
            }
        }
    }
    None
}

/// All boards within `max_depth` slides of `start` (inclusive of `start`).
pub fn reachable_within(start: &Board, max_depth: u32) -> FxHashSet<Board> {
    let mut seen: FxHashSet<Board> = FxHashSet::default();
    let mut queue: VecDeque<(Board, u32)> = VecDeque::new();

    seen.insert(*start);
    queue.push_back((*start, 0));

    while let Some((cur, d)) = queue.pop_front() {
        if d == max_depth {
            continue;
        }
        for succ in cur.neighbors() {
            if seen.insert(succ) {
                queue.push_back((succ, d + 1));
            }
        }
    }
    seen
}
