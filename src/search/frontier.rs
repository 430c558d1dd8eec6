//! Priority frontier and dominance-pruned visited set.
//!
//! The frontier yields the open node with the smallest estimated total cost
//! `f`. Equal-`f` ties prefer the **smaller** accumulated cost `g`: with a
//! consistent heuristic, the deeper node's estimate is no more informed, and
//! favoring it over-expands already-deep paths. The tie-break is the part of
//! the ordering that is easiest to get backwards, so it is pinned down by an
//! explicit [`Ord`] impl and its own tests rather than folded into the
//! driver.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::board::Board;

/// Index of a node in the search arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Heap entry: the node's priority key plus its arena index.
pub struct OpenEntry {
    pub f: u32,
    pub g: u32,
    pub node: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so "better" must compare as Greater:
        // smaller f first, then smaller g, then older node for determinism.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
/// Open list ordered by [`OpenEntry`].
pub struct Frontier {
    heap: BinaryHeap<OpenEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, entry: OpenEntry) {
        self.heap.push(entry);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[derive(Debug, Default)]
/// Best accumulated cost seen per distinct board.
///
/// Grows monotonically during one search and is dropped with it; pruning
/// against it is what keeps the undirected slide graph from being cycled
/// forever and bounds memory by distinct boards rather than paths.
pub struct VisitedSet {
    best_g: FxHashMap<Board, u32>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A route to `board` at cost `<= g` is already known.
    #[inline]
    pub fn dominates(&self, board: &Board, g: u32) -> bool {
        matches!(self.best_g.get(board), Some(&seen) if seen <= g)
    }

    /// Record `g` as the best known cost for `board`.
    #[inline]
    pub fn record(&mut self, board: Board, g: u32) {
        self.best_g.insert(board, g);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.best_g.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.best_g.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn smaller_f_pops_first() {
        let mut fr = Frontier::new();
        fr.push(OpenEntry { f: 7, g: 2, node: 0 });
        fr.push(OpenEntry { f: 3, g: 3, node: 1 });
        fr.push(OpenEntry { f: 5, g: 0, node: 2 });
        assert_eq!(fr.pop().map(|e| e.node), Some(1));
        assert_eq!(fr.pop().map(|e| e.node), Some(2));
        assert_eq!(fr.pop().map(|e| e.node), Some(0));
        assert!(fr.pop().is_none());
    }

    #[test]
    fn equal_f_prefers_smaller_g() {
        let mut fr = Frontier::new();
        fr.push(OpenEntry { f: 6, g: 5, node: 0 });
        fr.push(OpenEntry { f: 6, g: 1, node: 1 });
        fr.push(OpenEntry { f: 6, g: 3, node: 2 });
        assert_eq!(fr.pop().map(|e| e.g), Some(1));
        assert_eq!(fr.pop().map(|e| e.g), Some(3));
        assert_eq!(fr.pop().map(|e| e.g), Some(5));
    }

    #[test]
    fn equal_f_and_g_pops_older_node() {
        let mut fr = Frontier::new();
        fr.push(OpenEntry { f: 4, g: 2, node: 9 });
        fr.push(OpenEntry { f: 4, g: 2, node: 3 });
        assert_eq!(fr.pop().map(|e| e.node), Some(3));
    }

    #[test]
    fn visited_dominance_is_less_or_equal() {
        let mut visited = VisitedSet::new();
        let b = Board::SOLVED;
        assert!(!visited.dominates(&b, 0));
        visited.record(b, 4);
        assert!(visited.dominates(&b, 4));
        assert!(visited.dominates(&b, 7));
        assert!(!visited.dominates(&b, 3));
        // A cheaper route replaces the entry.
        visited.record(b, 2);
        assert!(visited.dominates(&b, 2));
    }
}
