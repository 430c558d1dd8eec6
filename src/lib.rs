//! Solver and console game for the classic 3×3 sliding-tile puzzle
//! (8-puzzle): board model, admissible heuristics, a bounded A* engine with
//! a solvability pre-check, and a small score ledger for the interactive
//! front end.

pub mod board;
pub mod heuristic;
pub mod play;
pub mod score;
pub mod search;
