//! The odd-width reachability theorem, checked against exhaustive BFS on a
//! reduced slice of the state space.

use eight_puzzle::board::Board;
use eight_puzzle::search::{astar, bfs, SearchLimits, SearchOutcome};

#[test]
fn every_reachable_board_shares_the_start_parity() {
    let starts = [
        Board::SOLVED,
        Board::from_values([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap(), // odd class
        Board::from_values([1, 2, 3, 5, 0, 6, 4, 7, 8]).unwrap(),
    ];
    for start in starts {
        for b in bfs::reachable_within(&start, 6) {
            assert_eq!(b.parity(), start.parity(), "{b:?} left the parity class");
        }
    }
}

#[test]
fn same_parity_boards_are_mutually_reachable_in_the_sampled_slice() {
    // Everything BFS reaches from the goal must be reachable back, and the
    // solver must agree. Depth 5 keeps the slice small.
    let reachable = bfs::reachable_within(&Board::SOLVED, 5);
    for b in &reachable {
        let back = bfs::shortest_distance(b, &Board::SOLVED, 5);
        assert!(back.is_some(), "{b:?} cannot return to the goal");
        let res = astar::solve(b, &Board::SOLVED, SearchLimits::default());
        assert_eq!(res.moves(), back.map(|d| d as usize));
    }
}

#[test]
fn mismatched_parity_is_rejected_before_any_expansion() {
    // Odd number of tile swaps relative to the goal, same blank cell.
    let start = Board::from_values([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    let res = astar::solve(&start, &Board::SOLVED, SearchLimits::default());
    assert_eq!(res.outcome, SearchOutcome::Unsolvable);
    assert_eq!(res.stats.expansions, 0, "the main loop must not run");
    assert_eq!(res.stats.generated, 0);
}

#[test]
fn odd_class_goals_are_reachable_from_odd_class_starts() {
    // Neither board can reach the canonical goal, but they reach each other:
    // the check must compare the two supplied parities, not assume the
    // canonical target.
    let start = Board::from_values([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    let goal = Board::from_values([2, 1, 3, 4, 5, 6, 0, 7, 8]).unwrap();
    assert!(!start.is_solvable());
    assert!(!goal.is_solvable());
    let res = astar::solve(&start, &goal, SearchLimits::default());
    let oracle = bfs::shortest_distance(&start, &goal, 10).unwrap();
    assert_eq!(res.moves(), Some(oracle as usize));
}

#[test]
fn slide_and_inverse_return_to_the_start() {
    use eight_puzzle::board::Move;
    let boards = [
        Board::SOLVED,
        Board::from_values([1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap(),
        Board::from_values([0, 5, 2, 1, 4, 6, 7, 3, 8]).unwrap(),
    ];
    for b in boards {
        for mv in Move::ALL {
            if let Some(there) = b.slide_blank(mv) {
                assert_eq!(there.slide_blank(mv.opposite()), Some(b));
            }
        }
    }
}
