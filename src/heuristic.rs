//! Distance estimates between two board configurations.
//!
//! Both functions are stateless and admissible for unit-cost slides;
//! `manhattan` is also consistent, which is what lets the A* driver return
//! provably shortest paths. `hamming` is weaker and kept for comparison and
//! experiments only.

use crate::board::{Board, CELLS, SIDE};

/// Sum over the 8 tiles of the grid distance between a tile's position in
/// `board` and its position in `goal`. The blank is excluded.
pub fn manhattan(board: &Board, goal: &Board) -> u32 {
    // Value -> index in the goal, so each tile is a single lookup.
    let mut goal_pos = [0usize; CELLS];
    for (i, &v) in goal.cells().iter().enumerate() {
        goal_pos[v as usize] = i;
    }

    let mut sum = 0u32;
    for (i, &v) in board.cells().iter().enumerate() {
        if v == 0 {
            continue;
        }
        let g = goal_pos[v as usize];
        let dr = (i / SIDE).abs_diff(g / SIDE);
        let dc = (i % SIDE).abs_diff(g % SIDE);
        sum += (dr + dc) as u32;
    }
    sum
}

/// Count of tiles (blank excluded) whose cell differs between `board` and
/// `goal`.
pub fn hamming(board: &Board, goal: &Board) -> u32 {
    board
        .cells()
        .iter()
        .zip(goal.cells().iter())
        .filter(|(&a, &b)| a != 0 && a != b)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_boards_score_zero() {
        assert_eq!(manhattan(&Board::SOLVED, &Board::SOLVED), 0);
        assert_eq!(hamming(&Board::SOLVED, &Board::SOLVED), 0);
    }

    #[test]
    fn single_slide_scores_one() {
        let one_away = Board::from_values([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(manhattan(&one_away, &Board::SOLVED), 1);
        assert_eq!(hamming(&one_away, &Board::SOLVED), 1);
    }

    #[test]
    fn manhattan_against_an_arbitrary_goal() {
        // Tile 1 moved from corner to corner: 2 + 2.
        let a = Board::from_values([1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        let g = Board::from_values([0, 2, 3, 4, 5, 6, 7, 8, 1]).unwrap();
        assert_eq!(manhattan(&a, &g), 4);
    }

    #[test]
    fn hamming_never_exceeds_manhattan() {
        let boards = [
            Board::from_values([2, 8, 3, 1, 6, 4, 7, 0, 5]).unwrap(),
            Board::from_values([8, 6, 7, 2, 5, 4, 3, 0, 1]).unwrap(),
            Board::from_values([0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap(),
        ];
        for b in &boards {
            assert!(hamming(b, &Board::SOLVED) <= manhattan(b, &Board::SOLVED));
        }
    }
}
