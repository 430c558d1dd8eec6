//! Console game modes.
//!
//! The two ways to play are a closed set of variants dispatched through
//! [`Mode::play`], both borrowing the caller-owned [`ScoreStore`]: the
//! search core never touches it, and flushing remains the caller's call.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use rand::thread_rng;

use crate::board::{Board, Move};
use crate::score::ScoreStore;
use crate::search::astar;
use crate::search::{SearchLimits, SearchOutcome};

/// Slides used to scramble a fresh manual-mode board.
const SCRAMBLE_STEPS: usize = 60;

/// Tighter budget for in-game hints, so a hint never stalls the prompt.
const HINT_LIMITS: SearchLimits = SearchLimits {
    max_expansions: 5_000,
    max_frontier: 200_000,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Scrambled board, slide by hand, optional solver hints.
    Manual,
    /// Enter start and goal, let the solver produce the optimal path.
    Intelligent,
}

impl Mode {
    pub fn play(self, store: &mut ScoreStore) -> io::Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        match self {
            Mode::Manual => play_manual(store, &mut input),
            Mode::Intelligent => play_intelligent(&mut input),
        }
    }
}

/// Score awarded for finishing a manual game in `moves` slides.
pub fn score_for_moves(moves: usize) -> u32 {
    1000u32.saturating_sub(moves as u32 * 10)
}

fn prompt<R: BufRead>(input: &mut R, msg: &str) -> io::Result<String> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn read_board<R: BufRead>(input: &mut R, what: &str) -> io::Result<Board> {
    loop {
        let line = prompt(
            input,
            &format!("{what} (9 values 0..8, 0 = blank, space separated)\n> "),
        )?;
        match line.parse::<Board>() {
            Ok(board) => return Ok(board),
            Err(e) => println!("Invalid board: {e}. Try again."),
        }
    }
}

fn play_manual<R: BufRead>(store: &mut ScoreStore, input: &mut R) -> io::Result<()> {
    let alias = prompt(input, "MANUAL mode. Alias for the score board (empty to skip): ")?;

    let mut rng = thread_rng();
    let mut board = Board::SOLVED.scrambled(&mut rng, SCRAMBLE_STEPS);
    let mut history: Vec<Move> = Vec::new();

    loop {
        println!("{board}");
        println!("Moves so far: {}", history.len());
        let cmd = prompt(
            input,
            "[m]ove tile, [u/d/l/r] slide blank, [h]int, [n]ew scramble, [q]uit\n> ",
        )?;
        match cmd.chars().next() {
            Some('m') => {
                let arg = prompt(input, "Tile to slide (1-8): ")?;
                match arg.parse::<u8>() {
                    Ok(tile @ 1..=8) => match board.slide_tile(tile) {
                        Some(next) => {
                            history.push(slide_direction(&board, &next));
                            board = next;
                        }
                        None => println!("Tile {tile} is not next to the blank."),
                    },
                    _ => println!("Not a tile number."),
                }
            }
            Some(c @ ('u' | 'd' | 'l' | 'r')) => {
                let mv = match c {
                    'u' => Move::Up,
                    'd' => Move::Down,
                    'l' => Move::Left,
                    _ => Move::Right,
                };
                match board.slide_blank(mv) {
                    Some(next) => {
                        history.push(mv);
                        board = next;
                    }
                    None => println!("The blank cannot move {mv}."),
                }
            }
            Some('h') => match astar::solve(&board, &Board::SOLVED, HINT_LIMITS).outcome {
                SearchOutcome::Found(path) if path.len() >= 2 => {
                    let next = path[1];
                    history.push(slide_direction(&board, &next));
                    board = next;
                    println!("Hint applied.");
                }
                SearchOutcome::Found(_) => println!("Already solved."),
                _ => println!("No hint found within the hint budget."),
            },
            Some('n') => {
                board = Board::SOLVED.scrambled(&mut rng, SCRAMBLE_STEPS);
                history.clear();
                println!("New scramble.");
            }
            Some('q') => {
                println!("Leaving manual mode.");
                return Ok(());
            }
            _ => println!("Unknown command."),
        }

        if board == Board::SOLVED {
            println!("{board}");
            println!("Solved in {} moves!", history.len());
            if !alias.is_empty() {
                let points = score_for_moves(history.len());
                store.record(&alias, points);
                println!("Recorded {alias} -> {points} pts");
            }
            return Ok(());
        }
    }
}

fn play_intelligent<R: BufRead>(input: &mut R) -> io::Result<()> {
    println!("INTELLIGENT mode: the solver finds an optimal path.");
    let start = read_board(input, "Start board")?;
    let line = prompt(input, "Goal board, or 'd' for the default 1..8 0\n> ")?;
    let goal = if matches!(line.chars().next(), Some('d' | 'D')) {
        Board::SOLVED
    } else {
        match line.parse::<Board>() {
            Ok(b) => b,
            Err(e) => {
                println!("Invalid board: {e}.");
                read_board(input, "Goal board")?
            }
        }
    };

    let t0 = Instant::now();
    let res = astar::solve(&start, &goal, SearchLimits::default());
    let elapsed = t0.elapsed();

    match res.outcome {
        SearchOutcome::Found(path) => {
            println!(
                "Found an optimal solution: {} moves in {:.1?} ({} expansions).",
                path.len() - 1,
                elapsed,
                res.stats.expansions
            );
            let show = prompt(input, "Show step by step? (y/n): ")?;
            if matches!(show.chars().next(), Some('y' | 'Y')) {
                for (i, step) in path.iter().enumerate() {
                    println!("Step {i}:");
                    println!("{step}");
                    if i + 1 < path.len() {
                        prompt(input, "Enter for the next step...")?;
                    }
                }
            }
        }
        SearchOutcome::Unsolvable => {
            println!("Unsolvable: the start and goal are in different parity classes.");
        }
        SearchOutcome::BoundExceeded => {
            println!(
                "Inconclusive: search budget exhausted after {} expansions ({:.1?}).",
                res.stats.expansions, elapsed
            );
        }
    }
    Ok(())
}

/// Direction the blank moved between two adjacent boards (for the history
/// log). Falls back to `Up` for non-adjacent inputs, which the callers
/// never produce.
fn slide_direction(from: &Board, to: &Board) -> Move {
    for mv in Move::ALL {
        if from.slide_blank(mv).as_ref() == Some(to) {
            return mv;
        }
    }
    Move::Up
}

/// Print the ledger sorted by points, best first.
pub fn show_report(store: &ScoreStore) {
    if store.is_empty() {
        println!("No scores recorded yet.");
        return;
    }
    println!("{:<16} {:>6}  {}", "Alias", "Points", "Recorded (unix)");
    println!("----------------------------------------");
    for entry in store.ranked() {
        println!(
            "{:<16} {:>6}  {}",
            entry.alias, entry.points, entry.unix_secs
        );
    }
}
