use std::time::Instant;

use eight_puzzle::board::Board;
use eight_puzzle::search::{astar, SearchLimits, SearchOutcome};

fn usage() -> ! {
    eprintln!(
        "Usage: solve <start: 9 values 0..8> [goal: 9 values 0..8]\n\n\
         Example:\n  solve \"2 8 3 1 6 4 7 0 5\" \"1 2 3 8 0 4 7 6 5\"\n\n\
         The goal defaults to the canonical arrangement 1..8 with the blank last."
    );
    std::process::exit(2);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        usage();
    }

    let start: Board = match args[1].parse() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Invalid start board: {e}");
            std::process::exit(2);
        }
    };
    let goal: Board = if args.len() == 3 {
        match args[2].parse() {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Invalid goal board: {e}");
                std::process::exit(2);
            }
        }
    } else {
        Board::SOLVED
    };

    let t0 = Instant::now();
    let res = astar::solve(&start, &goal, SearchLimits::default());
    let elapsed = t0.elapsed();

    match res.outcome {
        SearchOutcome::Found(path) => {
            println!(
                "Optimal solution: {} moves ({} expansions, {:.1?})",
                path.len() - 1,
                res.stats.expansions,
                elapsed
            );
            for (i, step) in path.iter().enumerate() {
                println!("Step {i}:");
                println!("{step}");
            }
        }
        SearchOutcome::Unsolvable => {
            println!("Unsolvable: start and goal lie in different parity classes.");
            std::process::exit(1);
        }
        SearchOutcome::BoundExceeded => {
            println!(
                "Inconclusive: budget exhausted after {} expansions ({:.1?}). \
                 Retry with larger limits.",
                res.stats.expansions, elapsed
            );
            std::process::exit(1);
        }
    }
}
