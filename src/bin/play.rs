use std::io::{self, Write};

use eight_puzzle::play::{self, Mode};
use eight_puzzle::score::ScoreStore;

const SCORES_FILE: &str = "scores.jsonl";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let scores_path = match args.len() {
        1 => SCORES_FILE.to_string(),
        2 => args[1].clone(),
        _ => {
            eprintln!("Usage: play [scores-file]");
            std::process::exit(2);
        }
    };

    let mut store = match ScoreStore::open(&scores_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to open score ledger {scores_path}: {e}");
            std::process::exit(1);
        }
    };

    println!("8-puzzle console game");
    if let Err(e) = main_menu(&mut store) {
        eprintln!("I/O error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = store.flush() {
        eprintln!("Failed to write score ledger: {e}");
        std::process::exit(1);
    }
}

fn main_menu(store: &mut ScoreStore) -> io::Result<()> {
    // No persistent stdin lock here: the modes lock stdin themselves.
    loop {
        println!();
        println!("=== 8-PUZZLE - MAIN MENU ===");
        println!("1) Play - manual mode");
        println!("2) Play - intelligent mode (A*)");
        println!("3) Score report");
        println!("4) Help");
        println!("5) Quit");
        print!("Select an option: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(()); // EOF
        }
        match line.trim().chars().next() {
            Some('1') => Mode::Manual.play(store)?,
            Some('2') => Mode::Intelligent.play(store)?,
            Some('3') => play::show_report(store),
            Some('4') => {
                println!("Manual mode: slide tiles by number (1-8) or move the blank");
                println!("with u/d/l/r; 'h' asks the solver for a bounded hint.");
                println!("Intelligent mode: enter start and goal boards and the solver");
                println!("finds a shortest move sequence, if one exists.");
            }
            Some('5') => {
                println!("Bye.");
                return Ok(());
            }
            _ => println!("Invalid option."),
        }
    }
}
