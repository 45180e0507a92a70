//! Example animating a backtracking solve in the terminal.
//!
//! This example plays the presentation-collaborator role: it drives the
//! solver with an observer that reprints the board after every placement
//! and retraction, sleeping between steps to make the search watchable.
//!
//! # Usage
//!
//! Solve the built-in classic puzzle at the default pace:
//!
//! ```sh
//! cargo run --example animate_solve
//! ```
//!
//! Slow the animation down (the delay must be within 10-1000 ms):
//!
//! ```sh
//! cargo run --example animate_solve -- --delay-ms 250
//! ```
//!
//! Solve your own puzzle, given as a grid string (digits for clues; `.`,
//! `_`, or `0` for empty cells; whitespace ignored):
//!
//! ```sh
//! cargo run --example animate_solve -- --grid "$(cat my_puzzle.txt)"
//! ```
//!
//! Skip the animation and only report the outcome:
//!
//! ```sh
//! cargo run --example animate_solve -- --summary-only
//! ```

use std::{
    process, thread,
    time::{Duration, Instant},
};

use clap::Parser;
use sudoscope_core::Board;
use sudoscope_solver::{BacktrackingSolver, SolveStep};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid string of the puzzle to solve; defaults to the classic puzzle.
    #[arg(long, value_name = "GRID")]
    grid: Option<String>,

    /// Pause between animation steps, in milliseconds (10-1000).
    #[arg(long, value_name = "MS", default_value_t = 40, value_parser = clap::value_parser!(u64).range(10..=1000))]
    delay_ms: u64,

    /// Report only the outcome, step counts, and elapsed time.
    #[arg(long)]
    summary_only: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let board = match &args.grid {
        Some(grid) => match grid.parse::<Board>() {
            Ok(board) => board,
            Err(err) => {
                eprintln!("Invalid grid: {err}");
                process::exit(2);
            }
        },
        None => Board::classic(),
    };
    if !board.is_consistent() {
        eprintln!("The given puzzle already violates a row, column, or box constraint.");
        process::exit(2);
    }

    println!("Puzzle:");
    println!("{board}");
    println!();

    let mut working = board.clone();
    let solver = BacktrackingSolver::new();
    let start = Instant::now();
    let (outcome, stats) = if args.summary_only {
        solver.solve(&mut working)
    } else {
        let delay = Duration::from_millis(args.delay_ms);
        let mut animate = |step: SolveStep, snapshot: &Board| {
            println!("{step}");
            println!("{snapshot}");
            println!();
            thread::sleep(delay);
        };
        solver.solve_with_observer(&mut working, &mut animate)
    };
    let elapsed = start.elapsed();

    if outcome.is_solved() {
        println!("Solution:");
        println!("{working}");
        println!();
        println!(
            "Solved in {:.2} ms ({} placements, {} retractions).",
            elapsed.as_secs_f64() * 1000.0,
            stats.placements(),
            stats.retractions(),
        );
    } else {
        println!(
            "No solution from this starting position ({} steps explored).",
            stats.total_steps()
        );
        process::exit(1);
    }
}
