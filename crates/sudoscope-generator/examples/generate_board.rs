//! Example demonstrating random board generation.
//!
//! This example shows how to:
//! - Generate a board from a fresh random seed
//! - Replay a board from a seed or a memorable phrase
//! - Filter for solvable boards by sampling seeds in parallel
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Replay a specific board:
//!
//! ```sh
//! cargo run --example generate_board -- --seed <64-char-hex>
//! cargo run --example generate_board -- --phrase "daily board"
//! ```
//!
//! Keep sampling random seeds until the backtracking solver confirms the
//! board is solvable (budget configurable with `--max-tries`):
//!
//! ```sh
//! cargo run --example generate_board -- --solvable --max-tries 1000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use sudoscope_core::Board;
use sudoscope_generator::{BoardGenerator, GeneratorSeed};
use sudoscope_solver::BacktrackingSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of clues to fill in. Dense targets slow the random walk down.
    #[arg(long, value_name = "COUNT", default_value_t = BoardGenerator::DEFAULT_FILLED, value_parser = clap::value_parser!(u8).range(0..=40))]
    filled: u8,

    /// Replay the board identified by this 64-character hex seed.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<GeneratorSeed>,

    /// Derive the seed from a phrase instead of random bytes.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Sample random seeds until the generated board is solvable.
    #[arg(long, conflicts_with_all = ["seed", "phrase"])]
    solvable: bool,

    /// Maximum seeds to sample when filtering for solvability.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    max_tries: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = BoardGenerator::new(args.filled);

    if args.solvable {
        sample_solvable(&generator, args.max_tries);
        return;
    }

    let seed = match (args.seed, &args.phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => GeneratorSeed::from_phrase(phrase),
        (None, None) => GeneratorSeed::random(),
    };
    let board = generator.generate_with_seed(seed);
    print_board(seed, &board, None);
}

fn sample_solvable(generator: &BoardGenerator, max_tries: usize) {
    if max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let solver = BacktrackingSolver::new();
    let found = (0..max_tries).into_par_iter().find_map_any(|_| {
        let seed = GeneratorSeed::random();
        let board = generator.generate_with_seed(seed);
        let mut solution = board.clone();
        let (outcome, _stats) = solver.solve(&mut solution);
        outcome.is_solved().then_some((seed, board, solution))
    });

    if let Some((seed, board, solution)) = found {
        print_board(seed, &board, Some(&solution));
        return;
    }

    eprintln!("No solvable board found within {max_tries} tries.");
    process::exit(1);
}

fn print_board(seed: GeneratorSeed, board: &Board, solution: Option<&Board>) {
    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Board:");
    println!("{board}");

    if let Some(solution) = solution {
        println!();
        println!("Solution:");
        println!("{solution}");
    }
}
