//! Benchmarks for the backtracking solver.
//!
//! Measures full solves of two fixed boards:
//!
//! - **`classic`**: the 30-clue demonstration puzzle, which forces the
//!   solver through a realistic amount of backtracking.
//! - **`empty`**: a completely empty board, which the row-major
//!   ascending-digit search fills with the lexicographically-first
//!   complete grid.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, time::Duration};

use criterion::{BatchSize, Criterion, PlottingBackend, criterion_group, criterion_main};
use sudoscope_core::Board;
use sudoscope_solver::BacktrackingSolver;

fn bench_solve_classic(c: &mut Criterion) {
    let solver = BacktrackingSolver::new();
    let board = Board::classic();

    c.bench_function("solve_classic", |b| {
        b.iter_batched(
            || hint::black_box(board.clone()),
            |mut board| solver.solve(&mut board),
            BatchSize::SmallInput,
        );
    });
}

fn bench_solve_empty(c: &mut Criterion) {
    let solver = BacktrackingSolver::new();

    c.bench_function("solve_empty", |b| {
        b.iter_batched(
            || hint::black_box(Board::new()),
            |mut board| solver.solve(&mut board),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets =
        bench_solve_classic,
        bench_solve_empty
);
criterion_main!(benches);
