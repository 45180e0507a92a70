//! Observable backtracking solver for sudoscope boards.
//!
//! This crate implements depth-first backtracking search over a
//! [`sudoscope_core::Board`], with a per-step observation hook:
//!
//! - [`BacktrackingSolver`] walks cells in row-major order, trying digits
//!   1-9 ascending and pruning with the core validator.
//! - [`StepObserver`] receives every placement and retraction together with
//!   the board snapshot at that instant, which is all a presentation layer
//!   needs to animate a solve. Pacing (delays between steps) is entirely
//!   the observer's business.
//!
//! # Examples
//!
//! ```
//! use sudoscope_core::Board;
//! use sudoscope_solver::{BacktrackingSolver, StepRecorder};
//!
//! let mut board = Board::classic();
//! let mut recorder = StepRecorder::new();
//! let (outcome, stats) =
//!     BacktrackingSolver::new().solve_with_observer(&mut board, &mut recorder);
//!
//! assert!(outcome.is_solved());
//! assert_eq!(recorder.steps().len(), stats.total_steps());
//! ```

pub use self::{solver::*, step::*};

mod solver;
mod step;
