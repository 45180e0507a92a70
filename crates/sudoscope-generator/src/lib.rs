//! Random board generation for the sudoscope engine.
//!
//! This crate produces sparsely-filled, constraint-consistent boards for
//! the solver to chew on:
//!
//! - [`BoardGenerator`] fills an empty board with validated random clues
//!   until a target count is reached.
//! - [`GeneratorSeed`] makes generation reproducible: every board is
//!   identified by a 256-bit seed with a hex string form, and seeds can be
//!   derived from memorable phrases.
//!
//! Generated boards are consistent but not guaranteed to be solvable or to
//! have a unique solution; callers that need solvable boards filter with
//! the solver (see the `generate_board` example).
//!
//! # Examples
//!
//! ```
//! use sudoscope_generator::{BoardGenerator, GeneratorSeed};
//!
//! let generator = BoardGenerator::new(20);
//! let board = generator.generate_with_seed(GeneratorSeed::from_phrase("demo"));
//!
//! assert_eq!(board.filled_count(), 20);
//! assert!(board.is_consistent());
//! ```

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
