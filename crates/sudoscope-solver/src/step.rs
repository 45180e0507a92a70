//! Solve-step observation.
//!
//! The backtracking solver reports every board mutation to a
//! [`StepObserver`] immediately after it happens, passing the step and the
//! board snapshot at that instant. This is the hook a presentation layer
//! uses to animate a solve: the observer may block (sleep, wait for a
//! frame) before returning, and the search resumes when it does. The
//! solver's state lives entirely in the board and its call stack, so
//! arbitrary delays in the observer cannot corrupt the search.

use sudoscope_core::{Board, Digit, Position};

/// A single observable mutation performed by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SolveStep {
    /// A candidate digit was tentatively placed.
    #[display("placed {digit} at {position}")]
    Placed {
        /// The cell that was filled.
        position: Position,
        /// The digit that was placed.
        digit: Digit,
    },
    /// A tentative placement was undone during backtracking.
    #[display("cleared {digit} from {position}")]
    Retracted {
        /// The cell that was emptied.
        position: Position,
        /// The digit that was removed.
        digit: Digit,
    },
}

impl SolveStep {
    /// Returns the cell affected by this step.
    #[must_use]
    pub const fn position(self) -> Position {
        match self {
            Self::Placed { position, .. } | Self::Retracted { position, .. } => position,
        }
    }

    /// Returns the digit placed or removed by this step.
    #[must_use]
    pub const fn digit(self) -> Digit {
        match self {
            Self::Placed { digit, .. } | Self::Retracted { digit, .. } => digit,
        }
    }
}

/// Receives solver steps as they happen.
///
/// Implemented for any `FnMut(SolveStep, &Board)` closure, so most callers
/// never name the trait:
///
/// ```
/// use sudoscope_core::Board;
/// use sudoscope_solver::{BacktrackingSolver, SolveStep};
///
/// let mut board = Board::classic();
/// let mut steps = 0u32;
/// let (outcome, _stats) = BacktrackingSolver::new().solve_with_observer(
///     &mut board,
///     // Closure parameter types must be spelled out for the blanket impl
///     &mut |_step: SolveStep, _board: &Board| steps += 1,
/// );
/// assert!(outcome.is_solved());
/// assert!(steps > 0);
/// ```
///
/// The solver has no cancellation checkpoint; an observer that wants to
/// abandon a solve can only stop reacting to steps and discard the result.
pub trait StepObserver {
    /// Called synchronously after every placement and every retraction.
    ///
    /// `board` is the state immediately after the step was applied. The
    /// observer may delay before returning; it must not assume it is called
    /// at any particular pace.
    fn on_step(&mut self, step: SolveStep, board: &Board);
}

impl<F> StepObserver for F
where
    F: FnMut(SolveStep, &Board),
{
    fn on_step(&mut self, step: SolveStep, board: &Board) {
        self(step, board);
    }
}

/// An observer that discards every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreSteps;

impl StepObserver for IgnoreSteps {
    fn on_step(&mut self, _step: SolveStep, _board: &Board) {}
}

/// An observer that records every step, for replay or comparison.
///
/// # Examples
///
/// ```
/// use sudoscope_core::Board;
/// use sudoscope_solver::{BacktrackingSolver, StepRecorder};
///
/// let mut board = Board::classic();
/// let mut recorder = StepRecorder::new();
/// BacktrackingSolver::new().solve_with_observer(&mut board, &mut recorder);
/// assert!(!recorder.steps().is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct StepRecorder {
    steps: Vec<SolveStep>,
}

impl StepRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded steps in order.
    #[must_use]
    pub fn steps(&self) -> &[SolveStep] {
        &self.steps
    }

    /// Consumes the recorder, returning the recorded steps.
    #[must_use]
    pub fn into_steps(self) -> Vec<SolveStep> {
        self.steps
    }
}

impl StepObserver for StepRecorder {
    fn on_step(&mut self, step: SolveStep, _board: &Board) {
        self.steps.push(step);
    }
}
