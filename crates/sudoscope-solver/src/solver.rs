//! Recursive backtracking search.

use sudoscope_core::{Board, Digit, Position};

use crate::{IgnoreSteps, SolveStep, StepObserver};

/// The terminal result of a backtracking search.
///
/// `Unsatisfiable` is a normal negative answer, not an error: it means no
/// assignment of the remaining cells satisfies the constraints, starting
/// from the board that was passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// Every visited cell was assigned without conflict.
    #[display("solved")]
    Solved,
    /// The search space was exhausted without finding a solution.
    #[display("unsatisfiable")]
    Unsatisfiable,
}

/// Counters collected during a backtracking search.
///
/// # Examples
///
/// ```
/// use sudoscope_core::Board;
/// use sudoscope_solver::BacktrackingSolver;
///
/// let mut board = Board::classic();
/// let (_outcome, stats) = BacktrackingSolver::new().solve(&mut board);
/// assert_eq!(stats.total_steps(), stats.placements() + stats.retractions());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    placements: usize,
    retractions: usize,
}

impl SolveStats {
    /// Returns the number of tentative digit placements.
    #[must_use]
    pub const fn placements(&self) -> usize {
        self.placements
    }

    /// Returns the number of placements undone while backtracking.
    #[must_use]
    pub const fn retractions(&self) -> usize {
        self.retractions
    }

    /// Returns the total number of observable steps.
    #[must_use]
    pub const fn total_steps(&self) -> usize {
        self.placements + self.retractions
    }

    /// Returns `true` if the search undid at least one placement.
    #[must_use]
    pub const fn backtracked(&self) -> bool {
        self.retractions > 0
    }
}

/// A depth-first backtracking solver over the cells of a [`Board`].
///
/// The solver visits cells in row-major order, skipping filled cells. For
/// each empty cell it tries the digits 1-9 in ascending order, pruning with
/// [`Board::allows`]: a valid candidate is tentatively placed, the search
/// recurses, and on failure the placement is undone before the next
/// candidate. Exhausting all candidates for a cell fails the caller's
/// placement in turn, which is the backtracking step.
///
/// Because candidates are tried in a fixed order and the first success wins,
/// the solver is deterministic and produces the lexicographically-first
/// solution reachable in row-major, ascending-digit order. It does not
/// enumerate alternative solutions or check uniqueness.
///
/// The board passed in is assumed constraint-consistent. On
/// [`SolveOutcome::Solved`] it holds the completed grid; on
/// [`SolveOutcome::Unsatisfiable`] every tentative placement has been undone
/// and the board is back in its pre-solve state.
///
/// # Examples
///
/// ```
/// use sudoscope_core::Board;
/// use sudoscope_solver::BacktrackingSolver;
///
/// let mut board = Board::classic();
/// let (outcome, stats) = BacktrackingSolver::new().solve(&mut board);
///
/// assert!(outcome.is_solved());
/// assert!(board.is_complete());
/// assert!(board.is_consistent());
/// println!("solved in {} steps", stats.total_steps());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        BacktrackingSolver
    }

    /// Solves `board` in place without observation.
    pub fn solve(&self, board: &mut Board) -> (SolveOutcome, SolveStats) {
        self.solve_with_observer(board, &mut IgnoreSteps)
    }

    /// Solves `board` in place, reporting every placement and retraction to
    /// `observer`.
    ///
    /// The observer is invoked synchronously after each mutation with the
    /// board snapshot at that instant; see [`StepObserver`]. A board with no
    /// empty cells returns [`SolveOutcome::Solved`] without invoking the
    /// observer at all.
    pub fn solve_with_observer<O>(
        &self,
        board: &mut Board,
        observer: &mut O,
    ) -> (SolveOutcome, SolveStats)
    where
        O: StepObserver,
    {
        self.solve_from(board, Position::new(0, 0), observer)
    }

    /// Solves the cells at and after `cursor` (in row-major order) in place.
    ///
    /// Cells before the cursor are never examined or modified; they still
    /// constrain the search through the validator. [`solve_with_observer`]
    /// is this operation with the cursor at the top-left cell.
    ///
    /// [`solve_with_observer`]: Self::solve_with_observer
    pub fn solve_from<O>(
        &self,
        board: &mut Board,
        cursor: Position,
        observer: &mut O,
    ) -> (SolveOutcome, SolveStats)
    where
        O: StepObserver,
    {
        let mut stats = SolveStats::default();
        let outcome = if Self::search(board, cursor.index(), observer, &mut stats) {
            SolveOutcome::Solved
        } else {
            SolveOutcome::Unsatisfiable
        };
        log::debug!(
            "search from {cursor}: {outcome}, {} placements, {} retractions",
            stats.placements,
            stats.retractions,
        );
        (outcome, stats)
    }

    fn search<O>(board: &mut Board, index: u8, observer: &mut O, stats: &mut SolveStats) -> bool
    where
        O: StepObserver,
    {
        if index == 81 {
            return true;
        }
        let pos = Position::from_index(index);
        if board.digit(pos).is_some() {
            return Self::search(board, index + 1, observer, stats);
        }
        for digit in Digit::ALL {
            if !board.allows(pos, digit) {
                continue;
            }
            board.place(pos, digit);
            stats.placements += 1;
            observer.on_step(SolveStep::Placed { position: pos, digit }, board);
            if Self::search(board, index + 1, observer, stats) {
                return true;
            }
            board.clear(pos);
            stats.retractions += 1;
            observer.on_step(SolveStep::Retracted { position: pos, digit }, board);
        }
        false
    }
}
