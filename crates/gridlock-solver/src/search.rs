use gridlock_core::Board;

use crate::propagate::Propagator;

/// The complete solver: propagation to a fixed point plus recursive
/// guess-and-check.
///
/// Each call propagates, then classifies the board: complete and consistent
/// means solved; inconsistent means this branch is a dead end. Otherwise the
/// solver snapshots the value grid, picks the unknown tile with the fewest
/// candidates, and tries each of its candidate values in turn, restoring the
/// snapshot after every failed branch. Because a value is always assigned
/// before recursing, the number of unknown tiles strictly decreases and the
/// recursion depth is bounded by the cell count.
///
/// Inconsistency is an expected outcome throughout, reported through return
/// values; the solver never panics on an unsolvable board.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, BoardConfig};
/// use gridlock_solver::Solver;
///
/// let mut board = Board::from_rows(BoardConfig::standard(), &[
///     "....5..1.", "2........", "5.19..48.",
///     "6...1.24.", "8.......7", ".23.4...1",
///     ".69..28.3", "........4", ".4..8....",
/// ]);
/// assert!(Solver::new().solve(&mut board));
/// assert!(board.is_complete() && board.is_consistent());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Solver {
    propagator: Propagator,
}

impl Solver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            propagator: Propagator::new(),
        }
    }

    /// Solves the board in place.
    ///
    /// Returns `true` and leaves the board in the solved state if a solution
    /// exists from the current position; returns `false` and leaves the board
    /// at its propagated dead end otherwise. A `false` from the top level is
    /// the "no solution" signal. To distinguish it from a board that was
    /// already inconsistent before solving, check [`Board::is_consistent`]
    /// up front, as the command-line interface does.
    pub fn solve(&self, board: &mut Board) -> bool {
        self.propagator.propagate(board);
        if !board.is_consistent() {
            return false;
        }
        if board.is_complete() {
            return true;
        }

        let saved = board.as_rows();
        let Some(pos) = board.min_choice_tile() else {
            // Unreachable: the completeness check above found an unknown tile.
            return false;
        };
        let candidates = board.tile(pos).candidates();
        log::debug!("guessing among {} candidates at {pos}", candidates.len());
        for value in candidates {
            board.set_guess(pos, value);
            if self.solve(board) {
                return true;
            }
            board.set_rows(&saved);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::{Board, BoardConfig, Position};

    use super::*;
    use crate::technique::{NakedSingle, Technique as _};

    fn evil_rows() -> [&'static str; 9] {
        [
            "....5..1.", "2........", "5.19..48.", "6...1.24.", "8.......7", ".23.4...1",
            ".69..28.3", "........4", ".4..8....",
        ]
    }

    #[test]
    fn test_solves_hidden_single_puzzle() {
        let mut board = Board::from_rows(
            BoardConfig::standard(),
            &[
                "......12.", "24..1....", "9.1..4...", "4....365.", "....9....", ".364....1",
                "...1..5.6", "....5..43", ".72......",
            ],
        );
        assert!(Solver::new().solve(&mut board));
        assert_eq!(
            board.as_rows(),
            vec![
                "687539124", "243718965", "951264387", "419873652", "725691438", "836425791",
                "394182576", "168957243", "572346819",
            ],
        );
    }

    #[test]
    fn test_guess_and_check_reaches_unique_solution() {
        // Propagation alone stalls on this one; the search must backtrack.
        let mut board = Board::from_rows(BoardConfig::standard(), &evil_rows());
        assert!(Solver::new().solve(&mut board));
        assert_eq!(
            board.as_rows(),
            vec![
                "497856312", "286134795", "531927486", "675319248", "814265937", "923748561",
                "169472853", "758693124", "342581679",
            ],
        );
    }

    #[test]
    fn test_duplicate_variant_fails_cleanly() {
        // The same grid with one more 1 in the top row: solve() must return
        // false rather than loop or panic.
        let mut rows = evil_rows();
        rows[0] = "1...5..1.";
        let mut board = Board::from_rows(BoardConfig::standard(), &rows);
        assert!(!Solver::new().solve(&mut board));
    }

    #[test]
    fn test_solves_empty_board() {
        let mut board = Board::new(BoardConfig::standard());
        assert!(Solver::new().solve(&mut board));
        assert!(board.is_complete());
        assert!(board.is_consistent());
    }

    #[test]
    fn test_min_choice_tile_after_narrowing() {
        // All unknown tiles keep many candidates except (4, 4), which the
        // row and column placements narrow to 6 and 7.
        let mut board = Board::from_rows(
            BoardConfig::standard(),
            &[
                "....5....", "....4....", ".........", ".........", "123....89", ".........",
                ".........", ".........", ".........",
            ],
        );
        while NakedSingle::new().apply(&mut board) {}
        let pos = board.min_choice_tile().unwrap();
        assert_eq!(pos, Position::new(4, 4));
        let tile = board.tile(pos);
        assert_eq!(tile.value(), None);
        let six = board.config().symbol('6').unwrap();
        let seven = board.config().symbol('7').unwrap();
        assert_eq!(tile.candidates().iter().collect::<Vec<_>>(), vec![six, seven]);
    }

    #[test]
    fn test_failed_search_restores_nothing_extra() {
        // After a failed solve the board sits at its propagated dead end;
        // the original givens are still in place.
        let mut rows = evil_rows();
        rows[0] = "1...5..1.";
        let mut board = Board::from_rows(BoardConfig::standard(), &rows);
        assert!(!Solver::new().solve(&mut board));
        assert_eq!(
            board.tile(Position::new(0, 0)).value(),
            board.config().symbol('1')
        );
        assert_eq!(
            board.tile(Position::new(2, 2)).value(),
            board.config().symbol('1')
        );
    }
}
