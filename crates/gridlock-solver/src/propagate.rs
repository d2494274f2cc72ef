use gridlock_core::Board;

use crate::technique::{HiddenSingle, NakedSingle, Technique as _};

/// The fixed-point loop over the deterministic tactics.
///
/// Each round applies [`NakedSingle`] and then [`HiddenSingle`]. The loop
/// keys on naked single's progress flag alone: hidden single can only place
/// a value after naked single has eliminated candidates, so once naked
/// single reports no progress, a further hidden-single pass cannot change
/// anything the previous one did not already see.
///
/// The loop always terminates: every round either removes a candidate or is
/// the last, and the number of removable candidates on a board is finite.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, BoardConfig};
/// use gridlock_solver::Propagator;
///
/// let mut board = Board::from_rows(BoardConfig::standard(), &[
///     "...26.7.1", "68..7..9.", "19...45..",
///     "82.1...4.", "..46.29..", ".5...3.28",
///     "..93...74", ".4..5..36", "7.3.18...",
/// ]);
/// let progress = Propagator::new().propagate(&mut board);
/// assert!(progress);
/// assert!(board.is_complete());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Propagator {
    naked: NakedSingle,
    hidden: HiddenSingle,
}

impl Propagator {
    /// Creates a new propagator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            naked: NakedSingle::new(),
            hidden: HiddenSingle::new(),
        }
    }

    /// Applies the tactics until naked single reports no further progress.
    ///
    /// Returns `true` if any round changed the board. The board afterwards is
    /// at a tactic fixed point; callers classify it with
    /// [`Board::is_complete`] and [`Board::is_consistent`].
    pub fn propagate(&self, board: &mut Board) -> bool {
        let mut any = false;
        loop {
            let narrowed = self.naked.apply(board);
            let placed = self.hidden.apply(board);
            any |= narrowed || placed;
            if !narrowed {
                return any;
            }
        }
    }
}
