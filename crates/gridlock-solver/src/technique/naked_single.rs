use gridlock_core::{Board, Position, SymbolSet};
use tinyvec::ArrayVec;

use super::Technique;

const NAME: &str = "naked single";

/// A tactic that rules out values already used elsewhere in a tile's groups.
///
/// For each group, the values held by its known tiles are collected and then
/// removed from the candidates of every unknown tile in the same group. When
/// a removal leaves a tile with exactly one candidate, the tile commits to
/// that value (a "naked single"), which in turn feeds the next pass.
///
/// This tactic is the solver's sole constraint-propagation mechanism: hidden
/// single only places values, and the eliminations that enable it all come
/// from here. On a board made inconsistent by a wrong guess the removals can
/// empty a candidate set; that is an expected outcome the search detects,
/// not an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` tactic.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, board: &mut Board) -> bool {
        let mut progress = false;
        for index in 0..board.groups().len() {
            // Group size is bounded by the symbol-set capacity.
            let members: ArrayVec<[Position; 32]> =
                board.groups()[index].members().iter().copied().collect();

            let mut used = SymbolSet::EMPTY;
            for &pos in &members {
                if let Some(value) = board.tile(pos).value() {
                    used.insert(value);
                }
            }

            for &pos in &members {
                if !board.tile(pos).is_known() && board.remove_candidates(pos, used) {
                    progress = true;
                }
            }
        }
        progress
    }
}
