use gridlock_core::{Board, Position};
use tinyvec::ArrayVec;

use super::Technique;

const NAME: &str = "hidden single";

/// A tactic that places a value when only one tile in a group can hold it.
///
/// For each group, the values not yet present are computed (against a copy of
/// the alphabet set, never the shared configuration). A value that remains a
/// candidate of exactly one unknown tile in the group must go there, even
/// when that tile still has several candidates of its own; the single is
/// "hidden" among them.
///
/// Assignment goes through the regular value-setting path, which collapses
/// the tile's candidate set to the placed value. On a board made inconsistent
/// by a wrong guess a leftover value may have no possible tile at all; the
/// tactic skips it without complaint.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` tactic.
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, board: &mut Board) -> bool {
        let mut progress = false;
        for index in 0..board.groups().len() {
            // Group size is bounded by the symbol-set capacity.
            let members: ArrayVec<[Position; 32]> =
                board.groups()[index].members().iter().copied().collect();

            let mut leftovers = board.config().full_set();
            for &pos in &members {
                if let Some(value) = board.tile(pos).value() {
                    leftovers.remove(value);
                }
            }

            for value in leftovers {
                let mut count = 0;
                let mut sole = None;
                for &pos in &members {
                    let tile = board.tile(pos);
                    if !tile.is_known() && tile.could_be(value) {
                        count += 1;
                        sole = Some(pos);
                    }
                }
                if count == 1
                    && let Some(pos) = sole
                {
                    board.set_value(pos, Some(value));
                    progress = true;
                }
            }
        }
        progress
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::Position;

    use super::*;
    use crate::{technique::NakedSingle, testing::TacticTester};

    #[test]
    fn test_places_value_blocked_from_the_rest_of_a_column() {
        // 2 is blocked from every cell of the middle column except (4, 4) by
        // the placements in neighboring rows and blocks, so it must go there
        // even though (4, 4) still has many candidates of its own.
        TacticTester::from_rows(&[
            ".........",
            "...2.....",
            ".........",
            "....6....",
            ".........",
            "....8....",
            ".........",
            ".........",
            ".....2...",
        ])
        .apply_expecting(&NakedSingle::new(), true)
        .assert_unknown(Position::new(4, 4))
        .assert_candidates(Position::new(4, 4), "1234579")
        .apply_expecting(&HiddenSingle::new(), true)
        .assert_rows(&[
            ".........",
            "...2.....",
            ".........",
            "....6....",
            "....2....",
            "....8....",
            ".........",
            ".........",
            ".....2...",
        ]);
    }

    #[test]
    fn test_no_progress_without_eliminations() {
        // On a board whose candidates have not been narrowed, every missing
        // value still fits several tiles of each group.
        TacticTester::from_rows(&[
            "12.......",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ])
        .apply_expecting(&HiddenSingle::new(), false);
    }

    #[test]
    fn test_tolerates_inconsistent_board() {
        // Duplicate 5s in row 0: the tactic must neither panic nor loop; the
        // board simply stays where it is until the search backtracks.
        TacticTester::from_rows(&[
            "5...5....",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ])
        .apply_expecting(&HiddenSingle::new(), false);
    }
}
