use std::fmt::Debug;

use gridlock_core::Board;

/// A deterministic solving tactic.
///
/// A tactic inspects the board group by group and narrows candidate sets or
/// assigns values. Tactics never guess and never fail: on a board made
/// inconsistent by a wrong search guess they simply run out of progress (or
/// drive a candidate set empty, which the search detects).
pub trait Technique: Debug + Send + Sync {
    /// Returns the name of the tactic.
    fn name(&self) -> &'static str;

    /// Applies the tactic once across all groups.
    ///
    /// Returns `true` if any candidate was removed or any value assigned.
    fn apply(&self, board: &mut Board) -> bool;
}

/// A boxed tactic.
pub type BoxedTechnique = Box<dyn Technique>;
