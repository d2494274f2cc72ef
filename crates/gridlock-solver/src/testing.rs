//! Test utilities for tactic implementations.
//!
//! [`TacticTester`] drives a standard 9×9 board through tactic applications
//! and asserts on the resulting values and candidates, with `#[track_caller]`
//! so failures point at the test line.

use gridlock_core::{Board, BoardConfig, Position, SymbolSet};

use crate::technique::Technique;

/// A fluent harness for tactic tests.
#[derive(Debug)]
pub struct TacticTester {
    board: Board,
}

impl TacticTester {
    /// Creates a tester from the textual form of a standard 9×9 board.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        Self {
            board: Board::from_rows(BoardConfig::standard(), rows),
        }
    }

    /// Applies the tactic once, asserting on its progress report.
    #[track_caller]
    pub fn apply_expecting<T>(mut self, technique: &T, progress: bool) -> Self
    where
        T: Technique,
    {
        let made = technique.apply(&mut self.board);
        assert_eq!(
            made,
            progress,
            "expected {} to report progress = {progress}",
            technique.name()
        );
        self
    }

    /// Applies the tactic repeatedly until it makes no more progress.
    #[track_caller]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        while technique.apply(&mut self.board) {}
        self
    }

    /// Asserts the tile at `pos` holds the value rendered by `expected`.
    #[track_caller]
    pub fn assert_value(self, pos: Position, expected: char) -> Self {
        let value = self.board.tile(pos).value();
        assert_eq!(
            value,
            self.board.config().symbol(expected),
            "expected {expected:?} at {pos}, found {:?}",
            value.map(|symbol| self.board.config().char_of(symbol)),
        );
        self
    }

    /// Asserts the tile at `pos` is still unknown.
    #[track_caller]
    pub fn assert_unknown(self, pos: Position) -> Self {
        let tile = self.board.tile(pos);
        assert_eq!(
            tile.value(),
            None,
            "expected {pos} to be unknown, found {:?}",
            tile.value().map(|symbol| self.board.config().char_of(symbol)),
        );
        self
    }

    /// Asserts the tile at `pos` has exactly the candidates rendered by
    /// `expected` (in any order).
    #[track_caller]
    pub fn assert_candidates(self, pos: Position, expected: &str) -> Self {
        let expected: SymbolSet = expected
            .chars()
            .map(|ch| {
                self.board
                    .config()
                    .symbol(ch)
                    .unwrap_or_else(|| panic!("{ch:?} is not in the alphabet"))
            })
            .collect();
        let candidates = self.board.tile(pos).candidates();
        assert_eq!(
            candidates, expected,
            "unexpected candidates at {pos}: {candidates:?}"
        );
        self
    }

    /// Asserts the whole board renders as `rows`.
    #[track_caller]
    pub fn assert_rows(self, rows: &[&str]) -> Self {
        assert_eq!(self.board.as_rows(), rows);
        self
    }
}
