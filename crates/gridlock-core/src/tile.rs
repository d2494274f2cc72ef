//! A single board cell and its candidate bookkeeping.

use crate::{position::Position, symbol::Symbol, symbol_set::SymbolSet};

/// One tile of the board.
///
/// A tile either holds a definite value or, while unknown, the set of symbols
/// still consistent with the rest of the board. The two are kept in lock
/// step: a known tile's candidate set is the singleton of its value, and an
/// unknown tile's candidate set is some subset of the alphabet. An unknown
/// tile with an *empty* candidate set is a meaningful state, not an error:
/// it says no value can complete the board from here.
///
/// The tile's identity is its `(row, col)` address, fixed at construction and
/// stable across value changes. Value mutation goes through the owning
/// [`Board`](crate::Board), which routes every change past the registered
/// listeners.
#[derive(Debug, Clone)]
pub struct Tile {
    row: usize,
    col: usize,
    value: Option<Symbol>,
    candidates: SymbolSet,
}

impl Tile {
    /// Creates an unknown tile with the full candidate set.
    pub(crate) fn new(row: usize, col: usize, full: SymbolSet) -> Self {
        Self {
            row,
            col,
            value: None,
            candidates: full,
        }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Returns the tile's address.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Returns the tile's value, or `None` while unknown.
    #[must_use]
    pub const fn value(&self) -> Option<Symbol> {
        self.value
    }

    /// Returns the candidate set.
    #[must_use]
    pub const fn candidates(&self) -> SymbolSet {
        self.candidates
    }

    /// Returns `true` if the tile holds a definite value.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if `value` is still a candidate for this tile.
    #[must_use]
    pub fn could_be(&self, value: Symbol) -> bool {
        self.candidates.contains(value)
    }

    /// Sets or clears the value, re-synchronizing the candidate set.
    ///
    /// `full` is the board's complete alphabet set, restored as the candidate
    /// set when the tile is cleared.
    pub(crate) fn assign(&mut self, value: Option<Symbol>, full: SymbolSet) {
        match value {
            Some(symbol) => {
                self.value = Some(symbol);
                self.candidates = SymbolSet::from_elem(symbol);
            }
            None => {
                self.value = None;
                self.candidates = full;
            }
        }
    }

    /// Rules out `used` as values for this tile.
    ///
    /// Returns `true` if at least one candidate was actually removed. When
    /// exactly one candidate remains afterwards, the tile commits to it as
    /// its value. Candidates in `used` that were already absent are ignored,
    /// and a tile that already holds a value reports no change; both keep the
    /// operation total on boards made inconsistent by a wrong guess.
    pub(crate) fn remove_candidates(&mut self, used: SymbolSet) -> bool {
        if self.value.is_some() {
            return false;
        }
        let remaining = self.candidates.difference(used);
        if remaining == self.candidates {
            return false;
        }
        self.candidates = remaining;
        if let Some(value) = remaining.as_single() {
            self.value = Some(value);
        }
        true
    }
}
