//! Change notification for board mutations.
//!
//! The board optionally notifies registered listeners whenever a tile's value
//! changes. Listeners are an observation seam for progress displays and
//! diagnostics; no solving algorithm depends on a listener being present or
//! on anything a listener does.

use std::fmt::Debug;

use crate::{position::Position, symbol::Symbol, symbol_set::SymbolSet};

/// What happened to a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The value was set, cleared, or narrowed by candidate elimination.
    Changed,
    /// The value was assigned speculatively by the backtracking search.
    Guessed,
}

/// A snapshot of a tile mutation, delivered to listeners.
///
/// The event carries value copies, not references into the board, so a
/// listener may retain it freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileEvent {
    /// The mutated tile's address.
    pub position: Position,
    /// The tile's value after the mutation.
    pub value: Option<Symbol>,
    /// The tile's candidate set after the mutation.
    pub candidates: SymbolSet,
    /// What kind of mutation occurred.
    pub kind: EventKind,
}

/// An observer of tile mutations.
///
/// Register implementations with [`Board::add_listener`](crate::Board::add_listener).
pub trait TileListener: Debug {
    /// Called after each observed tile mutation.
    fn notify(&mut self, event: &TileEvent);
}

/// A boxed listener, as stored by the board.
pub type BoxedListener = Box<dyn TileListener>;
