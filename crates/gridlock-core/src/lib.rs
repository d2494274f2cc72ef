//! Core data model for the Gridlock Sudoku solver.
//!
//! This crate provides the board, tile, and group structures the solving
//! tactics operate on, together with the configuration and notification
//! seams that keep the model independent of any file format or display.
//!
//! # Overview
//!
//! - [`config`]: [`BoardConfig`], the validated dimensions/alphabet/unknown
//!   marker threaded through board construction
//! - [`symbol`] / [`symbol_set`]: [`Symbol`], an index into the alphabet,
//!   and [`SymbolSet`], the bitset used for candidate tracking
//! - [`position`]: [`Position`], the `(row, col)` tile address
//! - [`tile`]: [`Tile`], one cell holding a value or its remaining candidates
//! - [`group`]: [`Group`], an ordered row/column/block view over shared tiles
//! - [`board`]: [`Board`], the tile arena with its group structure,
//!   consistency/completeness predicates, and textual form
//! - [`events`]: [`TileEvent`] and [`TileListener`], the optional
//!   change-notification hook for progress displays
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Board, BoardConfig, Position};
//!
//! let mut board = Board::new(BoardConfig::standard());
//! board.set_rows(&[
//!     "...26.7.1", "68..7..9.", "19...45..",
//!     "82.1...4.", "..46.29..", ".5...3.28",
//!     "..93...74", ".4..5..36", "7.3.18...",
//! ]);
//!
//! assert!(board.is_consistent());
//! assert!(!board.is_complete());
//! assert_eq!(board.tile(Position::new(0, 3)).value(), board.config().symbol('2'));
//! ```

pub mod board;
pub mod config;
pub mod events;
pub mod group;
pub mod position;
pub mod symbol;
pub mod symbol_set;
pub mod tile;

// Re-export commonly used types
pub use self::{
    board::Board,
    config::{BoardConfig, ConfigError},
    events::{BoxedListener, EventKind, TileEvent, TileListener},
    group::{Group, GroupKind},
    position::Position,
    symbol::Symbol,
    symbol_set::SymbolSet,
    tile::Tile,
};
