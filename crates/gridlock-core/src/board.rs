//! The board: tile arena, group structure, and state predicates.

use std::fmt::{self, Display};

use crate::{
    config::BoardConfig,
    events::{BoxedListener, EventKind, TileEvent},
    group::{Group, GroupKind},
    position::Position,
    symbol::Symbol,
    symbol_set::SymbolSet,
    tile::Tile,
};

/// A Sudoku board.
///
/// The board owns a flat, row-major arena of [`Tile`]s plus the derived
/// [`Group`] structure: one group per row, per column, and per block, each a
/// list of tile addresses into the arena. Every tile belongs to exactly three
/// groups, and all mutation goes through the board so that registered
/// listeners observe it.
///
/// A board is constructed empty (every tile unknown with the full candidate
/// set) and populated from its textual form: one string per row over the
/// configured alphabet, with the configured marker for unknown cells. The
/// same form, produced by [`as_rows`](Self::as_rows), doubles as the value
/// snapshot the backtracking search restores from.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, BoardConfig};
///
/// let mut board = Board::new(BoardConfig::standard());
/// board.set_rows(&[
///     "534678912", "672195348", "198342567",
///     "859761423", "426853791", "713924856",
///     "961537284", "287419635", "345286179",
/// ]);
/// assert!(board.is_complete());
/// assert!(board.is_consistent());
/// ```
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    tiles: Vec<Tile>,
    groups: Vec<Group>,
    listeners: Vec<BoxedListener>,
}

impl Board {
    /// Creates an empty board for the given configuration.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let size = config.size();
        let full = config.full_set();
        let mut tiles = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                tiles.push(Tile::new(row, col, full));
            }
        }
        let groups = Self::build_groups(size, config.root());
        Self {
            config,
            tiles,
            groups,
            listeners: Vec::new(),
        }
    }

    /// Creates a board and populates it from its textual form.
    ///
    /// See [`set_rows`](Self::set_rows) for the expected shape.
    #[must_use]
    pub fn from_rows<S>(config: BoardConfig, rows: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let mut board = Self::new(config);
        board.set_rows(rows);
        board
    }

    fn build_groups(size: usize, root: usize) -> Vec<Group> {
        let mut groups = Vec::with_capacity(3 * size);
        for row in 0..size {
            let members = (0..size).map(|col| Position::new(row, col)).collect();
            groups.push(Group::new(GroupKind::Row(row), members));
        }
        for col in 0..size {
            let members = (0..size).map(|row| Position::new(row, col)).collect();
            groups.push(Group::new(GroupKind::Column(col), members));
        }
        for block_row in 0..root {
            for block_col in 0..root {
                let mut members = Vec::with_capacity(size);
                for row in 0..root {
                    for col in 0..root {
                        members.push(Position::new(
                            block_row * root + row,
                            block_col * root + col,
                        ));
                    }
                }
                groups.push(Group::new(
                    GroupKind::Block(block_row * root + block_col),
                    members,
                ));
            }
        }
        groups
    }

    /// Returns the board configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the side length of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.config.size()
    }

    /// Returns all groups: rows, then columns, then blocks.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    fn index_of(&self, pos: Position) -> usize {
        debug_assert!(pos.row() < self.size() && pos.col() < self.size());
        pos.row() * self.size() + pos.col()
    }

    /// Returns the tile at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[must_use]
    pub fn tile(&self, pos: Position) -> &Tile {
        &self.tiles[self.index_of(pos)]
    }

    /// Returns an iterator over all tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Registers a listener to be notified of every tile mutation.
    pub fn add_listener(&mut self, listener: BoxedListener) {
        self.listeners.push(listener);
    }

    fn notify(&mut self, pos: Position, kind: EventKind) {
        if self.listeners.is_empty() {
            return;
        }
        let tile = &self.tiles[self.index_of(pos)];
        let event = TileEvent {
            position: pos,
            value: tile.value(),
            candidates: tile.candidates(),
            kind,
        };
        for listener in &mut self.listeners {
            listener.notify(&event);
        }
    }

    /// Sets or clears the value of the tile at `pos`.
    ///
    /// The tile's candidate set is re-synchronized: the singleton of the new
    /// value, or the full alphabet when clearing. Listeners are notified with
    /// [`EventKind::Changed`].
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn set_value(&mut self, pos: Position, value: Option<Symbol>) {
        let full = self.config.full_set();
        let index = self.index_of(pos);
        self.tiles[index].assign(value, full);
        self.notify(pos, EventKind::Changed);
    }

    /// Assigns a speculative value to the tile at `pos`.
    ///
    /// Identical to [`set_value`](Self::set_value) except that listeners are
    /// notified with [`EventKind::Guessed`], letting an observer distinguish
    /// search guesses from deduced values.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn set_guess(&mut self, pos: Position, value: Symbol) {
        let full = self.config.full_set();
        let index = self.index_of(pos);
        self.tiles[index].assign(Some(value), full);
        self.notify(pos, EventKind::Guessed);
    }

    /// Rules out `used` as values for the tile at `pos`.
    ///
    /// Returns `true` if a candidate was actually removed; see
    /// [`Tile::remove_candidates`] for the cascading-assignment and
    /// tolerance semantics. Listeners are notified only when something
    /// changed.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn remove_candidates(&mut self, pos: Position, used: SymbolSet) -> bool {
        let index = self.index_of(pos);
        let changed = self.tiles[index].remove_candidates(used);
        if changed {
            self.notify(pos, EventKind::Changed);
        }
        changed
    }

    /// Sets every tile's value from the textual form, row-major.
    ///
    /// Each string supplies one row; characters in the alphabet set the
    /// corresponding symbol, and any other character (normally the unknown
    /// marker) clears the tile. The caller is responsible for the shape:
    /// exactly [`size`](Self::size) rows of [`size`](Self::size) characters,
    /// as the file reader guarantees.
    pub fn set_rows<S>(&mut self, rows: &[S])
    where
        S: AsRef<str>,
    {
        debug_assert_eq!(rows.len(), self.size());
        for (row, line) in rows.iter().enumerate() {
            debug_assert_eq!(line.as_ref().chars().count(), self.size());
            for (col, ch) in line.as_ref().chars().enumerate() {
                let value = self.config.symbol(ch);
                self.set_value(Position::new(row, col), value);
            }
        }
    }

    /// Renders tile values back into the textual form, row-major.
    ///
    /// The result round-trips through [`set_rows`](Self::set_rows) exactly,
    /// which is how the search snapshots and restores board state. Candidate
    /// sets are not part of the form; they are reconstructed by propagation.
    #[must_use]
    pub fn as_rows(&self) -> Vec<String> {
        let size = self.size();
        (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| {
                        self.config
                            .render(self.tile(Position::new(row, col)).value())
                    })
                    .collect()
            })
            .collect()
    }

    /// Returns `true` if no group contains a duplicated known value.
    ///
    /// Unknown tiles never contribute to the check, and candidate sets are
    /// not consulted; a board can be consistent while a tile has run out of
    /// candidates.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        for group in &self.groups {
            let mut used = SymbolSet::EMPTY;
            for &pos in group.members() {
                if let Some(value) = self.tile(pos).value() {
                    if used.contains(value) {
                        log::debug!("duplicate {} in {}", self.config.char_of(value), group.kind());
                        return false;
                    }
                    used.insert(value);
                }
            }
        }
        true
    }

    /// Returns `true` if every tile holds a value.
    ///
    /// Completeness says nothing about correctness; a board is solved only
    /// if it is complete *and* consistent.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tiles.iter().all(Tile::is_known)
    }

    /// Returns the unknown tile with the fewest candidates, if any.
    ///
    /// Ties go to the first such tile in row-major order. Returns `None` on
    /// a complete board.
    #[must_use]
    pub fn min_choice_tile(&self) -> Option<Position> {
        self.tiles
            .iter()
            .filter(|tile| !tile.is_known())
            .min_by_key(|tile| tile.candidates().len())
            .map(Tile::position)
    }
}

impl Display for Board {
    /// Renders the board in SadMan Sudoku format: rows joined by newlines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_rows().join("\n"))
    }
}
