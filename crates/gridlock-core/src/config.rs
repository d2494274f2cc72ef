//! Board configuration: dimensions, alphabet, and the unknown marker.

use derive_more::{Display, Error};

use crate::{symbol::Symbol, symbol_set::SymbolSet};

/// Configuration shared by every cell of one board.
///
/// A configuration carries the block size (`root`), the derived side length
/// (`root²`), the alphabet of playable symbols, and the character that marks
/// an unknown cell in the textual form. It is an explicit value threaded
/// through [`Board`](crate::Board) construction rather than ambient state, so
/// differently configured boards (say 9×9 and 16×16) can coexist in one
/// process.
///
/// The validating constructor enforces the invariants every core operation
/// relies on: the alphabet has exactly `root²` distinct characters and does
/// not contain the unknown marker.
///
/// # Examples
///
/// ```
/// use gridlock_core::BoardConfig;
///
/// let config = BoardConfig::standard();
/// assert_eq!(config.size(), 9);
/// assert_eq!(config.root(), 3);
/// assert_eq!(config.unknown(), '.');
///
/// let custom = BoardConfig::new(2, "abcd", '-').unwrap();
/// assert_eq!(custom.size(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    root: usize,
    choices: Vec<char>,
    unknown: char,
}

/// Violation of the board invariants, reported by [`BoardConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// The block size must be at least 2.
    #[display("block size {root} is too small; blocks must be at least 2x2")]
    RootTooSmall {
        /// The rejected block size.
        root: usize,
    },

    /// The board would need more symbols than a candidate set can hold.
    #[display("a {size}x{size} board exceeds the supported maximum of {max} symbols",
        max = SymbolSet::CAPACITY)]
    BoardTooLarge {
        /// The rejected side length.
        size: usize,
    },

    /// The alphabet length does not match the board size.
    #[display("alphabet has {actual} symbols, but a board with {root}x{root} blocks needs {expected}")]
    AlphabetLength {
        /// The requested block size.
        root: usize,
        /// The required alphabet length (`root²`).
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },

    /// A character appears in the alphabet more than once.
    #[display("alphabet contains {symbol:?} more than once")]
    DuplicateSymbol {
        /// The repeated character.
        symbol: char,
    },

    /// The unknown marker must not be a playable symbol.
    #[display("unknown marker {unknown:?} also appears in the alphabet")]
    UnknownInAlphabet {
        /// The rejected marker.
        unknown: char,
    },
}

impl BoardConfig {
    /// Creates a validated configuration.
    ///
    /// `choices` supplies the alphabet in index order: its first character
    /// renders the symbol with index 0, and so on. `unknown` is the character
    /// that marks an empty cell in the textual form.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `root` is below 2, the board would exceed
    /// [`SymbolSet::CAPACITY`] symbols, the alphabet length differs from
    /// `root²`, the alphabet repeats a character, or the alphabet contains
    /// `unknown`.
    pub fn new(root: usize, choices: &str, unknown: char) -> Result<Self, ConfigError> {
        if root < 2 {
            return Err(ConfigError::RootTooSmall { root });
        }
        let size = root * root;
        if size > SymbolSet::CAPACITY {
            return Err(ConfigError::BoardTooLarge { size });
        }
        let choices: Vec<char> = choices.chars().collect();
        if choices.len() != size {
            return Err(ConfigError::AlphabetLength {
                root,
                expected: size,
                actual: choices.len(),
            });
        }
        for (i, &symbol) in choices.iter().enumerate() {
            if choices[..i].contains(&symbol) {
                return Err(ConfigError::DuplicateSymbol { symbol });
            }
        }
        if choices.contains(&unknown) {
            return Err(ConfigError::UnknownInAlphabet { unknown });
        }
        Ok(Self {
            root,
            choices,
            unknown,
        })
    }

    /// The standard 9×9 board: 3×3 blocks, symbols `1`-`9`, unknown `.`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            root: 3,
            choices: "123456789".chars().collect(),
            unknown: '.',
        }
    }

    /// A 16×16 board: 4×4 blocks, symbols `0`-`9` and `A`-`F`, unknown `.`.
    #[must_use]
    pub fn hex16() -> Self {
        Self {
            root: 4,
            choices: "0123456789ABCDEF".chars().collect(),
            unknown: '.',
        }
    }

    /// Returns the block size (the square root of the side length).
    #[must_use]
    pub const fn root(&self) -> usize {
        self.root
    }

    /// Returns the side length of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.root * self.root
    }

    /// Returns the alphabet in index order.
    #[must_use]
    pub fn choices(&self) -> &[char] {
        &self.choices
    }

    /// Returns the character marking an unknown cell.
    #[must_use]
    pub const fn unknown(&self) -> char {
        self.unknown
    }

    /// Returns the set of all symbols of this alphabet.
    #[must_use]
    pub fn full_set(&self) -> SymbolSet {
        SymbolSet::full(self.choices.len())
    }

    /// Looks up the symbol a character stands for.
    ///
    /// Returns `None` for any character outside the alphabet, including the
    /// unknown marker.
    #[must_use]
    pub fn symbol(&self, ch: char) -> Option<Symbol> {
        self.choices
            .iter()
            .position(|&choice| choice == ch)
            .map(Symbol::new)
    }

    /// Returns the character rendering a symbol.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` does not belong to this alphabet (its index is out
    /// of range for this board size).
    #[must_use]
    pub fn char_of(&self, symbol: Symbol) -> char {
        self.choices[symbol.index()]
    }

    /// Renders an optional tile value, using the unknown marker for `None`.
    #[must_use]
    pub fn render(&self, value: Option<Symbol>) -> char {
        value.map_or(self.unknown, |symbol| self.char_of(symbol))
    }
}
