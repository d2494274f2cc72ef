//! Reading Sudoku boards in the SadMan Sudoku `.sdk` format.
//!
//! The format is the minimal subset the solver needs: one line per row, each
//! character either a symbol of the board's alphabet or the unknown marker.
//! Validation happens here, before the core ever sees the board, so the
//! solving engine can assume well-formed input throughout.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use derive_more::{Display, Error, From};
use gridlock_core::{Board, BoardConfig};

/// Failure to load a puzzle file.
#[derive(Debug, Display, Error, From)]
pub enum ReadError {
    /// The file could not be read at all.
    #[display("cannot read puzzle: {_0}")]
    #[from]
    Io(#[error(source)] io::Error),

    /// A row has the wrong number of cells.
    #[display("row {line} has {actual} cells, expected {expected}")]
    RowLength {
        /// 1-based line number.
        line: usize,
        /// The board's side length.
        expected: usize,
        /// The number of characters found.
        actual: usize,
    },

    /// The file has the wrong number of rows.
    #[display("puzzle has {actual} rows, expected {expected}")]
    RowCount {
        /// The board's side length.
        expected: usize,
        /// The number of rows found.
        actual: usize,
    },

    /// A character is neither a symbol nor the unknown marker.
    #[display("row {line} contains {symbol:?}, which is not a board symbol")]
    BadSymbol {
        /// 1-based line number.
        line: usize,
        /// The offending character.
        symbol: char,
    },
}

/// Reads a board from any buffered source.
///
/// Lines are trimmed of surrounding whitespace, so files with Windows line
/// endings or trailing spaces load fine.
///
/// # Errors
///
/// Returns a [`ReadError`] on I/O failure, a wrong row count or row length,
/// or a character outside the alphabet and unknown marker.
pub fn read<R>(source: R, config: BoardConfig) -> Result<Board, ReadError>
where
    R: BufRead,
{
    let size = config.size();
    let mut rows = Vec::with_capacity(size);
    for (index, line) in source.lines().enumerate() {
        let row = line?.trim().to_owned();
        log::debug!("read row |{row}|");
        let cells = row.chars().count();
        if cells != size {
            return Err(ReadError::RowLength {
                line: index + 1,
                expected: size,
                actual: cells,
            });
        }
        if let Some(symbol) = row
            .chars()
            .find(|&ch| ch != config.unknown() && config.symbol(ch).is_none())
        {
            return Err(ReadError::BadSymbol {
                line: index + 1,
                symbol,
            });
        }
        rows.push(row);
    }
    if rows.len() != size {
        return Err(ReadError::RowCount {
            expected: size,
            actual: rows.len(),
        });
    }
    let mut board = Board::new(config);
    board.set_rows(&rows);
    Ok(board)
}

/// Reads a board from a file path.
///
/// # Errors
///
/// As for [`read`].
pub fn read_path<P>(path: P, config: BoardConfig) -> Result<Board, ReadError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    read(BufReader::new(file), config)
}

#[cfg(test)]
mod tests {
    use gridlock_core::Position;

    use super::*;

    #[test]
    fn test_reads_well_formed_puzzle() {
        let text = "\
32...14..
9..4.2..3
..6.7...9
8.1..5...
...1.6...
...7..1.8
1...9.5..
2..8.4..7
..45...31
";
        let board = read(text.as_bytes(), BoardConfig::standard()).unwrap();
        assert_eq!(
            board.tile(Position::new(0, 0)).value(),
            board.config().symbol('3')
        );
        assert_eq!(board.to_string(), text.trim_end());
    }

    #[test]
    fn test_trims_line_endings() {
        let mut text = String::new();
        for _ in 0..9 {
            text.push_str(".........\r\n");
        }
        let board = read(text.as_bytes(), BoardConfig::standard()).unwrap();
        assert!(!board.is_complete());
    }

    #[test]
    fn test_rejects_short_row() {
        let text = "123456789\n12345678\n";
        let err = read(text.as_bytes(), BoardConfig::standard()).unwrap_err();
        assert!(matches!(
            err,
            ReadError::RowLength {
                line: 2,
                expected: 9,
                actual: 8
            }
        ));
    }

    #[test]
    fn test_rejects_wrong_row_count() {
        let text = ".........\n.........\n";
        let err = read(text.as_bytes(), BoardConfig::standard()).unwrap_err();
        assert!(matches!(
            err,
            ReadError::RowCount {
                expected: 9,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_rejects_bad_symbol() {
        let mut rows = vec!["........."; 9];
        rows[4] = "....x....";
        let text = rows.join("\n");
        let err = read(text.as_bytes(), BoardConfig::standard()).unwrap_err();
        assert!(matches!(
            err,
            ReadError::BadSymbol {
                line: 5,
                symbol: 'x'
            }
        ));
    }

    #[test]
    fn test_reads_hex16_puzzle() {
        let mut text = String::new();
        for _ in 0..16 {
            text.push_str("0123456789ABCDEF\n");
        }
        let board = read(text.as_bytes(), BoardConfig::hex16()).unwrap();
        assert!(board.is_complete());
    }

    #[test]
    fn test_error_display() {
        let err = ReadError::RowLength {
            line: 3,
            expected: 9,
            actual: 7,
        };
        assert_eq!(err.to_string(), "row 3 has 7 cells, expected 9");
    }
}
