//! The `gridlock` command-line Sudoku solver.
//!
//! Reads a puzzle in the SadMan Sudoku `.sdk` format, rejects boards that
//! already contain duplicates, and otherwise solves by constraint
//! propagation plus backtracking search, printing the solved grid.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use gridlock_core::BoardConfig;
use gridlock_solver::Solver;

use crate::trace::TraceListener;

mod reader;
mod trace;

/// Supported board sizes.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum BoardSize {
    /// 9×9 board over the symbols `1`-`9`.
    #[value(name = "9")]
    Nine,
    /// 16×16 board over the symbols `0`-`9` and `A`-`F`.
    #[value(name = "16")]
    Sixteen,
}

impl BoardSize {
    fn config(self) -> BoardConfig {
        match self {
            BoardSize::Nine => BoardConfig::standard(),
            BoardSize::Sixteen => BoardConfig::hex16(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file: one line per row, `.` for unknown cells.
    file: PathBuf,

    /// Board size.
    #[arg(long, value_enum, default_value = "9")]
    size: BoardSize,

    /// Log solving progress (set RUST_LOG=debug or trace to see it).
    #[arg(short, long)]
    trace: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut board = match reader::read_path(&args.file, args.size.config()) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{}: {err}", args.file.display());
            return ExitCode::FAILURE;
        }
    };
    if args.trace {
        let config = board.config().clone();
        board.add_listener(Box::new(TraceListener::new(config)));
    }

    if !board.is_consistent() {
        println!("Board has duplicates; rejected");
        return ExitCode::FAILURE;
    }

    if Solver::new().solve(&mut board) {
        println!("{board}");
        ExitCode::SUCCESS
    } else {
        println!("No solution found");
        ExitCode::FAILURE
    }
}
