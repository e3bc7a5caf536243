//! # `sudoku_solver`
//!
//! A command-line Sudoku solver. Puzzles are read from delimited text (one
//! row per line, cells separated by commas or whitespace; anything that is
//! not a digit 1-9 counts as an unknown cell), solved by best-first search
//! over candidate-set board states, re-checked against the original givens,
//! and printed with a statistics summary.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a single puzzle file
//! sudoku_solver puzzle.csv
//! sudoku_solver file --path puzzle.csv
//!
//! # Solve a puzzle given inline
//! sudoku_solver text --input "5,3,,,7,,,,
//! 6,,,1,9,5,,,
//! ..."
//!
//! # Solve every .csv/.sudoku file under a directory
//! sudoku_solver dir --path puzzles/
//!
//! # Generate shell completions
//! sudoku_solver completions bash
//! ```
//!
//! Common options: `--verify` (re-check the solution, default on),
//! `--stats` (print the statistics table, default on), `--quiet` (suppress
//! board printing), and `--selection` to switch between the
//! most-constrained-cell branching heuristic and a plain row-major scan.

use crate::command_line::cli::{Cli, Commands, solve_dir, solve_path, solve_text};
use clap::{CommandFactory, Parser};

mod command_line;
mod sudoku;

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// figures in the statistics table.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::File { path, common }) => solve_path(&path, &common),
        Some(Commands::Text { input, common }) => solve_text(&input, &common),
        Some(Commands::Dir { path, common }) => solve_dir(&path, &common),
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
        None => match cli.path {
            Some(path) => solve_path(&path, &cli.common),
            None => {
                eprintln!("No command provided. Use --help for more information.");
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
