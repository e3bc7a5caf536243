#![allow(dead_code)]

use crate::sudoku::board::{Board, Grid};
use crate::sudoku::parse::{parse_file, parse_str};
use crate::sudoku::search::{NoSolution, Search, SearchStats};
use crate::sudoku::selection::FirstOpen;
use crate::sudoku::validate::validate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the Sudoku solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku_solver", version, about = "A best-first Sudoku solver")]
pub(crate) struct Cli {
    /// An optional path argument. If provided without a subcommand, it's
    /// treated as the path to a puzzle file to solve.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `dir`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands for the Sudoku solver.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a puzzle file. One row per line, cells separated by commas or
    /// whitespace; anything that is not a digit 1-9 counts as an unknown.
    File {
        /// Path to the puzzle file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle provided as plain text (e.g. "5,3,,,7,,,,\n6,,,1,...").
    Text {
        /// Literal puzzle input as a string, rows separated by newlines.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every puzzle file found under a directory.
    Dir {
        /// Path to the directory to scan for `.csv` and `.sudoku` files.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable re-checking of the solution against the original givens and
    /// the row/column/box sums.
    #[arg(short, long, default_value_t = true)]
    pub(crate) verify: bool,

    /// Enable printing of search statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Suppress printing of the puzzle and its solution.
    #[arg(short, long, default_value_t = false)]
    pub(crate) quiet: bool,

    /// Specifies how the search picks the cell to branch on.
    #[arg(long, value_enum, default_value_t = SelectionType::MostConstrained)]
    pub(crate) selection: SelectionType,
}

/// The cell-selection strategies exposed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SelectionType {
    /// Branch on the unfilled cell with the fewest candidates.
    #[default]
    MostConstrained,
    /// Branch on the first unfilled cell in row-major order.
    FirstOpen,
}

impl fmt::Display for SelectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MostConstrained => "most-constrained",
            Self::FirstOpen => "first-open",
        })
    }
}

fn run_search(grid: Grid, selection: SelectionType) -> (Result<Board, NoSolution>, SearchStats) {
    match selection {
        SelectionType::MostConstrained => {
            let mut search = Search::new(grid);
            let result = search.run();
            (result, *search.stats())
        }
        SelectionType::FirstOpen => {
            let mut search = Search::with_selection(grid, FirstOpen);
            let result = search.run();
            (result, *search.stats())
        }
    }
}

/// Solve a puzzle file.
///
/// # Errors
///
/// If the file cannot be read, the search exhausts its frontier, or the
/// solution fails verification.
pub(crate) fn solve_path(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_file() {
        return Err(format!("not a puzzle file: {}", path.display()));
    }

    let time = std::time::Instant::now();
    let grid = parse_file(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let parse_time = time.elapsed();

    println!("Solving: {}", path.display());
    solve_and_report(grid, common, parse_time)
}

/// Solve a puzzle given as inline text.
///
/// # Errors
///
/// If the search exhausts its frontier or the solution fails verification.
pub(crate) fn solve_text(input: &str, common: &CommonOptions) -> Result<(), String> {
    let time = std::time::Instant::now();
    let grid = parse_str(input);
    let parse_time = time.elapsed();

    solve_and_report(grid, common, parse_time)
}

/// Solves a directory of puzzle files.
///
/// This function iterates over all `.csv` and `.sudoku` files under the
/// directory, parses each file, solves it, and reports the results.
///
/// # Errors
///
/// If the provided path is not a directory, or any puzzle fails.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!("not a directory: {}", path.display()));
    }

    for entry in walkdir::WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }

        if file_path
            .extension()
            .is_none_or(|ext| ext != "csv" && ext != "sudoku")
        {
            eprintln!("Skipping non-puzzle file: {}", file_path.display());
            continue;
        }

        solve_path(file_path, common)?;
    }

    Ok(())
}

/// Parses, solves, verifies and reports a single puzzle.
///
/// # Errors
///
/// If the search exhausts its frontier or the solution fails verification.
pub(crate) fn solve_and_report(
    grid: Grid,
    common: &CommonOptions,
    parse_time: Duration,
) -> Result<(), String> {
    let initial = Board::from_grid(grid);
    let unknowns = initial.unknowns();

    if !common.quiet {
        println!("Puzzle:\n{initial}\n");
    }

    epoch::advance().unwrap();

    let time = std::time::Instant::now();
    let (result, search_stats) = run_search(grid, common.selection);
    let elapsed = time.elapsed();

    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();

    #[allow(clippy::cast_precision_loss)]
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    #[allow(clippy::cast_precision_loss)]
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    let solution = match result {
        Ok(board) => board,
        Err(e) => {
            if common.stats {
                print_stats(
                    parse_time,
                    elapsed,
                    unknowns,
                    &search_stats,
                    allocated_mib,
                    resident_mib,
                    false,
                );
            }
            return Err(e.to_string());
        }
    };

    if common.verify {
        match validate(&grid, solution.grid()) {
            Ok(()) => println!("Verified: true"),
            Err(e) => return Err(format!("solution failed verification: {e}")),
        }
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            unknowns,
            &search_stats,
            allocated_mib,
            resident_mib,
            true,
        );
    }

    if !common.quiet {
        println!("Solution:\n{solution}");
    }

    Ok(())
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    #[allow(clippy::cast_precision_loss)]
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of puzzle and search statistics.
fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    unknowns: usize,
    s: &SearchStats,
    allocated: f64,
    resident: f64,
    solved: bool,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n========================[ Puzzle Statistics ]========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Givens", 81 - unknowns);
    stat_line("Unknowns", unknowns);

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("States expanded", s.expanded, elapsed_secs);
    stat_line_with_rate("Branch points", s.branch_points, elapsed_secs);
    stat_line("Duplicates skipped", s.duplicates);
    stat_line("Children enqueued", s.enqueued);
    stat_line("Peak frontier", s.peak_frontier);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");

    if solved {
        println!("\nSOLVED");
    } else {
        println!("\nNO SOLUTION");
    }
}
