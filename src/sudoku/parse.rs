#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for delimited-text Sudoku grids.
//!
//! The expected shape is one row per line with cells separated by commas
//! (CSV-style) or plain whitespace. The parser is deliberately forgiving:
//!
//! - Any cell token that is not a digit `1..=9` (an empty field, a `0`, a
//!   `.`, a stray word) stands for an unknown cell.
//! - Lines starting with `#` are comments and are skipped, as are blank
//!   lines.
//! - Short rows are padded with unknowns, long rows are truncated, and any
//!   rows past the ninth are ignored; missing rows stay unknown.
//!
//! The result is always a well-formed 9x9 [`Grid`]; whether that grid is
//! solvable is the solver's business, not the parser's.

use crate::sudoku::board::{Grid, SIDE};
use itertools::Itertools;
use std::io::{self, BufRead};
use std::path::Path;

fn parse_cell(token: &str) -> u8 {
    match token.trim().parse::<u8>() {
        Ok(digit @ 1..=9) => digit,
        _ => 0,
    }
}

fn parse_row(line: &str) -> [u8; SIDE] {
    let mut row = [0; SIDE];

    let tokens: Vec<&str> = if line.contains(',') {
        line.split(',').collect_vec()
    } else {
        line.split_whitespace().collect_vec()
    };

    for (cell, token) in row.iter_mut().zip(tokens) {
        *cell = parse_cell(token);
    }

    row
}

/// Reads a grid from any buffered source.
///
/// # Errors
///
/// Returns the underlying `io::Error` when a line cannot be read. Malformed
/// content is not an error; see the module documentation.
pub fn parse_grid<R: BufRead>(reader: R) -> io::Result<Grid> {
    let mut grid = [[0; SIDE]; SIDE];
    let mut rows = grid.iter_mut();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match rows.next() {
            Some(row) => *row = parse_row(&line),
            None => break,
        }
    }

    Ok(grid)
}

/// Parses a grid from an in-memory string. Infallible by construction.
#[must_use]
pub fn parse_str(input: &str) -> Grid {
    parse_grid(input.as_bytes()).unwrap_or_else(|_| unreachable!("reading from memory cannot fail"))
}

/// Opens `path` and parses its contents as a grid.
///
/// # Errors
///
/// Returns the `io::Error` when the file cannot be opened or read.
pub fn parse_file<P: AsRef<Path>>(path: P) -> io::Result<Grid> {
    let file = std::fs::File::open(path)?;
    parse_grid(io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::board::EXAMPLE;
    use std::io::Cursor;

    #[test]
    fn test_parse_csv_grid() {
        let input = "\
            5,3,,,7,,,,\n\
            6,,,1,9,5,,,\n\
            ,9,8,,,,,6,\n\
            8,,,,6,,,,3\n\
            4,,,8,,3,,,1\n\
            7,,,,2,,,,6\n\
            ,6,,,,,2,8,\n\
            ,,,4,1,9,,,5\n\
            ,,,,8,,,7,9\n";
        let grid = parse_grid(Cursor::new(input)).expect("in-memory read");
        assert_eq!(grid, EXAMPLE);
    }

    #[test]
    fn test_parse_whitespace_grid() {
        let input = "\
            5 3 0 0 7 0 0 0 0\n\
            6 0 0 1 9 5 0 0 0\n\
            0 9 8 0 0 0 0 6 0\n\
            8 0 0 0 6 0 0 0 3\n\
            4 0 0 8 0 3 0 0 1\n\
            7 0 0 0 2 0 0 0 6\n\
            0 6 0 0 0 0 2 8 0\n\
            0 0 0 4 1 9 0 0 5\n\
            0 0 0 0 8 0 0 7 9\n";
        assert_eq!(parse_str(input), EXAMPLE);
    }

    #[test]
    fn test_junk_tokens_are_unknowns() {
        let grid = parse_str("5,x,.,?,12,0,-3,9.5,7\n");
        assert_eq!(grid[0], [5, 0, 0, 0, 0, 0, 0, 0, 7]);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let input = "# puzzle of the day\n\n1,2,3,4,5,6,7,8,9\n";
        let grid = parse_str(input);
        assert_eq!(grid[0], [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(grid[1], [0; SIDE]);
    }

    #[test]
    fn test_short_and_long_rows_are_squared_off() {
        let grid = parse_str("1,2,3\n4,5,6,7,8,9,1,2,3,4,5,6\n");
        assert_eq!(grid[0], [1, 2, 3, 0, 0, 0, 0, 0, 0]);
        assert_eq!(grid[1], [4, 5, 6, 7, 8, 9, 1, 2, 3]);
    }

    #[test]
    fn test_rows_past_the_ninth_are_ignored() {
        let mut input = String::new();
        for _ in 0..12 {
            input.push_str("1,1,1,1,1,1,1,1,1\n");
        }
        let grid = parse_str(&input);
        assert_eq!(grid[8], [1; SIDE]);
    }

    #[test]
    fn test_empty_input_is_all_unknown() {
        assert_eq!(parse_str(""), [[0; SIDE]; SIDE]);
    }
}
