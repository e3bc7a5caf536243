#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Post-solve integrity checks, independent of how the solution was found.

use crate::sudoku::board::{BOX_SIDE, Grid, SIDE};
use std::error::Error;
use std::fmt;

/// Every row, column and box of a solved grid sums to this.
const GROUP_SUM: u32 = 45;

/// The ways a candidate solution can fail validation. Each variant carries
/// the location of the first violation found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A cell that was given in the original grid holds a different value.
    GivenMutated {
        /// Row of the mutated given.
        row: usize,
        /// Column of the mutated given.
        col: usize,
    },
    /// A row does not sum to 45.
    RowSumMismatch {
        /// The offending row.
        row: usize,
    },
    /// A column does not sum to 45.
    ColSumMismatch {
        /// The offending column.
        col: usize,
    },
    /// A 3x3 box does not sum to 45.
    BoxSumMismatch {
        /// Row of the box's top-left cell.
        row: usize,
        /// Column of the box's top-left cell.
        col: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::GivenMutated { row, col } => {
                write!(f, "given cell ({row}, {col}) was changed by the solver")
            }
            Self::RowSumMismatch { row } => write!(f, "row {row} does not add up"),
            Self::ColSumMismatch { col } => write!(f, "column {col} does not add up"),
            Self::BoxSumMismatch { row, col } => {
                write!(f, "box at ({row}, {col}) does not add up")
            }
        }
    }
}

impl Error for ValidationError {}

/// Checks `candidate` against the puzzle it came from: every given of
/// `original` must be intact, and every row, column and box must sum to 45.
/// The first violation found is returned.
///
/// The sum check is necessary but not sufficient for a valid grid; the
/// stronger requirement that each group is a permutation of 1..=9 is left to
/// the callers that want it.
///
/// # Errors
///
/// The [`ValidationError`] variant naming the first offending cell, row,
/// column or box.
pub fn validate(original: &Grid, candidate: &Grid) -> Result<(), ValidationError> {
    for row in 0..SIDE {
        for col in 0..SIDE {
            if original[row][col] != 0 && original[row][col] != candidate[row][col] {
                return Err(ValidationError::GivenMutated { row, col });
            }
        }
    }

    for row in 0..SIDE {
        let sum = candidate[row].iter().map(|&d| u32::from(d)).sum::<u32>();
        if sum != GROUP_SUM {
            return Err(ValidationError::RowSumMismatch { row });
        }
    }

    for col in 0..SIDE {
        let sum = (0..SIDE).map(|row| u32::from(candidate[row][col])).sum::<u32>();
        if sum != GROUP_SUM {
            return Err(ValidationError::ColSumMismatch { col });
        }
    }

    for row in (0..SIDE).step_by(BOX_SIDE) {
        for col in (0..SIDE).step_by(BOX_SIDE) {
            let sum = (0..BOX_SIDE)
                .flat_map(|r| (0..BOX_SIDE).map(move |c| (row + r, col + c)))
                .map(|(r, c)| u32::from(candidate[r][c]))
                .sum::<u32>();
            if sum != GROUP_SUM {
                return Err(ValidationError::BoxSumMismatch { row, col });
            }
        }
    }

    Ok(())
}
