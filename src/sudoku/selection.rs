#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Strategies for choosing the next cell to branch on.

use crate::sudoku::board::{Board, SIDE};

/// Picks the unfilled cell the search should branch on next, or `None` when
/// the board has no unfilled cell left.
pub trait CellSelection {
    fn pick(&self, board: &Board) -> Option<(usize, usize)>;
}

/// Minimum-remaining-values: the unfilled cell with the fewest candidates.
/// Ties go to the first such cell in row-major order, which keeps the search
/// reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MostConstrained;

impl CellSelection for MostConstrained {
    fn pick(&self, board: &Board) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize, usize)> = None;

        for row in 0..SIDE {
            for col in 0..SIDE {
                if board.value(row, col) != 0 {
                    continue;
                }
                let len = board.candidates(row, col).len();
                if best.is_none_or(|(_, _, fewest)| len < fewest) {
                    best = Some((row, col, len));
                }
            }
        }

        best.map(|(row, col, _)| (row, col))
    }
}

/// Baseline strategy: the first unfilled cell in row-major order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstOpen;

impl CellSelection for FirstOpen {
    fn pick(&self, board: &Board) -> Option<(usize, usize)> {
        (0..SIDE)
            .flat_map(|row| (0..SIDE).map(move |col| (row, col)))
            .find(|&(row, col)| board.value(row, col) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::board::EXAMPLE_SOLUTION;

    #[test]
    fn test_pick_on_complete_board_is_none() {
        let board = Board::from_grid(EXAMPLE_SOLUTION);
        assert_eq!(MostConstrained.pick(&board), None);
        assert_eq!(FirstOpen.pick(&board), None);
    }

    #[test]
    fn test_most_constrained_prefers_fewest_candidates() {
        let mut grid = EXAMPLE_SOLUTION;
        grid[0][0] = 0;
        grid[8][7] = 0;
        grid[8][8] = 0;

        let board = Board::from_grid(grid);
        // All three holes are naked singles; the row-major scan lands on
        // (0, 0) first.
        assert_eq!(MostConstrained.pick(&board), Some((0, 0)));

        // Blanking the 5/2 rectangle spanning the four corner boxes, plus
        // the 2s and 5s of those boxes, leaves the corners with two
        // candidates each while (1, 2) keeps a single one. The single must
        // win over the earlier two-candidate corner.
        let mut grid = EXAMPLE_SOLUTION;
        for (row, col) in [(0, 0), (0, 8), (7, 0), (7, 8), (1, 2), (2, 6), (8, 2), (6, 6)] {
            grid[row][col] = 0;
        }

        let board = Board::from_grid(grid);
        assert_eq!(board.candidates(0, 0).len(), 2);
        assert_eq!(board.candidates(1, 2).len(), 1);
        assert_eq!(MostConstrained.pick(&board), Some((1, 2)));
    }

    #[test]
    fn test_most_constrained_tie_breaks_row_major() {
        let board = Board::from_grid([[0; SIDE]; SIDE]);
        assert_eq!(MostConstrained.pick(&board), Some((0, 0)));
    }

    #[test]
    fn test_first_open_scans_row_major() {
        let mut grid = EXAMPLE_SOLUTION;
        grid[3][5] = 0;
        grid[6][1] = 0;

        let board = Board::from_grid(grid);
        assert_eq!(FirstOpen.pick(&board), Some((3, 5)));
    }
}
