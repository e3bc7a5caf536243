#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The branch generator: one child board per candidate of the selected cell.

use crate::sudoku::board::Board;
use crate::sudoku::propagation::propagate;
use crate::sudoku::selection::CellSelection;

/// Expands `board` into its child states.
///
/// The selected cell contributes one child per remaining candidate; each
/// child is an independent clone that receives the placement and a full
/// propagation pass. Returns no children when the board has no unfilled cell
/// left, and none either when the selected cell's candidate set is empty:
/// that branch is dead and no invalid placement is ever attempted.
#[must_use]
pub fn expand<S: CellSelection>(board: &Board, selection: &S) -> Vec<Board> {
    let Some((row, col)) = selection.pick(board) else {
        return Vec::new();
    };

    let digits = board.candidates(row, col).digits();
    let mut children = Vec::with_capacity(digits.len());

    for digit in digits {
        let mut child = board.clone();
        child.place(row, col, digit);
        propagate(&mut child);
        children.push(child);
    }

    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::board::{EXAMPLE_SOLUTION, SIDE};
    use crate::sudoku::selection::MostConstrained;

    #[test]
    fn test_expand_complete_board_has_no_children() {
        let board = Board::from_grid(EXAMPLE_SOLUTION);
        assert!(expand(&board, &MostConstrained).is_empty());
    }

    #[test]
    fn test_expand_empty_board_branches_on_first_cell() {
        let board = Board::from_grid([[0; SIDE]; SIDE]);
        let children = expand(&board, &MostConstrained);

        assert_eq!(children.len(), 9);
        for (i, child) in children.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let digit = i as u8 + 1;
            assert_eq!(child.value(0, 0), digit);
        }
    }

    #[test]
    fn test_expand_contradiction_is_a_dead_end() {
        // 1..4 in row 0, 5..8 in column 8 and a 9 in the shared box leave
        // (0, 8) with no digit at all.
        let mut grid = [[0; SIDE]; SIDE];
        for i in 0..4 {
            #[allow(clippy::cast_possible_truncation)]
            {
                grid[0][i] = i as u8 + 1;
                grid[i + 1][8] = i as u8 + 5;
            }
        }
        grid[2][6] = 9;

        let board = Board::from_grid(grid);
        assert!(board.candidates(0, 8).is_empty());
        assert!(expand(&board, &MostConstrained).is_empty());
    }

    #[test]
    fn test_children_are_propagated() {
        let mut grid = EXAMPLE_SOLUTION;
        grid[0][0] = 0;
        grid[0][1] = 0;

        let board = Board::from_grid(grid);
        let children = expand(&board, &MostConstrained);

        // Placing either hole forces the other, so every child is complete.
        assert!(!children.is_empty());
        for child in &children {
            assert!(child.is_complete());
        }
    }
}
