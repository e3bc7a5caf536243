#![warn(missing_docs)]
//! This crate implements a best-first Sudoku solver built on per-cell candidate
//! bitmasks, naked-single propagation and most-constrained-cell branching.

/// The `sudoku` module contains the solver core: the board representation, the
/// propagation engine, the branch generator, the best-first search and the
/// post-solve validator, plus the text-grid parser feeding them.
pub mod sudoku;
