#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The Sudoku solver core.
//!
//! A puzzle travels through this module as follows: a [`Grid`](board::Grid)
//! parsed from text becomes a [`Board`](board::Board) with derived candidate
//! sets, the [`search`] module explores completions best-first (propagating
//! forced moves and branching on the most constrained cell), and the
//! [`validate`] module re-checks the returned grid against the original.

pub mod board;
pub mod branching;
pub mod candidates;
pub mod parse;
pub mod propagation;
pub mod search;
pub mod selection;
pub mod validate;
