//! Core data structures for grid-marking games.
//!
//! This crate provides the rules-free building blocks of a tic-tac-toe style
//! game on an odd-sized square board. Move validation, turn order and the
//! automated opponent live in `noughts-game`.
//!
//! # Overview
//!
//! - [`symbol`]: the character a participant marks cells with
//! - [`position`]: `(column, row)` coordinates and their linear-index encoding
//! - [`line`]: rows, columns and diagonals, the units of a win
//! - [`board`]: the grid itself, with occupancy, win and full-board queries
//!
//! # Examples
//!
//! ```
//! use noughts_core::{Board, Position, Symbol};
//!
//! let mut board = Board::new(3).unwrap();
//!
//! // 1-based "2.2" is the center cell, linear index 4
//! let center = Position::from_linear_index(4, board.side_length());
//! assert_eq!(center.to_string(), "2.2");
//!
//! board.place(center, Symbol::X);
//! assert!(board.is_occupied(center));
//! ```

pub mod board;
pub mod line;
pub mod position;
pub mod symbol;

pub use self::{
    board::{Board, BoardError},
    line::{Line, LinePositions},
    position::{IndexDisplay, Position},
    symbol::{InvalidSymbol, Symbol},
};
