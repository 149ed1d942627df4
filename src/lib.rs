//! A computer opponent for the board game 'Connect 4'
//!
//! The agent chooses moves with a depth-limited minimax search with
//! alpha-beta pruning, scoring the positions at the search horizon with
//! a static evaluation of every run of four cells.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_ai::{board::{Board, Piece}, engine::select_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has three in a row along the bottom
//! let board = Board::from_moves("112233")?;
//! let column = select_move(&board, 5, Piece::PlayerOne, Piece::PlayerTwo);
//!
//! assert_eq!(column, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod scanner;

pub mod win;

pub mod evaluation;

pub mod search;

pub mod config;

pub mod engine;

pub mod game;

pub mod arena;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// a standard board must have room for an alignment in every direction
const_assert!(WIDTH >= scanner::WINDOW_LEN && HEIGHT >= scanner::WINDOW_LEN);
// wins must outweigh any sum of window scores
const_assert!(search::WIN_SCORE > 1_000_000 * (WIDTH * HEIGHT) as i64);
