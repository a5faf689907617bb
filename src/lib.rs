//! A two-player Connect Four engine with a heuristic game-tree AI
//!
//! The rules engine owns the 6x7 grid, validates and applies moves and
//! detects wins and draws. The AI picks the computer's column with a
//! depth-limited minimax search using alpha-beta pruning, heuristic move
//! ordering and a static window evaluation.
//!
//! # Basic Usage
//!
//! ```
//! use fourline_ai::board::Player;
//! use fourline_ai::game::Game;
//! use fourline_ai::search::{select_move, SearchConfig};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = Game::new();
//! game.apply_move(3, Player::Red)?;
//!
//! let config = SearchConfig::default();
//! let reply = select_move(game.board(), Player::Yellow, &config);
//!
//! assert!(reply.is_some());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod error;

pub mod evaluate;

pub mod game;

pub mod search;

mod test;

/// The width of the game board in tiles
pub const COLS: usize = 7;

/// The height of the game board in tiles
pub const ROWS: usize = 6;

/// The run length that wins the game
pub const CONNECT: usize = 4;

// ensure that a winning run fits on the board along every axis
const_assert!(CONNECT <= ROWS);
const_assert!(CONNECT <= COLS);
