//! `reversi-rules` is the rules engine for Reversi/Othello: board state,
//! legal-move detection, capture resolution, turn management, forced passes
//! and end-of-game scoring.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked mask operations: directional
//!    shifts, the capture scan and bulk move generation.
//!  - [`Board`] is a checked 8x8 grid built on two bitboards. It answers
//!    "what is in this cell" and "what would this placement capture", and
//!    only this crate can mutate it.
//!  - [`Game`] owns a board and the turn state machine. It is the interface
//!    a presentation layer drives.
//!
//! ```
//! use reversi_rules::{Game, Location, Player};
//!
//! let mut game = Game::new();
//! let report = game.attempt_move(Location::from_coords(2, 3), Player::Black).unwrap();
//! assert_eq!(report.captured.len(), 1);
//! assert_eq!(game.active_player(), Some(Player::White));
//! ```

pub mod bitboard;
pub mod test_utils;

mod board;
mod error;
mod game;
mod location;
mod utils;

pub use board::*;
pub use error::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on a Reversi board.
pub const NUM_SPACES: usize = 64;
