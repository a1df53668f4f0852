//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use mailbox_chess::board::prelude::*;
//!
//! let board = Board::new();
//! assert!(!board.is_checkmate(Color::White));
//! ```

pub use super::{
    find_best_move, Board, BoardBuilder, CastleSide, CastlingRights, Color, Difficulty,
    GameStatus, Move, MoveOutcome, Piece, Position, SearchParams, SearchResult, Square,
};
