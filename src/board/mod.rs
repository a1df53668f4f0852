//! Chess board representation, rules and search.
//!
//! The board is a flat 64-square `Copy` value. Every rule operation takes
//! the board (and, where castling matters, the castling rights) by value or
//! reference and returns fresh results, so callers and the search can share
//! positions freely.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Board, CastlingRights, Square};
//!
//! let board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let moves = board.legal_moves(e2, CastlingRights::all());
//! assert_eq!(moves.len(), 2);
//! ```

mod attack_tables;
mod builder;
mod check;
mod error;
mod eval;
mod eval_terms;
mod fen;
mod legal;
mod make_move;
mod movegen;
mod perft;
pub mod prelude;
mod search;
mod state;
mod terminal;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{CastlingError, DifficultyError, FenError, MoveError, SquareError};
pub use fen::Position;
pub use make_move::MoveOutcome;
pub use state::Board;
pub use terminal::GameStatus;
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square,
    PROMOTION_PIECES,
};

// Public API - evaluation, search functions and configuration
pub use eval::evaluate;
pub use search::{
    find_best_move, find_best_move_with, order_score, Difficulty, SearchParams, SearchResult,
    SearchStats, MATE_SCORE, MATE_THRESHOLD,
};

pub(crate) use types::KING_HOME_COL;
