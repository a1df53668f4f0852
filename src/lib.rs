//! Chess rules engine and minimax opponent on a 64-square mailbox board.
//!
//! [`board`] holds the rules, evaluation and search; [`game`] strings them
//! together into a playable game with move validation and history.

pub mod board;
pub mod game;

pub use board::{
    find_best_move, Board, CastleSide, CastlingRights, Color, Difficulty, GameStatus, Move, Piece,
    Position, SearchParams, SearchResult, Square,
};
pub use game::{Game, MoveRecord};
