//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - (row, col) coordinates, row 0 at Black's back rank
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub(crate) use castling::KING_HOME_COL;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub(crate) use moves::ScoredMoveList;
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use square::Square;
