//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal and legal move generation
//! - `check.rs` - Attack detection and the check oracle
//! - `castling.rs` - Castling preconditions, execution and rights
//! - `terminal.rs` - Checkmate, stalemate and game status
//! - `eval.rs` - Static evaluation layers
//! - `search.rs` - Minimax, pruning and difficulty behaviour
//! - `perft.rs` - Move tree node counts
//! - `proptest.rs` - Property-based tests

mod castling;
mod movegen;
mod proptest;

use super::{Board, Square};

/// Square from algebraic notation, e.g. `sq("e2") == Square(6, 4)`.
pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Board from the placement field of a FEN string.
pub(super) fn board(placement: &str) -> Board {
    Board::from_fen(placement).unwrap()
}
