//! Checkmate and stalemate detection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, CastlingRights, Color};

/// State of the game for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl Board {
    /// `color` is in check and has no legal move.
    ///
    /// Castling is never a legal escape from check, so rights cannot change
    /// the answer here.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color, CastlingRights::none())
    }

    /// `color` is not in check and has no legal move.
    ///
    /// Whenever a castle is available its rook can also step onto the
    /// emptied square next to it, so ignoring rights never turns a position
    /// with moves into a stalemate.
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color, CastlingRights::none())
    }

    /// Classify the position for the side to move.
    #[must_use]
    pub fn game_status(&self, to_move: Color, rights: CastlingRights) -> GameStatus {
        if self.has_any_legal_move(to_move, rights) {
            GameStatus::Ongoing
        } else if self.is_in_check(to_move) {
            GameStatus::Checkmate {
                winner: to_move.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }
}
