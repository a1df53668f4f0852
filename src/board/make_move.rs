//! Applying moves to produce new boards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, CastleSide, Move, Piece, Square};

/// What happened when a move was applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub is_capture: bool,
    /// Kind of the piece removed from the destination, if any
    pub captured: Option<Piece>,
    pub is_castle: bool,
    pub is_promotion: bool,
}

impl Board {
    /// Apply `from -> to`, auto-promoting pawns to queens.
    ///
    /// A king stepping two files from its home square castles: the rook on
    /// that wing jumps to the square the king crossed.
    #[must_use]
    pub fn apply_move(&self, from: Square, to: Square) -> (Board, MoveOutcome) {
        self.apply_move_with_promotion(from, to, None)
    }

    /// Apply `from -> to` with a caller-chosen promotion piece.
    ///
    /// `None`, a king or a pawn as the choice all resolve to a queen. An
    /// off-board square on either end leaves the board unchanged.
    #[must_use]
    pub fn apply_move_with_promotion(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> (Board, MoveOutcome) {
        if !from.is_valid() || !to.is_valid() {
            return (*self, MoveOutcome::default());
        }
        let Some((color, piece)) = self.piece_at(from) else {
            debug_assert!(false, "apply_move from empty square {from}");
            return (*self, MoveOutcome::default());
        };

        let mut next = *self;
        let mut outcome = MoveOutcome::default();

        if let Some((_, victim)) = self.piece_at(to) {
            outcome.is_capture = true;
            outcome.captured = Some(victim);
        }

        next.set(from, None);
        next.set(to, Some((color, piece)));

        if piece == Piece::King && from.row() == color.back_row() {
            if let Some(side) = CastleSide::from_king_move(from, to) {
                let rook_from = Square(from.row(), side.rook_from_col());
                let rook_to = Square(from.row(), side.transit_col());
                if let Some(rook) = next.piece_at(rook_from) {
                    next.set(rook_from, None);
                    next.set(rook_to, Some(rook));
                }
                outcome.is_castle = true;
            }
        }

        if piece == Piece::Pawn && to.row() == color.promotion_row() {
            let promoted = match promotion {
                Some(p @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => p,
                _ => Piece::Queen,
            };
            next.set(to, Some((color, promoted)));
            outcome.is_promotion = true;
        }

        (next, outcome)
    }

    /// Apply a `Move` value.
    #[must_use]
    pub fn apply(&self, mv: Move) -> (Board, MoveOutcome) {
        self.apply_move_with_promotion(mv.from, mv.to, mv.promotion)
    }
}
