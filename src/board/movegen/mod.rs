//! Pseudo-legal move generation.
//!
//! Destinations here obey each piece's movement pattern but ignore king
//! safety; the legality filter in `legal.rs` removes self-checks.

mod castling;
mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Piece, Square};

impl Board {
    /// Pseudo-legal destinations for the piece on `from`.
    ///
    /// An empty origin yields no moves.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> Vec<Square> {
        let mut targets = Vec::with_capacity(28);
        self.push_pseudo_targets(from, &mut targets);
        targets
    }

    /// Append the pseudo-legal destinations of the piece on `from` to `out`.
    pub(crate) fn push_pseudo_targets(&self, from: Square, out: &mut Vec<Square>) {
        if !from.is_valid() {
            return;
        }
        let Some((color, piece)) = self.piece_at(from) else {
            return;
        };
        match piece {
            Piece::Pawn => self.push_pawn_targets(from, color, out),
            Piece::Knight => self.push_knight_targets(from, color, out),
            Piece::Bishop => self.push_slider_targets(from, color, &BISHOP_DIRECTIONS, out),
            Piece::Rook => self.push_slider_targets(from, color, &ROOK_DIRECTIONS, out),
            Piece::Queen => self.push_slider_targets(from, color, &QUEEN_DIRECTIONS, out),
            Piece::King => self.push_king_targets(from, color, out),
        }
    }
}
