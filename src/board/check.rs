//! Attack detection and the check oracle.

use super::attack_tables::{
    BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRECTIONS,
};
use super::{Board, Color, Piece, Square};

impl Board {
    /// True if any piece of `by` could move to `square` by its raw pattern.
    ///
    /// Scans outward from the target instead of generating every attacker's
    /// moves; pawn pushes are ignored because they never land on an
    /// occupied square.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let back = -by.pawn_direction();
        for dc in [-1, 1] {
            if let Some(from) = square.offset(back, dc) {
                if self.piece_at(from) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&sq| self.piece_at(sq) == Some((by, Piece::Knight)))
        {
            return true;
        }

        if KING_TARGETS[square.index()]
            .iter()
            .any(|&sq| self.piece_at(sq) == Some((by, Piece::King)))
        {
            return true;
        }

        self.ray_hits(square, by, &BISHOP_DIRECTIONS, Piece::Bishop)
            || self.ray_hits(square, by, &ROOK_DIRECTIONS, Piece::Rook)
    }

    /// First piece met along each ray is a `by` slider of kind `slider` or a queen.
    fn ray_hits(
        &self,
        square: Square,
        by: Color,
        directions: &[(isize, isize)],
        slider: Piece,
    ) -> bool {
        for &(dr, dc) in directions {
            let mut current = square;
            while let Some(next) = current.offset(dr, dc) {
                if let Some((color, piece)) = self.piece_at(next) {
                    if color == by && (piece == slider || piece == Piece::Queen) {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }

    /// Is `color`'s king attacked? A board without that king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }
}
