//! Rook file evaluation.

use crate::board::state::Board;
use crate::board::types::{Color, Piece, Square};

use super::tables::{ROOK_OPEN_FILE, ROOK_SEMI_OPEN_FILE};

impl Board {
    /// Bonus for `color`'s rooks standing on open or semi-open files.
    #[must_use]
    pub(crate) fn rook_file_score(&self, color: Color) -> i32 {
        self.pieces_of(color)
            .filter(|&(_, piece)| piece == Piece::Rook)
            .map(|(square, _)| {
                let own = self.has_pawn_on_file(color, square.col());
                let enemy = self.has_pawn_on_file(color.opponent(), square.col());
                match (own, enemy) {
                    (false, false) => ROOK_OPEN_FILE,
                    (false, true) => ROOK_SEMI_OPEN_FILE,
                    _ => 0,
                }
            })
            .sum()
    }

    fn has_pawn_on_file(&self, color: Color, col: usize) -> bool {
        (0..8).any(|row| self.piece_at(Square(row, col)) == Some((color, Piece::Pawn)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_semi_open_files() {
        // White rooks on a1 (open file) and h1 (black pawn on h7 only).
        let board = Board::from_fen("4k3/7p/8/8/8/8/8/R3K2R").unwrap();
        assert_eq!(
            board.rook_file_score(Color::White),
            ROOK_OPEN_FILE + ROOK_SEMI_OPEN_FILE
        );
    }

    #[test]
    fn test_closed_file_gets_nothing() {
        assert_eq!(Board::new().rook_file_score(Color::White), 0);
    }
}
