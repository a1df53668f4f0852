//! Piece-square bonuses: central minors, pawn advancement, king placement.

use crate::board::state::Board;
use crate::board::types::{Color, Piece, Square};

use super::tables::{
    BISHOP_TABLE, ENDGAME_PIECE_THRESHOLD, KING_ENDGAME_TABLE, KING_MIDDLEGAME_TABLE,
    KNIGHT_TABLE, PAWN_TABLE,
};

impl Board {
    /// True once few enough non-pawn pieces remain for king activity to pay.
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        let pieces = self
            .squares
            .iter()
            .flatten()
            .filter(|(_, piece)| !matches!(piece, Piece::Pawn | Piece::King))
            .count();
        pieces <= ENDGAME_PIECE_THRESHOLD
    }

    /// Sum of table bonuses for `color`'s pieces.
    #[must_use]
    pub(crate) fn piece_square_score(&self, color: Color, endgame: bool) -> i32 {
        self.pieces_of(color)
            .map(|(square, piece)| table_value(piece, color, square, endgame))
            .sum()
    }
}

fn table_value(piece: Piece, color: Color, square: Square, endgame: bool) -> i32 {
    let idx = match color {
        Color::White => square.index(),
        Color::Black => square.flip_vertical().index(),
    };
    match piece {
        Piece::Pawn => PAWN_TABLE[idx],
        Piece::Knight => KNIGHT_TABLE[idx],
        Piece::Bishop => BISHOP_TABLE[idx],
        Piece::King if endgame => KING_ENDGAME_TABLE[idx],
        Piece::King => KING_MIDDLEGAME_TABLE[idx],
        Piece::Rook | Piece::Queen => 0,
    }
}
