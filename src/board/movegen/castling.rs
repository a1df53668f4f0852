use super::super::{
    Board, CastleSide, CastlingRights, Color, Piece, Square, KING_HOME_COL,
};

impl Board {
    /// Castling destinations for the king on `king_square`.
    ///
    /// For each side: the right is still held, king and rook stand on their
    /// home squares, the king is not in check, the squares between them are
    /// empty, and the square the king passes through is not attacked. The
    /// landing square is left to the legality filter.
    #[must_use]
    pub fn castling_moves(&self, king_square: Square, rights: CastlingRights) -> Vec<Square> {
        self.castle_sides(king_square, rights)
            .into_iter()
            .map(|side| Square(king_square.row(), side.king_to_col()))
            .collect()
    }

    pub(crate) fn castle_sides(&self, king_square: Square, rights: CastlingRights) -> Vec<CastleSide> {
        let Some((color, Piece::King)) = self.piece_at(king_square) else {
            return Vec::new();
        };
        let row = color.back_row();
        if king_square != Square(row, KING_HOME_COL) || !rights.has_any(color) {
            return Vec::new();
        }
        if self.is_in_check(color) {
            return Vec::new();
        }

        CastleSide::BOTH
            .into_iter()
            .filter(|&side| self.can_castle(color, side, rights))
            .collect()
    }

    fn can_castle(&self, color: Color, side: CastleSide, rights: CastlingRights) -> bool {
        let row = color.back_row();
        if !rights.has(color, side) {
            return false;
        }
        if self.piece_at(Square(row, side.rook_from_col())) != Some((color, Piece::Rook)) {
            return false;
        }
        if side.between_cols().any(|col| !self.is_empty(Square(row, col))) {
            return false;
        }

        let home = Square(row, KING_HOME_COL);
        let transit = Square(row, side.transit_col());
        let relocated = self
            .with_piece(home, None)
            .with_piece(transit, Some((color, Piece::King)));
        !relocated.is_in_check(color)
    }
}
