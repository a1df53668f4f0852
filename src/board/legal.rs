//! Legality filter: pseudo-legal moves minus those leaving the mover in check.

use super::{Board, CastlingRights, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Legal destinations for the piece on `from`, castling included.
    ///
    /// Each candidate is applied to a copy of the board and kept only if
    /// the mover's king is safe afterwards. An off-board origin yields
    /// nothing. An empty origin is a caller error: it asserts in debug
    /// builds and yields nothing in release.
    #[must_use]
    pub fn legal_moves(&self, from: Square, rights: CastlingRights) -> Vec<Square> {
        if !from.is_valid() {
            return Vec::new();
        }
        debug_assert!(
            self.piece_at(from).is_some(),
            "legal_moves called on empty square {from}"
        );
        let mut moves = Vec::new();
        self.for_each_legal_move_from(from, rights, |mv| {
            moves.push(mv.to);
            true
        });
        moves
    }

    /// Every legal move for `color`, with promotions resolved to queens.
    #[must_use]
    pub fn legal_move_list(&self, color: Color, rights: CastlingRights) -> MoveList {
        let mut list = MoveList::new();
        for (from, _) in self.pieces_of(color) {
            self.for_each_legal_move_from(from, rights, |mv| {
                list.push(mv);
                true
            });
        }
        list
    }

    /// True as soon as one legal move for `color` is found.
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color, rights: CastlingRights) -> bool {
        let mut found = false;
        for (from, _) in self.pieces_of(color) {
            self.for_each_legal_move_from(from, rights, |_| {
                found = true;
                false
            });
            if found {
                return true;
            }
        }
        false
    }

    /// True if `mv` does not leave the mover's own king in check.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        match self.piece_at(mv.from) {
            Some((color, _)) => !self.apply(mv).0.is_in_check(color),
            None => false,
        }
    }

    /// Feed each legal move from `from` to `visit`; stop when it returns false.
    fn for_each_legal_move_from<F>(&self, from: Square, rights: CastlingRights, mut visit: F)
    where
        F: FnMut(Move) -> bool,
    {
        let Some((color, piece)) = self.piece_at(from) else {
            return;
        };

        let mut targets = Vec::with_capacity(28);
        self.push_pseudo_targets(from, &mut targets);
        for to in targets {
            let mv = if piece == Piece::Pawn && to.row() == color.promotion_row() {
                Move::with_promotion(from, to, Piece::Queen)
            } else {
                Move::new(from, to)
            };
            if self.is_legal(mv) && !visit(mv) {
                return;
            }
        }

        if piece == Piece::King {
            for side in self.castle_sides(from, rights) {
                let mv = Move::castling(from, side);
                if self.is_legal(mv) && !visit(mv) {
                    return;
                }
            }
        }
    }
}
