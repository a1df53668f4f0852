//! Perft: count leaf nodes of the legal move tree.
//!
//! Without en passant the counts match the standard tables up to depth 4
//! from the starting position.

use super::{Board, CastlingRights, Color};

impl Board {
    /// Number of legal move sequences of length `depth` for `side` to move.
    #[must_use]
    pub fn perft(&self, side: Color, rights: CastlingRights, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_move_list(side, rights);
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|&mv| {
                let (next, _) = self.apply(mv);
                let next_rights = rights.after_move(self, mv.from, mv.to);
                next.perft(side.opponent(), next_rights, depth - 1)
            })
            .sum()
    }

    /// Per-move breakdown of `perft`, for debugging move generation.
    #[must_use]
    pub fn perft_divide(
        &self,
        side: Color,
        rights: CastlingRights,
        depth: u32,
    ) -> Vec<(super::Move, u64)> {
        self.legal_move_list(side, rights)
            .iter()
            .map(|&mv| {
                let (next, _) = self.apply(mv);
                let next_rights = rights.after_move(self, mv.from, mv.to);
                (
                    mv,
                    next.perft(side.opponent(), next_rights, depth.saturating_sub(1)),
                )
            })
            .collect()
    }
}
