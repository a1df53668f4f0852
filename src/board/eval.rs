//! Static evaluation.
//!
//! Material is always counted. The positional layer (piece-square tables,
//! rook files) and mobility are switched on and weighted per difficulty,
//! so weaker levels misjudge positions rather than just seeing less far.

use super::search::{Difficulty, SearchParams};
use super::{Board, Color};

impl Board {
    /// Score from `perspective`'s point of view, in centipawns.
    #[must_use]
    pub fn evaluate(&self, perspective: Color, params: &SearchParams) -> i32 {
        let opponent = perspective.opponent();
        let mut score = self.material(perspective) - self.material(opponent);

        if params.positional_weight != 0 {
            let endgame = self.is_endgame();
            let positional = |color: Color| {
                self.piece_square_score(color, endgame) + self.rook_file_score(color)
            };
            score += (positional(perspective) - positional(opponent)) * params.positional_weight
                / 100;
        }

        if params.mobility_weight != 0 {
            score += (self.mobility(perspective) - self.mobility(opponent)) * params.mobility_weight;
        }

        score
    }

    /// Total material value of `color`'s pieces.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.pieces_of(color).map(|(_, piece)| piece.value()).sum()
    }
}

/// Evaluate `board` for `perspective` with a difficulty's preset weights.
#[must_use]
pub fn evaluate(board: &Board, perspective: Color, difficulty: Difficulty) -> i32 {
    board.evaluate(perspective, &difficulty.params())
}
