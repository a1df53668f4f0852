//! Move ordering heuristics for search.

use rand::Rng;

use super::constants::{
    CENTER_BONUS, CHECK_ORDER_BONUS, EXTENDED_CENTER_BONUS, MATE_ORDER_BONUS,
    PROMOTION_ORDER_BONUS,
};
use super::SearchParams;
use crate::board::types::ScoredMoveList;
use crate::board::{Board, CastlingRights, Move, MoveList, Square};

/// Heuristic priority of `mv`; higher is searched first.
///
/// Capture value, mate/check found by playing the move out, promotion and
/// centre bonuses, plus random jitter when `params.jitter > 0`.
pub fn order_score<R: Rng + ?Sized>(
    board: &Board,
    mv: Move,
    params: &SearchParams,
    rng: &mut R,
) -> i32 {
    let Some((color, attacker)) = board.piece_at(mv.from) else {
        return i32::MIN;
    };
    let mut score = 0;

    if let Some((_, victim)) = board.piece_at(mv.to) {
        score += victim.value() * params.capture_weight - attacker.value();
    }

    let (next, outcome) = board.apply(mv);
    let opponent = color.opponent();
    if next.is_in_check(opponent) {
        if next.has_any_legal_move(opponent, CastlingRights::none()) {
            score += CHECK_ORDER_BONUS;
        } else {
            score += MATE_ORDER_BONUS;
        }
    }

    if outcome.is_promotion {
        score += PROMOTION_ORDER_BONUS;
    }

    score += center_bonus(mv.to);

    if params.jitter > 0 {
        score += rng.gen_range(0..=params.jitter);
    }

    score
}

fn center_bonus(square: Square) -> i32 {
    match (square.row(), square.col()) {
        (3..=4, 3..=4) => CENTER_BONUS,
        (2..=5, 2..=5) => EXTENDED_CENTER_BONUS,
        _ => 0,
    }
}

/// Score and sort `moves`, best first.
pub(crate) fn order_moves<R: Rng + ?Sized>(
    board: &Board,
    moves: &MoveList,
    params: &SearchParams,
    rng: &mut R,
) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in moves {
        scored.push(mv, order_score(board, mv, params, rng));
    }
    scored.sort_by_score_desc();
    scored
}
