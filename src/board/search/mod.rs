//! Minimax search with alpha-beta pruning.
//!
//! - Fixed depth from the difficulty's `SearchParams`
//! - Heuristic move ordering at every node, beam-limited at the root
//! - Mate scores that prefer quicker wins and slower losses
//! - Castling rights passed by value into every node

mod constants;
mod log;
mod move_order;
mod params;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use self::log::{search_debug, search_trace};
use super::{Board, CastlingRights, Color, Move};
pub use constants::{MATE_SCORE, MATE_THRESHOLD};
pub use move_order::order_score;
pub use params::{Difficulty, SearchParams};

/// Bound wider than any reachable score.
const INFINITY: i32 = MATE_SCORE * 10;

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Nodes entered, root included
    pub nodes: u64,
    /// Move loops abandoned because `beta <= alpha`
    pub cutoffs: u64,
}

/// Best move found at the root and its score for the searching side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
    pub stats: SearchStats,
}

impl SearchResult {
    /// True if the score proves a forced mate for either side.
    #[must_use]
    pub fn is_mate_score(&self) -> bool {
        self.score.abs() >= MATE_THRESHOLD
    }
}

/// Pick a move for `side` at the given difficulty.
///
/// Returns `None` when `side` has no legal move; callers tell checkmate
/// from stalemate with `Board::game_status`.
#[must_use]
pub fn find_best_move(
    board: &Board,
    side: Color,
    rights: CastlingRights,
    difficulty: Difficulty,
) -> Option<SearchResult> {
    find_best_move_with(
        board,
        side,
        rights,
        &difficulty.params(),
        &mut rand::thread_rng(),
    )
}

/// Pick a move for `side` with explicit tuning and randomness source.
pub fn find_best_move_with<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    rights: CastlingRights,
    params: &SearchParams,
    rng: &mut R,
) -> Option<SearchResult> {
    let mut searcher = Searcher {
        params,
        ai: side,
        rng,
        stats: SearchStats::default(),
    };
    searcher.search_root(board, rights)
}

struct Searcher<'a, R: Rng + ?Sized> {
    params: &'a SearchParams,
    ai: Color,
    rng: &'a mut R,
    stats: SearchStats,
}

impl<R: Rng + ?Sized> Searcher<'_, R> {
    fn search_root(&mut self, board: &Board, rights: CastlingRights) -> Option<SearchResult> {
        self.stats.nodes += 1;
        let moves = board.legal_move_list(self.ai, rights);
        if moves.is_empty() {
            search_debug!("{} has no legal move", self.ai);
            return None;
        }

        let mut ordered = move_order::order_moves(board, &moves, self.params, &mut *self.rng);
        if let Some(beam) = self.params.root_beam {
            ordered.truncate(beam.max(1));
        }

        let mut alpha = -INFINITY;
        let mut best: Option<(Move, i32)> = None;
        for scored in ordered.iter() {
            let mv = scored.mv;
            let (child, _) = board.apply(mv);
            let child_rights = rights.after_move(board, mv.from, mv.to);
            let window = if self.params.alpha_beta {
                (alpha, INFINITY)
            } else {
                (-INFINITY, INFINITY)
            };
            let score = self.minimax(&child, child_rights, self.ai.opponent(), 1, window);
            search_trace!("root {} order {} score {}", mv, scored.score, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        let (best_move, score) = best?;
        search_debug!(
            "{} depth {} best {} score {} nodes {} cutoffs {}",
            self.ai,
            self.params.max_depth,
            best_move,
            score,
            self.stats.nodes,
            self.stats.cutoffs
        );
        Some(SearchResult {
            best_move,
            score,
            stats: self.stats,
        })
    }

    /// Value of `board` for the searching side with `to_move` on move.
    fn minimax(
        &mut self,
        board: &Board,
        rights: CastlingRights,
        to_move: Color,
        depth: u32,
        (mut alpha, mut beta): (i32, i32),
    ) -> i32 {
        self.stats.nodes += 1;
        if depth >= self.params.max_depth {
            return board.evaluate(self.ai, self.params);
        }

        let moves = board.legal_move_list(to_move, rights);
        if moves.is_empty() {
            if !board.is_in_check(to_move) {
                return 0;
            }
            let mate = MATE_SCORE - depth as i32;
            return if to_move == self.ai { -mate } else { mate };
        }

        let maximizing = to_move == self.ai;
        let ordered = move_order::order_moves(board, &moves, self.params, &mut *self.rng);
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for scored in ordered.iter() {
            let mv = scored.mv;
            let (child, _) = board.apply(mv);
            let child_rights = rights.after_move(board, mv.from, mv.to);
            let value = self.minimax(
                &child,
                child_rights,
                to_move.opponent(),
                depth + 1,
                (alpha, beta),
            );

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if self.params.alpha_beta && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
