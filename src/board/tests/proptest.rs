//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{
    find_best_move_with, Board, CastlingRights, Color, Difficulty, SearchParams, Square,
};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    0..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play random legal moves from the start, stopping early at game end.
fn random_playout(seed: u64, plies: usize) -> (Board, Color, CastlingRights) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut side = Color::White;
    let mut rights = CastlingRights::all();
    for _ in 0..plies {
        let moves = board.legal_move_list(side, rights);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        rights = rights.after_move(&board, mv.from, mv.to);
        board = board.apply(mv).0;
        side = side.opponent();
    }
    (board, side, rights)
}

/// Check by the definition: some opposing piece can move onto the king.
fn naive_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        return false;
    };
    board
        .pieces_of(color.opponent())
        .any(|(from, _)| board.pseudo_legal_moves(from).contains(&king))
}

proptest! {
    /// Property: no legal move leaves the mover's king in check
    #[test]
    fn prop_legal_moves_never_self_check(seed in seed_strategy(), plies in move_count_strategy()) {
        let (board, side, rights) = random_playout(seed, plies);
        for (from, _) in board.pieces_of(side) {
            for to in board.legal_moves(from, rights) {
                let (after, _) = board.apply_move(from, to);
                prop_assert!(!after.is_in_check(side), "{} {}-{}", board.to_fen(), from, to);
            }
        }
    }

    /// Property: the reverse attack scan agrees with the membership definition
    #[test]
    fn prop_check_oracle_matches_definition(seed in seed_strategy(), plies in move_count_strategy()) {
        let (board, _, _) = random_playout(seed, plies);
        for color in Color::BOTH {
            prop_assert_eq!(board.is_in_check(color), naive_in_check(&board, color), "{}", board.to_fen());
        }
    }

    /// Property: querying moves and scores never changes the board
    #[test]
    fn prop_queries_are_pure(seed in seed_strategy(), plies in move_count_strategy()) {
        let (board, side, rights) = random_playout(seed, plies);
        let before = board;
        let moves: Vec<Vec<Square>> = board
            .pieces_of(side)
            .map(|(from, _)| board.legal_moves(from, rights))
            .collect();
        let again: Vec<Vec<Square>> = board
            .pieces_of(side)
            .map(|(from, _)| board.legal_moves(from, rights))
            .collect();
        prop_assert_eq!(moves, again);

        let params = Difficulty::Hard.params();
        prop_assert_eq!(board.evaluate(side, &params), board.evaluate(side, &params));
        prop_assert_eq!(board, before);
    }

    /// Property: castling rights only ever disappear
    #[test]
    fn prop_castling_rights_are_monotonic(seed in seed_strategy(), plies in move_count_strategy()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut side = Color::White;
        let mut rights = CastlingRights::all();
        for _ in 0..plies {
            let moves = board.legal_move_list(side, rights);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let next = rights.after_move(&board, mv.from, mv.to);
            prop_assert_eq!(next.as_u8() & !rights.as_u8(), 0);
            rights = next;
            board = board.apply(mv).0;
            side = side.opponent();
        }
    }

    /// Property: a legal move list agrees with per-square legal moves
    #[test]
    fn prop_move_list_matches_per_square(seed in seed_strategy(), plies in move_count_strategy()) {
        let (board, side, rights) = random_playout(seed, plies);
        let per_square: usize = board
            .pieces_of(side)
            .map(|(from, _)| board.legal_moves(from, rights).len())
            .sum();
        prop_assert_eq!(board.legal_move_list(side, rights).len(), per_square);
        prop_assert_eq!(board.has_any_legal_move(side, rights), per_square > 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: alpha-beta returns the plain minimax score and move
    #[test]
    fn prop_pruning_preserves_value(seed in seed_strategy(), plies in 0..=20usize) {
        let (board, side, rights) = random_playout(seed, plies);
        let pruned = SearchParams {
            max_depth: 2,
            root_beam: None,
            jitter: 0,
            ..Difficulty::Hard.params()
        };
        let plain = SearchParams { alpha_beta: false, ..pruned.clone() };
        let mut rng = StdRng::seed_from_u64(0);
        let a = find_best_move_with(&board, side, rights, &pruned, &mut rng);
        let b = find_best_move_with(&board, side, rights, &plain, &mut rng);
        match (a, b) {
            (Some(a), Some(b)) => {
                prop_assert_eq!(a.score, b.score);
                prop_assert_eq!(a.best_move, b.best_move);
            }
            (None, None) => {}
            _ => prop_assert!(false, "only one search found a move"),
        }
    }
}
