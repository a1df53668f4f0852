//! Move generation tests.

use super::{board, sq};
use crate::board::{Board, CastlingRights, Color, MoveOutcome, Piece, Square};

fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
    squares.sort_by_key(|s| s.index());
    squares
}

#[test]
fn test_startpos_has_twenty_moves_each() {
    let b = Board::new();
    assert_eq!(b.legal_move_list(Color::White, CastlingRights::all()).len(), 20);
    assert_eq!(b.legal_move_list(Color::Black, CastlingRights::all()).len(), 20);
}

#[test]
fn test_pawn_single_and_double_push() {
    let b = Board::new();
    assert_eq!(
        sorted(b.legal_moves(sq("e2"), CastlingRights::all())),
        sorted(vec![sq("e3"), sq("e4")])
    );
    assert_eq!(
        sorted(b.legal_moves(sq("d7"), CastlingRights::all())),
        sorted(vec![sq("d6"), sq("d5")])
    );
}

#[test]
fn test_blocked_pawn_cannot_jump() {
    let b = board("4k3/8/8/8/8/4n3/4P3/4K3");
    assert!(b.legal_moves(sq("e2"), CastlingRights::none()).is_empty());

    // Only the double push is blocked.
    let b = board("4k3/8/8/8/4n3/8/4P3/4K3");
    assert_eq!(b.legal_moves(sq("e2"), CastlingRights::none()), vec![sq("e3")]);
}

#[test]
fn test_pawn_captures_diagonally_forward_only() {
    let b = board("8/8/8/3p1p2/4P3/3p4/8/8");
    assert_eq!(
        sorted(b.pseudo_legal_moves(sq("e4"))),
        sorted(vec![sq("e5"), sq("d5"), sq("f5")])
    );
}

#[test]
fn test_knight_from_corner_and_start() {
    let b = Board::new();
    assert_eq!(
        sorted(b.legal_moves(sq("b1"), CastlingRights::all())),
        sorted(vec![sq("a3"), sq("c3")])
    );
    let b = board("N7/8/8/8/8/8/8/8");
    assert_eq!(
        sorted(b.pseudo_legal_moves(sq("a8"))),
        sorted(vec![sq("b6"), sq("c7")])
    );
}

#[test]
fn test_slider_stops_at_blockers() {
    // Rook a1: friendly pawn on a3, enemy knight on d1.
    let b = board("8/8/8/8/8/P7/8/R2n4");
    assert_eq!(
        sorted(b.pseudo_legal_moves(sq("a1"))),
        sorted(vec![sq("a2"), sq("b1"), sq("c1"), sq("d1")])
    );
}

#[test]
fn test_queen_in_open_board_has_27_moves() {
    let b = board("8/8/8/3Q4/8/8/8/8");
    assert_eq!(b.pseudo_legal_moves(sq("d5")).len(), 27);
}

#[test]
fn test_pinned_piece_has_no_legal_moves() {
    let b = board("4r1k1/8/8/8/8/8/4N3/4K3");
    assert!(!b.pseudo_legal_moves(sq("e2")).is_empty());
    assert!(b.legal_moves(sq("e2"), CastlingRights::none()).is_empty());
}

#[test]
fn test_pinned_rook_may_slide_along_pin() {
    let b = board("4r1k1/8/8/8/8/8/4R3/4K3");
    assert_eq!(
        sorted(b.legal_moves(sq("e2"), CastlingRights::none())),
        sorted(
            ["e3", "e4", "e5", "e6", "e7", "e8"]
                .into_iter()
                .map(sq)
                .collect()
        )
    );
}

#[test]
fn test_king_cannot_step_into_attack() {
    let b = board("3r2k1/8/8/8/8/8/8/4K3");
    let moves = b.legal_moves(sq("e1"), CastlingRights::none());
    assert!(!moves.contains(&sq("d1")));
    assert!(!moves.contains(&sq("d2")));
    assert!(moves.contains(&sq("f2")));
}

#[test]
fn test_kings_never_touch() {
    let b = board("8/8/8/3k4/8/3K4/8/8");
    let moves = b.legal_moves(sq("d3"), CastlingRights::none());
    for forbidden in ["c4", "d4", "e4"] {
        assert!(!moves.contains(&sq(forbidden)), "{forbidden} is next to the black king");
    }
}

#[test]
fn test_only_check_evasions_are_legal() {
    // Rook on e8 checks the king on e1: block, capture or step aside.
    let b = board("4r1k1/8/8/8/8/8/3B4/4K3");
    let list = b.legal_move_list(Color::White, CastlingRights::none());
    for mv in list.iter() {
        let (after, _) = b.apply(*mv);
        assert!(!after.is_in_check(Color::White), "{mv} leaves the king in check");
    }
    assert!(list.contains(&crate::board::Move::new(sq("d2"), sq("e3"))));
}

#[test]
fn test_promotion_moves_default_to_queen() {
    let b = board("7k/P7/8/8/8/8/8/K7");
    let list = b.legal_move_list(Color::White, CastlingRights::none());
    let promo = list.find(sq("a7"), sq("a8")).unwrap();
    assert_eq!(promo.promotion, Some(Piece::Queen));

    let (after, outcome) = b.apply_move(sq("a7"), sq("a8"));
    assert!(outcome.is_promotion);
    assert_eq!(after.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
}

#[test]
fn test_underpromotion_choice_is_honoured() {
    let b = board("7k/P7/8/8/8/8/8/K7");
    let (after, _) = b.apply_move_with_promotion(sq("a7"), sq("a8"), Some(Piece::Knight));
    assert_eq!(after.piece_at(sq("a8")), Some((Color::White, Piece::Knight)));
    let (after, _) = b.apply_move_with_promotion(sq("a7"), sq("a8"), Some(Piece::King));
    assert_eq!(after.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
}

#[test]
fn test_apply_move_reports_capture() {
    let b = board("4k3/8/8/3p4/4P3/8/8/4K3");
    let (after, outcome) = b.apply_move(sq("e4"), sq("d5"));
    assert!(outcome.is_capture);
    assert_eq!(outcome.captured, Some(Piece::Pawn));
    assert!(!outcome.is_castle);
    assert_eq!(after.piece_at(sq("d5")), Some((Color::White, Piece::Pawn)));
    assert!(after.is_empty(sq("e4")));
    // The original is untouched.
    assert_eq!(b.piece_at(sq("e4")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_off_board_squares_yield_nothing() {
    let b = Board::new();
    // Column 9 on row 6 would alias the b1 knight through the flat index.
    assert!(b.legal_moves(Square(6, 9), CastlingRights::all()).is_empty());
    assert!(b.legal_moves(Square(8, 0), CastlingRights::all()).is_empty());
    assert!(b.pseudo_legal_moves(Square(6, 9)).is_empty());

    let (after, outcome) = b.apply_move(Square(6, 9), sq("a3"));
    assert_eq!(after, b);
    assert_eq!(outcome, MoveOutcome::default());
    let (after, _) = b.apply_move(sq("e2"), Square(3, 8));
    assert_eq!(after, b);
}
