use std::env;
use std::process;

use mailbox_chess::{Game, GameStatus};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: game_status <move1> <move2> ...   (moves like e2-e4 or e7e8q)");
        return;
    }

    let mut game = Game::new();
    for mv in args.iter().skip(1) {
        if let Err(e) = game.play_notation(mv) {
            eprintln!("{mv}: {e}");
            process::exit(1);
        }
    }

    let board = game.board();
    let side = game.to_move();
    let moves = board.legal_move_list(side, game.castling_rights());
    println!("{board}");
    println!("fen: {}", game.position().to_fen());
    println!("side_to_move: {side}");
    println!("legal_moves: {}", moves.len());
    println!("check: {}", board.is_in_check(side));
    println!(
        "checkmate: {}",
        matches!(game.status(), GameStatus::Checkmate { .. })
    );
    println!("stalemate: {}", game.status() == GameStatus::Stalemate);
    for mv in moves.iter() {
        println!("{mv}");
    }
}
