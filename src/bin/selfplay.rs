//! Play engine against engine at two difficulty levels and report the tally.
//!
//! usage: selfplay [--white LEVEL] [--black LEVEL] [--games N] [--max-plies N] [--seed N]
//!
//! The two levels swap colors every game so neither gets the first move
//! advantage throughout.

use std::env;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use mailbox_chess::{Color, Difficulty, Game, GameStatus};

struct Args {
    first: Difficulty,
    second: Difficulty,
    games: u32,
    max_plies: u32,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        first: Difficulty::Hard,
        second: Difficulty::Easy,
        games: 10,
        max_plies: 200,
        seed: None,
    };
    let mut it = env::args().skip(1);
    while let Some(flag) = it.next() {
        let value = it
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        match flag.as_str() {
            "--white" => args.first = value.parse().map_err(|e| format!("{e}"))?,
            "--black" => args.second = value.parse().map_err(|e| format!("{e}"))?,
            "--games" => args.games = value.parse().map_err(|_| "bad --games".to_string())?,
            "--max-plies" => {
                args.max_plies = value.parse().map_err(|_| "bad --max-plies".to_string())?;
            }
            "--seed" => args.seed = Some(value.parse().map_err(|_| "bad --seed".to_string())?),
            other => return Err(format!("unknown flag {other}")),
        }
    }
    Ok(args)
}

#[derive(Default)]
struct Tally {
    wins: u32,
    losses: u32,
    draws: u32,
    moves: u64,
    nodes: u64,
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "usage: selfplay [--white LEVEL] [--black LEVEL] [--games N] [--max-plies N] [--seed N]"
            );
            process::exit(2);
        }
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Results are kept from the point of view of `args.first`.
    let mut first = Tally::default();
    let mut second = Tally::default();

    for game_no in 0..args.games {
        let first_color = if game_no % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        let mut game = Game::new();
        let mut plies = 0;
        while !game.status().is_over() && plies < args.max_plies {
            let (level, tally) = if game.to_move() == first_color {
                (args.first, &mut first)
            } else {
                (args.second, &mut second)
            };
            match game.play_ai_with(&level.params(), &mut rng) {
                Ok(result) => {
                    tally.moves += 1;
                    tally.nodes += result.stats.nodes;
                }
                Err(e) => {
                    eprintln!("game {game_no}: {e}");
                    break;
                }
            }
            plies += 1;
        }

        let outcome = match game.status() {
            GameStatus::Checkmate { winner } if winner == first_color => {
                first.wins += 1;
                second.losses += 1;
                "first"
            }
            GameStatus::Checkmate { .. } => {
                first.losses += 1;
                second.wins += 1;
                "second"
            }
            GameStatus::Stalemate | GameStatus::Ongoing => {
                first.draws += 1;
                second.draws += 1;
                "draw"
            }
        };
        println!(
            "game {:>3}: {} ({}) vs {} ({}) -> {} after {} plies",
            game_no + 1,
            args.first,
            first_color,
            args.second,
            first_color.opponent(),
            outcome,
            game.history().len()
        );
    }

    for (level, tally) in [(args.first, &first), (args.second, &second)] {
        let mean_nodes = if tally.moves == 0 {
            0
        } else {
            tally.nodes / tally.moves
        };
        println!(
            "{:<6} +{} -{} ={}  mean nodes/move {}",
            level, tally.wins, tally.losses, tally.draws, mean_nodes
        );
    }
}
