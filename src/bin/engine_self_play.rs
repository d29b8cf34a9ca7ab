//! Engine self-play demo.
//!
//! Usage:
//! `cargo run --release --bin engine_self_play`
//! `cargo run --release --bin engine_self_play -- --depth 2 --plies 40 --human black --random-plies 4 --seed 7`
//!
//! Set `RUST_LOG=debug` to see every root candidate.

use chrono::Local;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use chess_duel::chess_errors::ChessResult;
use chess_duel::game_state::chess_types::{Color, GameState};
use chess_duel::search::minimax::SearchConfig;
use chess_duel::utils::long_algebraic::{line_to_long_algebraic, move_to_long_algebraic};
use chess_duel::utils::render_game_state::render_game_state;

fn arg_value(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn parse_arg<T: std::str::FromStr>(flag: &str, default: T) -> T {
    arg_value(flag)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn main() -> ChessResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SearchConfig {
        depth: parse_arg("--depth", SearchConfig::default().depth),
        ..SearchConfig::default()
    };
    let max_plies: usize = parse_arg("--plies", 20);
    let random_plies: usize = parse_arg("--random-plies", 0);
    let seed: u64 = parse_arg("--seed", 0);
    let human = match arg_value("--human").as_deref() {
        Some("black") => Color::Black,
        _ => Color::White,
    };

    println!(
        "engine self-play {} | depth={} plies={} human={:?}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        config.depth,
        max_plies,
        human
    );

    let mut game = GameState::new_game(human);
    let orientation = game.orientation();
    let mut rng = StdRng::seed_from_u64(seed);

    for ply in 0..max_plies {
        if game.is_game_over() {
            break;
        }

        if ply < random_plies {
            let Some(mv) = game.legal_moves.choose(&mut rng).copied() else {
                break;
            };
            game.apply_move_with_promotion(mv.origin, mv.target, mv.promotion)?;
            println!("{:>3}. random {}", ply + 1, move_to_long_algebraic(&mv, orientation)?);
            continue;
        }

        let report = game.engine_move(&config)?;
        println!(
            "{:>3}. {} score={} nodes={} time={:?} pv={}{}",
            ply + 1,
            move_to_long_algebraic(&report.chosen_move, orientation)?,
            report.score,
            report.nodes_visited,
            report.elapsed,
            line_to_long_algebraic(&report.principal_variation, orientation)?,
            if report.pv_truncated { " (truncated)" } else { "" }
        );
    }

    println!("{}", render_game_state(&game));
    println!("final status: {:?}", game.check_status);
    Ok(())
}
