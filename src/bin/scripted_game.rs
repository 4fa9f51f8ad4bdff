//! Scripted replay diagnostic.
//!
//! Replays a few canned lines through the public engine API and prints the
//! rendered board plus the move log after each one:
//! - Fool's Mate (fastest possible checkmate),
//! - an en passant capture line,
//! - a kingside castling line.
//!
//! Usage:
//! `cargo run --bin scripted_game`

use chrono::Utc;

use tandem_chess::game_state::game_state::GameState;
use tandem_chess::move_rules::move_apply::apply_move;
use tandem_chess::utils::algebraic::algebraic_to_position;
use tandem_chess::utils::move_notation::format_move;
use tandem_chess::utils::render_game_state::render_game_state;

fn main() {
    replay(
        "Fool's Mate",
        GameState::new_game(),
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );

    replay(
        "En passant",
        GameState::new_game(),
        &[
            ("e2", "e4"),
            ("a7", "a6"),
            ("e4", "e5"),
            ("d7", "d5"),
            ("e5", "d6"),
        ],
    );

    let castling_seed = GameState::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1")
        .expect("castling seed FEN should parse");
    replay("Kingside castling", castling_seed, &[("e1", "g1")]);
}

fn replay(title: &str, mut game: GameState, line: &[(&str, &str)]) {
    println!("=== {title} ===");

    for (from_text, to_text) in line {
        let from = algebraic_to_position(from_text)
            .unwrap_or_else(|err| panic!("bad scripted square {from_text}: {err}"));
        let to = algebraic_to_position(to_text)
            .unwrap_or_else(|err| panic!("bad scripted square {to_text}: {err}"));
        game = match apply_move(&game, from, to, Utc::now()) {
            Ok(next) => next,
            Err(err) => panic!("scripted line broke: {err}"),
        };
    }

    println!("{}", render_game_state(&game));

    let log: Vec<String> = game.move_history.iter().map(format_move).collect();
    println!("moves: {}", log.join(" "));
    if game.is_checkmate {
        println!("result: checkmate, {:?} to move has no reply", game.current_player);
    } else if game.is_stalemate {
        println!("result: stalemate");
    } else if game.is_check {
        println!("result: {:?} is in check", game.current_player);
    }
    println!();
}
