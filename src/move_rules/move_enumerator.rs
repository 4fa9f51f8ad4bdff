//! Legal destination enumeration.
//!
//! Serves two callers: the presentation layer (highlighting the selected
//! piece's options) and the executor's checkmate/stalemate detection.

use crate::game_state::chess_types::{piece_on, Position};
use crate::game_state::game_state::GameState;
use crate::move_rules::legality::is_legal_move;

/// All squares the piece on `position` may legally move to, in rank-major
/// scan order. Empty when the square is empty or holds a piece that does
/// not belong to the side to move.
pub fn legal_destinations(state: &GameState, position: Position) -> Vec<Position> {
    let Some(piece) = piece_on(&state.board, position) else {
        return Vec::new();
    };
    if piece.color != state.current_player {
        return Vec::new();
    }

    let mut destinations = Vec::new();
    for rank in 0..8 {
        for file in 0..8 {
            let candidate = Position::new(file, rank);
            if is_legal_move(state, position, candidate) {
                destinations.push(candidate);
            }
        }
    }
    destinations
}

/// Whether the side to move has any legal move at all; the backing query
/// for checkmate and stalemate detection. Early-exits on the first hit.
pub fn has_any_legal_move(state: &GameState) -> bool {
    for rank in 0..8 {
        for file in 0..8 {
            let from = Position::new(file, rank);
            let Some(piece) = piece_on(&state.board, from) else {
                continue;
            };
            if piece.color != state.current_player {
                continue;
            }
            for to_rank in 0..8 {
                for to_file in 0..8 {
                    if is_legal_move(state, from, Position::new(to_file, to_rank)) {
                        return true;
                    }
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{has_any_legal_move, legal_destinations};
    use crate::game_state::chess_types::{Color, Position};
    use crate::game_state::game_state::GameState;
    use crate::move_rules::attack_checks::is_king_in_check;
    use crate::move_rules::legality::is_legal_move;
    use crate::move_rules::move_apply::apply_move;
    use chrono::DateTime;

    fn now() -> DateTime<chrono::Utc> {
        DateTime::from_timestamp(0, 0).expect("epoch should be a valid instant")
    }

    #[test]
    fn startpos_counts_for_pawns_knights_and_king() {
        let game = GameState::new_game();
        for file in 0..8 {
            // Every white home-rank pawn has exactly the single and double
            // advance.
            assert_eq!(legal_destinations(&game, Position::new(file, 6)).len(), 2);
        }
        assert_eq!(legal_destinations(&game, Position::new(1, 7)).len(), 2);
        assert_eq!(legal_destinations(&game, Position::new(6, 7)).len(), 2);
        // Fully blocked king, no castling available.
        assert!(legal_destinations(&game, Position::new(4, 7)).is_empty());
    }

    #[test]
    fn empty_for_foreign_or_empty_squares() {
        let game = GameState::new_game();
        assert!(legal_destinations(&game, Position::new(4, 4)).is_empty());
        // Black knight b8 while White is to move.
        assert!(legal_destinations(&game, Position::new(1, 0)).is_empty());
    }

    #[test]
    fn destinations_never_leave_own_king_in_check() {
        let game = GameState::from_fen("4k3/8/8/8/1b6/8/3N4/4K3 w - - 0 1")
            .expect("pin FEN should parse");
        // The pinned knight reports no destinations at all.
        assert!(legal_destinations(&game, Position::new(3, 6)).is_empty());

        // And in general: every reported destination survives the
        // self-check filter by definition of is_legal_move.
        for rank in 0..8 {
            for file in 0..8 {
                let from = Position::new(file, rank);
                for to in legal_destinations(&game, from) {
                    assert!(is_legal_move(&game, from, to));
                }
            }
        }
    }

    #[test]
    fn startpos_side_to_move_has_moves() {
        let game = GameState::new_game();
        assert!(has_any_legal_move(&game));
    }

    #[test]
    fn no_moves_remain_after_fools_mate() {
        // 1.f3 e5 2.g4 Qh4# leaves White without a single reply.
        let mut game = GameState::new_game();
        let line = [
            (Position::new(5, 6), Position::new(5, 5)),
            (Position::new(4, 1), Position::new(4, 3)),
            (Position::new(6, 6), Position::new(6, 4)),
            (Position::new(3, 0), Position::new(7, 4)),
        ];
        for (from, to) in line {
            game = apply_move(&game, from, to, now()).expect("scripted move should be legal");
        }
        assert!(is_king_in_check(&game.board, Color::White));
        assert!(!has_any_legal_move(&game));
        for rank in 0..8 {
            for file in 0..8 {
                assert!(legal_destinations(&game, Position::new(file, rank)).is_empty());
            }
        }
    }
}
