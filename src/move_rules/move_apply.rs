//! Move execution.
//!
//! `apply_move` realizes a legal move on a fresh copy of the state: clock
//! debit against an explicit instant, special-case handling for castling,
//! en passant, and promotion, history/captured-list bookkeeping, and the
//! derived check/checkmate/stalemate flags for the incoming player.

use chrono::{DateTime, Utc};

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{piece_on, set_square, PieceKind, Position};
use crate::game_state::clock::debit_elapsed;
use crate::game_state::game_state::GameState;
use crate::game_state::move_record::MoveRecord;
use crate::move_rules::attack_checks::is_king_in_check;
use crate::move_rules::legality::is_legal_move;
use crate::move_rules::move_enumerator::has_any_legal_move;

/// Apply the move `from -> to` at instant `now`, returning the successor
/// state. The input state is never touched.
///
/// Callers are expected to have confirmed the move with `is_legal_move`
/// (for example by only offering enumerated destinations); this executor
/// nevertheless re-validates defensively and fails with
/// [`ChessError::IllegalMove`] instead of producing a corrupt state when
/// invoked directly with garbage.
///
/// Promotion is always to a queen; no underpromotion choice is exposed.
pub fn apply_move(
    state: &GameState,
    from: Position,
    to: Position,
    now: DateTime<Utc>,
) -> Result<GameState, ChessError> {
    if !is_legal_move(state, from, to) {
        return Err(ChessError::IllegalMove { from, to });
    }

    let mut next = state.clone();
    let mover = next.current_player;

    debit_elapsed(&mut next, mover, now);
    next.last_move_timestamp = Some(now);

    // Pre-move snapshot; legality guaranteed the piece exists.
    let Some(piece) = piece_on(&next.board, from) else {
        return Err(ChessError::IllegalMove { from, to });
    };
    let mut record = MoveRecord::new(piece, from, to);

    if piece.kind == PieceKind::King && (to.file - from.file).abs() == 2 {
        relocate_castling_rook(&mut next, from, to);
        record.is_castling = true;
    }

    let is_en_passant =
        piece.kind == PieceKind::Pawn && next.en_passant_target == Some(to) && to.file != from.file;
    if is_en_passant {
        let victim_square = Position::new(to.file, from.rank);
        record.captured = piece_on(&next.board, victim_square);
        set_square(&mut next.board, victim_square, None);
        record.is_en_passant = true;
    } else {
        record.captured = piece_on(&next.board, to);
    }

    // The en passant window lasts exactly one ply.
    next.en_passant_target = if piece.kind == PieceKind::Pawn && (to.rank - from.rank).abs() == 2 {
        Some(Position::new(from.file, (from.rank + to.rank) / 2))
    } else {
        None
    };

    let mut placed = piece;
    placed.has_moved = true;
    if placed.kind == PieceKind::Pawn && to.rank == mover.promotion_rank() {
        placed.kind = PieceKind::Queen;
        record.promotion = Some(PieceKind::Queen);
    }
    set_square(&mut next.board, to, Some(placed));
    set_square(&mut next.board, from, None);

    if let Some(captured) = record.captured {
        next.captured_pieces[mover.index()].push(captured);
    }

    next.current_player = mover.opposite();

    next.is_check = is_king_in_check(&next.board, next.current_player);
    let has_reply = has_any_legal_move(&next);
    next.is_checkmate = next.is_check && !has_reply;
    next.is_stalemate = !next.is_check && !has_reply;
    next.is_draw = next.is_stalemate;

    record.is_check = next.is_check;
    record.is_checkmate = next.is_checkmate;
    record.is_stalemate = next.is_stalemate;
    next.move_history.push(record);

    Ok(next)
}

/// Hop the rook over the castling king: onto the square adjacent to the
/// king's destination, on the inside.
fn relocate_castling_rook(state: &mut GameState, king_from: Position, king_to: Position) {
    let direction = (king_to.file - king_from.file).signum();
    let rook_from = Position::new(if direction > 0 { 7 } else { 0 }, king_from.rank);
    let rook_to = Position::new(king_to.file - direction, king_from.rank);

    if let Some(mut rook) = piece_on(&state.board, rook_from) {
        rook.has_moved = true;
        set_square(&mut state.board, rook_to, Some(rook));
        set_square(&mut state.board, rook_from, None);
    }
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::{Color, PieceKind, Position};
    use crate::game_state::game_state::GameState;
    use chrono::DateTime;

    fn now() -> DateTime<chrono::Utc> {
        DateTime::from_timestamp(0, 0).expect("epoch should be a valid instant")
    }

    fn play(game: &GameState, from: (i8, i8), to: (i8, i8)) -> GameState {
        apply_move(
            game,
            Position::new(from.0, from.1),
            Position::new(to.0, to.1),
            now(),
        )
        .expect("scripted move should be legal")
    }

    #[test]
    fn rejects_illegal_moves_defensively() {
        let game = GameState::new_game();
        let from = Position::new(4, 6);
        let to = Position::new(4, 2);
        assert_eq!(
            apply_move(&game, from, to, now()).unwrap_err(),
            ChessError::IllegalMove { from, to }
        );
        // Input untouched by the failed call.
        assert!(game.piece_at(from).is_some());
    }

    #[test]
    fn simple_advance_flips_player_and_appends_history() {
        let game = GameState::new_game();
        let next = play(&game, (4, 6), (4, 4)); // e2e4

        assert_eq!(next.current_player, Color::Black);
        assert_eq!(next.move_history.len(), 1);
        let record = next.move_history[0];
        assert_eq!(record.from, Position::new(4, 6));
        assert_eq!(record.to, Position::new(4, 4));
        assert!(record.captured.is_none());
        assert!(!record.piece.has_moved);
        assert!(next
            .piece_at(Position::new(4, 4))
            .is_some_and(|piece| piece.has_moved));
        // Double push opens the en passant window on e3.
        assert_eq!(next.en_passant_target, Some(Position::new(4, 5)));

        // And the original state is untouched.
        assert_eq!(game.current_player, Color::White);
        assert!(game.move_history.is_empty());
        assert!(game.piece_at(Position::new(4, 6)).is_some());
    }

    #[test]
    fn capture_lands_in_capturers_list() {
        let mut game = GameState::new_game();
        // 1.e4 d5 2.exd5
        game = play(&game, (4, 6), (4, 4));
        game = play(&game, (3, 1), (3, 3));
        game = play(&game, (4, 4), (3, 3));

        assert_eq!(game.captured_pieces[Color::White.index()].len(), 1);
        let taken = game.captured_pieces[Color::White.index()][0];
        assert_eq!(taken.kind, PieceKind::Pawn);
        assert_eq!(taken.color, Color::Black);
        assert!(game.captured_pieces[Color::Black.index()].is_empty());
    }

    #[test]
    fn en_passant_window_lasts_one_ply() {
        // 1.e4 a6 2.e5 d5 puts the e5 pawn beside the freshly pushed d5
        // pawn: 3.exd6 is available for exactly this ply.
        let mut game = GameState::new_game();
        game = play(&game, (4, 6), (4, 4)); // e4
        game = play(&game, (0, 1), (0, 2)); // a6
        game = play(&game, (4, 4), (4, 3)); // e5
        game = play(&game, (3, 1), (3, 3)); // d5
        assert_eq!(game.en_passant_target, Some(Position::new(3, 2)));

        let captured_now = play(&game, (4, 3), (3, 2)); // exd6
        assert!(captured_now.piece_at(Position::new(3, 3)).is_none());
        let record = captured_now.move_history.last().expect("history entry");
        assert!(record.is_en_passant);
        assert_eq!(
            record.captured.map(|piece| piece.kind),
            Some(PieceKind::Pawn)
        );
        assert_eq!(
            captured_now.captured_pieces[Color::White.index()].len(),
            1
        );

        // Playing anything else closes the window for good.
        let mut deferred = play(&game, (7, 6), (7, 5)); // h3
        deferred = play(&deferred, (7, 1), (7, 2)); // h6
        assert!(deferred.en_passant_target.is_none());
        assert_eq!(
            apply_move(&deferred, Position::new(4, 3), Position::new(3, 2), now()).unwrap_err(),
            ChessError::IllegalMove {
                from: Position::new(4, 3),
                to: Position::new(3, 2),
            }
        );
    }

    #[test]
    fn kingside_castling_relocates_the_rook() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("castling FEN should parse");
        let castled = play(&game, (4, 7), (6, 7)); // e1g1

        let king = castled
            .piece_at(Position::new(6, 7))
            .expect("king should land on g1");
        assert_eq!(king.kind, PieceKind::King);
        assert!(king.has_moved);

        let rook = castled
            .piece_at(Position::new(5, 7))
            .expect("rook should land on f1");
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);
        assert!(castled.piece_at(Position::new(7, 7)).is_none());
        assert!(castled.piece_at(Position::new(4, 7)).is_none());
        assert!(castled
            .move_history
            .last()
            .is_some_and(|record| record.is_castling));
    }

    #[test]
    fn pawn_promotes_to_queen_on_the_last_rank() {
        let game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1")
            .expect("promotion FEN should parse");
        let promoted = play(&game, (0, 1), (0, 0)); // a7a8

        let queen = promoted
            .piece_at(Position::new(0, 0))
            .expect("promoted piece should stand on a8");
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.color, Color::White);
        assert_eq!(
            promoted.move_history.last().and_then(|record| record.promotion),
            Some(PieceKind::Queen)
        );
    }

    #[test]
    fn fools_mate_sets_checkmate() {
        let mut game = GameState::new_game();
        game = play(&game, (5, 6), (5, 5)); // f3
        game = play(&game, (4, 1), (4, 3)); // e5
        game = play(&game, (6, 6), (6, 4)); // g4
        game = play(&game, (3, 0), (7, 4)); // Qh4#

        assert!(game.is_check);
        assert!(game.is_checkmate);
        assert!(!game.is_stalemate);
        assert!(!game.is_draw);
        assert_eq!(game.current_player, Color::White);
        let record = game.move_history.last().expect("mating move record");
        assert!(record.is_check);
        assert!(record.is_checkmate);
    }

    #[test]
    fn stalemate_sets_draw_but_not_checkmate() {
        // Qe6-f7 boxes the h8 king in without checking it.
        let game = GameState::from_fen("7k/8/4Q1K1/8/8/8/8/8 w - - 0 1")
            .expect("stalemate-seed FEN should parse");
        let drawn = play(&game, (4, 2), (5, 1));

        assert!(drawn.is_stalemate);
        assert!(drawn.is_draw);
        assert!(!drawn.is_check);
        assert!(!drawn.is_checkmate);
        assert!(drawn
            .move_history
            .last()
            .is_some_and(|record| record.is_stalemate));
    }

    #[test]
    fn exactly_one_king_per_color_survives_play() {
        let mut game = GameState::new_game();
        let line = [
            ((4, 6), (4, 4)),
            ((4, 1), (4, 3)),
            ((6, 7), (5, 5)),
            ((1, 0), (2, 2)),
            ((5, 7), (2, 4)),
            ((6, 0), (5, 2)),
        ];
        for (from, to) in line {
            game = play(&game, from, to);
            assert_eq!(game.count_pieces(PieceKind::King, Color::White), 1);
            assert_eq!(game.count_pieces(PieceKind::King, Color::Black), 1);
        }
    }
}
