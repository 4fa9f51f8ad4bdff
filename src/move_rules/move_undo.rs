//! Move takeback.
//!
//! `undo_move` pops the most recent history record and rebuilds the prior
//! position from it: the pre-move piece snapshot restores kind (undoing
//! promotion) and the `has_moved` flag in one step, captured pieces return
//! to their squares (the en passant victim to the square beside the mover,
//! not the move destination), and a castling rook hops back home. Derived
//! flags are recomputed from the restored position rather than cleared
//! blindly: `is_check` is re-derived, while mate/stalemate/draw are exactly
//! false because a legal move was just taken back from that position.

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::{piece_on, set_square, PieceKind, Position};
use crate::game_state::clock::credit_elapsed;
use crate::game_state::game_state::GameState;
use crate::move_rules::attack_checks::is_king_in_check;

/// Reverse the most recently executed move at instant `now`. Takeback on an
/// empty history is a no-op returning the input unchanged, not an error.
pub fn undo_move(state: &GameState, now: DateTime<Utc>) -> GameState {
    let mut prev = state.clone();
    let Some(record) = prev.move_history.pop() else {
        return prev;
    };
    let mover = record.piece.color;

    // The snapshot restores the pre-move kind and has_moved flag.
    set_square(&mut prev.board, record.from, Some(record.piece));
    set_square(&mut prev.board, record.to, None);

    if record.is_en_passant {
        let victim_square = Position::new(record.to.file, record.from.rank);
        set_square(&mut prev.board, victim_square, record.captured);
    } else if record.captured.is_some() {
        set_square(&mut prev.board, record.to, record.captured);
    }
    if record.captured.is_some() {
        prev.captured_pieces[mover.index()].pop();
    }

    if record.is_castling {
        let direction = (record.to.file - record.from.file).signum();
        let rook_home = Position::new(if direction > 0 { 7 } else { 0 }, record.from.rank);
        let rook_square = Position::new(record.to.file - direction, record.from.rank);
        if let Some(mut rook) = piece_on(&prev.board, rook_square) {
            if rook.kind == PieceKind::Rook {
                rook.has_moved = false;
                set_square(&mut prev.board, rook_home, Some(rook));
                set_square(&mut prev.board, rook_square, None);
            }
        }
    }

    prev.current_player = mover;

    // The preceding move dictates the restored en passant window.
    prev.en_passant_target = prev
        .move_history
        .last()
        .and_then(|earlier| earlier.double_push_skipped_square());

    prev.is_check = is_king_in_check(&prev.board, mover);
    prev.is_checkmate = false;
    prev.is_stalemate = false;
    prev.is_draw = false;
    prev.timeout_loser = None;

    credit_elapsed(&mut prev, mover, now);
    prev.last_move_timestamp = Some(now);

    prev
}
