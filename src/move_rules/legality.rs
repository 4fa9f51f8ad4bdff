//! Full move legality checking.
//!
//! `is_legal_move` is the single entry point used by the executor, the
//! destination enumerator, and checkmate/stalemate detection: precondition
//! checks, per-piece shape dispatch, then a uniform self-check filter that
//! simulates the move on a scratch copy of the board and rejects anything
//! leaving the mover's own king attacked.

use crate::game_state::chess_types::{piece_on, set_square, Board, Piece, PieceKind, Position};
use crate::game_state::game_state::GameState;
use crate::move_rules::attack_checks::{find_king, is_square_attacked};
use crate::move_rules::bishop_rules::bishop_move_is_valid;
use crate::move_rules::king_rules::king_move_is_valid;
use crate::move_rules::knight_rules::knight_move_is_valid;
use crate::move_rules::pawn_rules::pawn_move_is_valid;
use crate::move_rules::queen_rules::queen_move_is_valid;
use crate::move_rules::rook_rules::rook_move_is_valid;

/// Decide whether moving the piece on `from` to `to` is legal for the side
/// to move. Answers `false` for every failure mode: out-of-bounds squares,
/// an empty origin, an opponent's piece, a same-color destination, a shape
/// violation, or a move that would leave the mover's own king in check.
pub fn is_legal_move(state: &GameState, from: Position, to: Position) -> bool {
    if !from.in_bounds() || !to.in_bounds() {
        return false;
    }

    let Some(piece) = piece_on(&state.board, from) else {
        return false;
    };
    if piece.color != state.current_player {
        return false;
    }
    if matches!(piece_on(&state.board, to), Some(target) if target.color == piece.color) {
        return false;
    }

    let shape_ok = match piece.kind {
        PieceKind::Pawn => {
            pawn_move_is_valid(&state.board, state.en_passant_target, piece, from, to)
        }
        PieceKind::Knight => knight_move_is_valid(from, to),
        PieceKind::Bishop => bishop_move_is_valid(&state.board, from, to),
        PieceKind::Rook => rook_move_is_valid(&state.board, from, to),
        PieceKind::Queen => queen_move_is_valid(&state.board, from, to),
        PieceKind::King => king_move_is_valid(&state.board, piece, from, to),
    };
    if !shape_ok {
        return false;
    }

    !would_leave_own_king_in_check(state, piece, from, to)
}

/// Simulate the move on a scratch board (en passant victim removal
/// included) and test whether the mover's king ends up attacked. Applies
/// uniformly to every piece, king moves and castling included.
fn would_leave_own_king_in_check(
    state: &GameState,
    piece: Piece,
    from: Position,
    to: Position,
) -> bool {
    let mut scratch: Board = state.board;

    if piece.kind == PieceKind::Pawn && state.en_passant_target == Some(to) && to.file != from.file
    {
        set_square(&mut scratch, Position::new(to.file, from.rank), None);
    }
    set_square(&mut scratch, to, Some(piece));
    set_square(&mut scratch, from, None);

    let king_square = if piece.kind == PieceKind::King {
        Some(to)
    } else {
        find_king(&scratch, piece.color)
    };
    match king_square {
        Some(square) => is_square_attacked(&scratch, square, piece.color.opposite()),
        None => false,
    }
}
