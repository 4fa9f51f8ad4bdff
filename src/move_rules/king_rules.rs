//! King movement shape rules, castling included.

use crate::game_state::chess_types::{piece_on, Board, Piece, PieceKind, Position};
use crate::move_rules::attack_checks::is_square_attacked;
use crate::move_rules::shared::path_is_clear;

/// One-step move in any direction (diagonals included).
#[inline]
pub fn king_step_is_valid(from: Position, to: Position) -> bool {
    if from == to {
        return false;
    }
    (to.file - from.file).abs() <= 1 && (to.rank - from.rank).abs() <= 1
}

/// Full king shape rule: a single step, or a castling move.
pub fn king_move_is_valid(board: &Board, king: Piece, from: Position, to: Position) -> bool {
    king_step_is_valid(from, to) || castling_move_is_valid(board, king, from, to)
}

/// Castling validation.
///
/// Every clause must hold: unmoved king, a two-file slide along its rank
/// toward an unmoved rook of the same color, all squares strictly between
/// king and rook empty, and none of the king's origin, transit, or
/// destination squares attacked by the opponent. The self-check filter in
/// the legality checker re-covers the destination square; the transit and
/// origin checks live here because only castling constrains them.
pub fn castling_move_is_valid(board: &Board, king: Piece, from: Position, to: Position) -> bool {
    if king.has_moved || to.rank != from.rank || (to.file - from.file).abs() != 2 {
        return false;
    }

    let direction = (to.file - from.file).signum();
    let rook_square = Position::new(if direction > 0 { 7 } else { 0 }, from.rank);
    let rook_ok = matches!(
        piece_on(board, rook_square),
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
    );
    if !rook_ok {
        return false;
    }

    if !path_is_clear(board, from, rook_square) {
        return false;
    }

    let enemy = king.color.opposite();
    let transit = Position::new(from.file + direction, from.rank);
    for square in [from, transit, to] {
        if is_square_attacked(board, square, enemy) {
            return false;
        }
    }

    true
}
