//! Attack and check detection.
//!
//! A square is attacked when any piece of the attacking color could reach it
//! under its movement shape rule. Pawns are special-cased: their attack
//! squares are the two forward diagonals regardless of occupancy, which
//! differs from their own forward-move rule.

use crate::game_state::chess_types::{piece_on, Board, Color, Piece, PieceKind, Position};
use crate::move_rules::bishop_rules::bishop_move_is_valid;
use crate::move_rules::king_rules::king_step_is_valid;
use crate::move_rules::knight_rules::knight_move_is_valid;
use crate::move_rules::pawn_rules::pawn_attacks_square;
use crate::move_rules::queen_rules::queen_move_is_valid;
use crate::move_rules::rook_rules::rook_move_is_valid;

/// True when any piece of `attacker_color` threatens `target`.
pub fn is_square_attacked(board: &Board, target: Position, attacker_color: Color) -> bool {
    for rank in 0..8 {
        for file in 0..8 {
            let from = Position::new(file, rank);
            let Some(piece) = piece_on(board, from) else {
                continue;
            };
            if piece.color == attacker_color && piece_attacks_square(board, piece, from, target) {
                return true;
            }
        }
    }
    false
}

/// Locate the king of `color`. `None` only on malformed boards; during play
/// exactly one king per color is always present.
pub fn find_king(board: &Board, color: Color) -> Option<Position> {
    for rank in 0..8 {
        for file in 0..8 {
            let position = Position::new(file, rank);
            if matches!(
                piece_on(board, position),
                Some(piece) if piece.kind == PieceKind::King && piece.color == color
            ) {
                return Some(position);
            }
        }
    }
    None
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match find_king(board, color) {
        Some(king_square) => is_square_attacked(board, king_square, color.opposite()),
        None => false,
    }
}

fn piece_attacks_square(board: &Board, piece: Piece, from: Position, to: Position) -> bool {
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_attacks_square(piece.color, from, to),
        PieceKind::Knight => knight_move_is_valid(from, to),
        PieceKind::Bishop => bishop_move_is_valid(board, from, to),
        PieceKind::Rook => rook_move_is_valid(board, from, to),
        PieceKind::Queen => queen_move_is_valid(board, from, to),
        PieceKind::King => king_step_is_valid(from, to),
    }
}
