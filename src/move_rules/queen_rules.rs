//! Queen movement shape rule: the union of rook and bishop reach.

use crate::game_state::chess_types::{Board, Position};
use crate::move_rules::bishop_rules::bishop_move_is_valid;
use crate::move_rules::rook_rules::rook_move_is_valid;

pub fn queen_move_is_valid(board: &Board, from: Position, to: Position) -> bool {
    rook_move_is_valid(board, from, to) || bishop_move_is_valid(board, from, to)
}
