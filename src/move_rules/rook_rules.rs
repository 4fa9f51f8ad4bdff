//! Rook movement shape rule.

use crate::game_state::chess_types::{Board, Position};
use crate::move_rules::shared::path_is_clear;

/// Same rank or same file, with nothing strictly between the endpoints.
pub fn rook_move_is_valid(board: &Board, from: Position, to: Position) -> bool {
    if from.file != to.file && from.rank != to.rank {
        return false;
    }
    path_is_clear(board, from, to)
}
