//! Bishop movement shape rule.

use crate::game_state::chess_types::{Board, Position};
use crate::move_rules::shared::path_is_clear;

/// Equal absolute file/rank delta, with nothing strictly between.
pub fn bishop_move_is_valid(board: &Board, from: Position, to: Position) -> bool {
    if (to.file - from.file).abs() != (to.rank - from.rank).abs() {
        return false;
    }
    path_is_clear(board, from, to)
}
