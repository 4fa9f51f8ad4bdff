//! Helpers shared by the per-piece movement validators.

use crate::game_state::chess_types::{piece_on, Board, Position};

/// True when every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must lie on a common rank, file, or diagonal; the
/// endpoints themselves are not inspected.
pub fn path_is_clear(board: &Board, from: Position, to: Position) -> bool {
    let d_file = (to.file - from.file).signum();
    let d_rank = (to.rank - from.rank).signum();

    let mut cursor = Position::new(from.file + d_file, from.rank + d_rank);
    while cursor != to {
        if piece_on(board, cursor).is_some() {
            return false;
        }
        cursor = Position::new(cursor.file + d_file, cursor.rank + d_rank);
    }
    true
}
