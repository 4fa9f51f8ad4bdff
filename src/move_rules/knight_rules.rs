//! Knight movement shape rule.

use crate::game_state::chess_types::Position;

/// L-shaped jump: one-by-two or two-by-one, obstruction never matters.
#[inline]
pub fn knight_move_is_valid(from: Position, to: Position) -> bool {
    let d_file = (to.file - from.file).abs();
    let d_rank = (to.rank - from.rank).abs();
    (d_file == 1 && d_rank == 2) || (d_file == 2 && d_rank == 1)
}

#[cfg(test)]
mod tests {
    use super::knight_move_is_valid;
    use crate::game_state::chess_types::Position;

    #[test]
    fn jumps_in_l_shapes() {
        let from = Position::new(6, 7); // g1
        assert!(knight_move_is_valid(from, Position::new(5, 5))); // f3
        assert!(knight_move_is_valid(from, Position::new(7, 5))); // h3
        assert!(knight_move_is_valid(from, Position::new(4, 6))); // e2
        assert!(!knight_move_is_valid(from, Position::new(6, 5))); // g3
        assert!(!knight_move_is_valid(from, Position::new(4, 5))); // e3
    }
}
