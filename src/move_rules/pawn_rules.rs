//! Pawn movement and attack shape rules.
//!
//! Pawns are the one piece whose move squares and attack squares differ: a
//! pawn moves straight ahead only onto empty squares, but threatens its two
//! forward diagonals whether or not anything stands there. Attack detection
//! therefore uses [`pawn_attacks_square`] rather than the move validator.

use crate::game_state::chess_types::{piece_on, Board, Color, Piece, PieceKind, Position};

/// Shape validation for a pawn move, en passant included.
///
/// `en_passant_target` is the skipped square of the immediately preceding
/// double push, if any; a diagonal step onto it captures the pawn sitting
/// beside `from` on the same rank.
pub fn pawn_move_is_valid(
    board: &Board,
    en_passant_target: Option<Position>,
    pawn: Piece,
    from: Position,
    to: Position,
) -> bool {
    let direction = pawn.color.pawn_direction();

    // Straight advances must land on empty squares.
    if to.file == from.file {
        if piece_on(board, to).is_some() {
            return false;
        }
        if to.rank == from.rank + direction {
            return true;
        }
        if from.rank == pawn.color.pawn_home_rank() && to.rank == from.rank + 2 * direction {
            return from
                .offset(0, direction)
                .is_some_and(|skipped| piece_on(board, skipped).is_none());
        }
        return false;
    }

    // Diagonal one-step forward: plain capture or en passant.
    if (to.file - from.file).abs() == 1 && to.rank == from.rank + direction {
        if let Some(target) = piece_on(board, to) {
            return target.color != pawn.color;
        }
        if en_passant_target == Some(to) {
            // The victim sits beside the mover, on the mover's rank.
            let victim_square = Position::new(to.file, from.rank);
            return matches!(
                piece_on(board, victim_square),
                Some(victim) if victim.kind == PieceKind::Pawn && victim.color != pawn.color
            );
        }
    }

    false
}

/// True when a pawn of `color` on `from` threatens `to`.
///
/// Attack potential, not move legality: the forward diagonals count
/// regardless of occupancy.
#[inline]
pub fn pawn_attacks_square(color: Color, from: Position, to: Position) -> bool {
    (to.file - from.file).abs() == 1 && to.rank == from.rank + color.pawn_direction()
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks_square, pawn_move_is_valid};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
    use crate::game_state::game_state::GameState;

    fn white_pawn() -> Piece {
        Piece::new(PieceKind::Pawn, Color::White)
    }

    #[test]
    fn single_and_double_advances_from_home_rank() {
        let game = GameState::new_game();
        let from = Position::new(4, 6); // e2
        assert!(pawn_move_is_valid(
            &game.board,
            None,
            white_pawn(),
            from,
            Position::new(4, 5)
        ));
        assert!(pawn_move_is_valid(
            &game.board,
            None,
            white_pawn(),
            from,
            Position::new(4, 4)
        ));
        // Triple advance and sideways steps are out.
        assert!(!pawn_move_is_valid(
            &game.board,
            None,
            white_pawn(),
            from,
            Position::new(4, 3)
        ));
        assert!(!pawn_move_is_valid(
            &game.board,
            None,
            white_pawn(),
            from,
            Position::new(5, 6)
        ));
    }

    #[test]
    fn diagonal_requires_an_enemy_piece() {
        let game = GameState::new_game();
        // e2 to d3: empty diagonal, no en passant window.
        assert!(!pawn_move_is_valid(
            &game.board,
            None,
            white_pawn(),
            Position::new(4, 6),
            Position::new(3, 5)
        ));
    }

    #[test]
    fn double_advance_blocked_by_intervening_piece() {
        let game = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1")
            .expect("blocked-pawn FEN should parse");
        // e2 pawn with a knight on e3: neither advance works.
        assert!(!pawn_move_is_valid(
            &game.board,
            None,
            white_pawn(),
            Position::new(4, 6),
            Position::new(4, 5)
        ));
        assert!(!pawn_move_is_valid(
            &game.board,
            None,
            white_pawn(),
            Position::new(4, 6),
            Position::new(4, 4)
        ));
    }

    #[test]
    fn attack_squares_ignore_occupancy() {
        let from = Position::new(4, 4); // e4
        assert!(pawn_attacks_square(Color::White, from, Position::new(3, 3)));
        assert!(pawn_attacks_square(Color::White, from, Position::new(5, 3)));
        assert!(!pawn_attacks_square(Color::White, from, Position::new(4, 3)));
        // Black pawns threaten toward higher rank indices.
        assert!(pawn_attacks_square(Color::Black, from, Position::new(3, 5)));
    }
}
