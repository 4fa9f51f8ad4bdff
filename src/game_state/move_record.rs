use crate::game_state::chess_types::{Piece, PieceKind, Position};

/// Single entry of the move history.
///
/// `piece` is a snapshot of the mover taken before the move executed, so a
/// takeback can restore the pre-move kind (promotion revert) and `has_moved`
/// flag without recomputation. Records are immutable once appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
    pub captured: Option<Piece>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub promotion: Option<PieceKind>,
}

impl MoveRecord {
    /// Fresh record for a mover snapshot; flags are filled in by the
    /// executor once the resulting position is known.
    pub fn new(piece: Piece, from: Position, to: Position) -> Self {
        Self {
            piece,
            from,
            to,
            captured: None,
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
            is_castling: false,
            is_en_passant: false,
            promotion: None,
        }
    }

    /// Square a double pawn push skipped, if this record is one.
    ///
    /// Used to rebuild `en_passant_target` when a takeback re-exposes the
    /// preceding move.
    pub fn double_push_skipped_square(&self) -> Option<Position> {
        if self.piece.kind == PieceKind::Pawn && (self.to.rank - self.from.rank).abs() == 2 {
            Some(Position::new(self.from.file, (self.from.rank + self.to.rank) / 2))
        } else {
            None
        }
    }
}
