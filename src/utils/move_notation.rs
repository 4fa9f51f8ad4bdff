//! Compact text rendering of move records for a textual move log.
//!
//! Mirrors the usual short notation: piece letter, capture cross,
//! destination square, promotion suffix, and check/checkmate marks, with
//! `O-O`/`O-O-O` for castling. Pawn captures carry the origin file letter.
//! Formatting works purely off the recorded move; it does not consult the
//! board, so it never disambiguates two like pieces reaching one square.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::move_record::MoveRecord;

pub fn format_move(record: &MoveRecord) -> String {
    let mut text = if record.is_castling {
        if record.to.file > record.from.file {
            "O-O".to_owned()
        } else {
            "O-O-O".to_owned()
        }
    } else {
        let mut body = String::new();
        body.push_str(piece_letter(record.piece.kind));
        if record.captured.is_some() {
            if record.piece.kind == PieceKind::Pawn {
                body.push(char::from(b'a' + record.from.file as u8));
            }
            body.push('x');
        }
        body.push_str(&record.to.to_string());
        if let Some(promotion) = record.promotion {
            body.push('=');
            body.push_str(piece_letter(promotion));
        }
        body
    };

    if record.is_checkmate {
        text.push('#');
    } else if record.is_check {
        text.push('+');
    }
    text
}

// Ordered to match `PieceKind::index`.
const PIECE_LETTERS: [&str; 6] = ["", "N", "B", "R", "Q", "K"];

fn piece_letter(kind: PieceKind) -> &'static str {
    PIECE_LETTERS[kind.index()]
}
