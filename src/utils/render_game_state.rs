//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the mailbox grid for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::chess_types::{piece_on, Color, Piece, PieceKind, Position};
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output.
///
/// The eighth rank prints first (rank index 0), matching how the engine
/// stores the grid and how a board faces the white player.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in 0..8 {
        let rank_char = char::from(b'8' - rank as u8);
        out.push(rank_char);
        out.push(' ');

        for file in 0..8 {
            match piece_on(&game_state.board, Position::new(file, rank)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
