//! FEN conversions for the mailbox board.
//!
//! Builds a fully-populated game state from a Forsyth-Edwards Notation
//! string and renders one back out. The castling-rights field maps onto the
//! per-piece `has_moved` flags (an unmoved king/rook pair on its home
//! squares is what a right means here), and the en passant field maps onto
//! `en_passant_target`. Derived check/mate/stalemate flags are recomputed
//! for the parsed side to move, so FEN-seeded positions behave exactly like
//! played-out ones. Clocks come up at the default time control; FEN is a
//! position notation here, not a persistence layer.

use crate::game_state::chess_types::{
    piece_on, set_square, Color, Piece, PieceKind, Position,
};
use crate::game_state::game_state::GameState;
use crate::move_rules::attack_checks::is_king_in_check;
use crate::move_rules::move_enumerator::has_any_legal_move;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    // The move counters are validated but not carried: the engine tracks
    // history explicitly and has no fifty-move rule.
    halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.current_player = parse_side_to_move(side_part)?;
    apply_castling_rights(castling_part, &mut game_state)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;

    game_state.is_check = is_king_in_check(&game_state.board, game_state.current_player);
    let has_reply = has_any_legal_move(&game_state);
    game_state.is_checkmate = game_state.is_check && !has_reply;
    game_state.is_stalemate = !game_state.is_check && !has_reply;
    game_state.is_draw = game_state.is_stalemate;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    // FEN lists the eighth rank first, which is rank index 0 here.
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += empty_count as i8;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if file >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            let mut piece = Piece::new(kind, color);
            // A pawn off its home rank must have moved; everything else is
            // settled by the castling-rights field afterwards.
            if kind == PieceKind::Pawn {
                piece.has_moved = rank as i8 != color.pawn_home_rank();
            }
            set_square(
                &mut game_state.board,
                Position::new(file, rank as i8),
                Some(piece),
            );
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

/// Translate the castling field into king/rook `has_moved` flags: every
/// king and rook starts out marked moved, and each granted right clears the
/// flag on the corresponding pair when both stand on their home squares.
fn apply_castling_rights(castling_part: &str, game_state: &mut GameState) -> Result<(), String> {
    for rank in 0..8 {
        for file in 0..8 {
            let square = Position::new(file, rank);
            if let Some(mut piece) = piece_on(&game_state.board, square) {
                if piece.kind == PieceKind::King || piece.kind == PieceKind::Rook {
                    piece.has_moved = true;
                    set_square(&mut game_state.board, square, Some(piece));
                }
            }
        }
    }

    if castling_part == "-" {
        return Ok(());
    }

    for ch in castling_part.chars() {
        let (color, rook_file) = match ch {
            'K' => (Color::White, 7),
            'Q' => (Color::White, 0),
            'k' => (Color::Black, 7),
            'q' => (Color::Black, 0),
            _ => return Err(format!("Invalid castling rights character '{ch}'")),
        };
        let back_rank = if color == Color::White { 7 } else { 0 };
        clear_has_moved_if(game_state, Position::new(4, back_rank), PieceKind::King, color);
        clear_has_moved_if(
            game_state,
            Position::new(rook_file, back_rank),
            PieceKind::Rook,
            color,
        );
    }

    Ok(())
}

fn clear_has_moved_if(
    game_state: &mut GameState,
    square: Position,
    kind: PieceKind,
    color: Color,
) {
    if let Some(mut piece) = piece_on(&game_state.board, square) {
        if piece.kind == kind && piece.color == color {
            piece.has_moved = false;
            set_square(&mut game_state.board, square, Some(piece));
        }
    }
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Position>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    let square = algebraic_to_position(en_passant_part)?;
    // Only the skipped square of a double pawn advance qualifies, which
    // always lies on the third or sixth rank.
    if square.rank != 2 && square.rank != 5 {
        return Err(format!("Invalid en-passant square: {en_passant_part}"));
    }
    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some((color, kind))
}

pub fn generate_fen(game_state: &GameState) -> String {
    let mut fen = String::new();

    for rank in 0..8 {
        let mut empty_run = 0u32;
        for file in 0..8 {
            match piece_on(&game_state.board, Position::new(file, rank)) {
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    fen.push(piece_to_fen_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            fen.push_str(&empty_run.to_string());
        }
        if rank < 7 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match game_state.current_player {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push(' ');
    let rights = castling_rights_field(game_state);
    fen.push_str(&rights);

    fen.push(' ');
    match game_state
        .en_passant_target
        .and_then(|target| position_to_algebraic(target).ok())
    {
        Some(square) => fen.push_str(&square),
        None => fen.push('-'),
    }

    // Halfmove clock is not tracked (no fifty-move rule); the fullmove
    // number falls out of the history length.
    let fullmove = game_state.move_history.len() / 2 + 1;
    fen.push_str(&format!(" 0 {fullmove}"));

    fen
}

fn castling_rights_field(game_state: &GameState) -> String {
    let mut rights = String::new();
    for (color, kingside_char, queenside_char) in
        [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')]
    {
        let back_rank = if color == Color::White { 7 } else { 0 };
        let king_unmoved = unmoved_piece_at(
            game_state,
            Position::new(4, back_rank),
            PieceKind::King,
            color,
        );
        if king_unmoved
            && unmoved_piece_at(game_state, Position::new(7, back_rank), PieceKind::Rook, color)
        {
            rights.push(kingside_char);
        }
        if king_unmoved
            && unmoved_piece_at(game_state, Position::new(0, back_rank), PieceKind::Rook, color)
        {
            rights.push(queenside_char);
        }
    }
    if rights.is_empty() {
        rights.push('-');
    }
    rights
}

fn unmoved_piece_at(
    game_state: &GameState,
    square: Position,
    kind: PieceKind,
    color: Color,
) -> bool {
    matches!(
        piece_on(&game_state.board, square),
        Some(piece) if piece.kind == kind && piece.color == color && !piece.has_moved
    )
}

fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
