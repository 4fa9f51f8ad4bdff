//! Coordinate notation conversions.
//!
//! Converts between human-readable algebraic coordinates (e.g., `e4`) and
//! [`Position`] values. File letters `a..h` map to file indices 0..7; rank
//! characters `8..1` map to rank indices 0..7 (rank index 0 is the eighth
//! rank). Round trips are exact.

use crate::game_state::chess_types::Position;

/// Convert algebraic notation (for example: "e4") to a board position.
pub fn algebraic_to_position(square: &str) -> Result<Position, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(Position::new((file - b'a') as i8, (b'8' - rank) as i8))
}

/// Convert a board position to algebraic notation (for example: "e4").
pub fn position_to_algebraic(position: Position) -> Result<String, String> {
    if !position.in_bounds() {
        return Err(format!(
            "Position out of bounds: file {}, rank {}",
            position.file, position.rank
        ));
    }

    let file_char = char::from(b'a' + position.file as u8);
    let rank_char = char::from(b'8' - position.rank as u8);
    Ok(format!("{file_char}{rank_char}"))
}
