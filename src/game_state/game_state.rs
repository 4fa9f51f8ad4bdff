//! Core game state model.
//!
//! `GameState` is the canonical representation of a game in progress: the
//! mailbox board, side to move, move history, captured-piece lists, derived
//! check/mate/stalemate flags, the en passant window, and the per-side
//! clocks. It is pure data: every transition (move execution, takeback,
//! clock toggling) produces a fresh state and never mutates its input, so
//! history and takeback stay correct by construction.

use chrono::{DateTime, Utc};

use crate::game_state::chess_rules::{DEFAULT_TIME_CONTROL_MS, STARTING_POSITION_FEN};
use crate::game_state::chess_types::{piece_on, Board, Color, Piece, PieceKind, Position};
use crate::game_state::move_record::MoveRecord;
use crate::utils::fen::{generate_fen, parse_fen};

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,

    pub current_player: Color,
    pub move_history: Vec<MoveRecord>,
    /// Captured pieces filed under the capturing side, `[Color::index()]`.
    pub captured_pieces: [Vec<Piece>; 2],

    // --- Derived flags for the side to move ---
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_draw: bool,

    /// Square skipped by the immediately preceding double pawn push, valid
    /// for en passant capture on the very next move only.
    pub en_passant_target: Option<Position>,

    // --- Clock layer ---
    /// Remaining time per side in milliseconds, `[Color::index()]`.
    pub clocks: [i64; 2],
    pub last_move_timestamp: Option<DateTime<Utc>>,
    pub clock_running: bool,
    /// Side whose flag fell, set by `set_timeout`; `None` during play.
    pub timeout_loser: Option<Color>,
}

impl GameState {
    /// Empty board, no history, clocks at the default time control.
    /// Used as the base for FEN parsing.
    pub fn new_empty() -> Self {
        Self {
            board: [[None; 8]; 8],
            current_player: Color::White,
            move_history: Vec::new(),
            captured_pieces: [Vec::new(), Vec::new()],
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
            is_draw: false,
            en_passant_target: None,
            clocks: [DEFAULT_TIME_CONTROL_MS; 2],
            last_move_timestamp: None,
            clock_running: false,
            timeout_loser: None,
        }
    }

    /// Standard starting position: White to move, clocks loaded with the
    /// default time control, no timestamp, clock stopped.
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        piece_on(&self.board, position)
    }

    /// Count pieces of a given kind and color, mainly for invariant checks.
    pub fn count_pieces(&self, kind: PieceKind, color: Color) -> usize {
        self.board
            .iter()
            .flatten()
            .flatten()
            .filter(|piece| piece.kind == kind && piece.color == color)
            .count()
    }
}
