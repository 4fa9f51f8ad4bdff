use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Position;

/// Errors surfaced by the rules engine.
///
/// The engine favors total functions with boolean/empty-result signaling:
/// `is_legal_move` answers `false`, enumeration answers empty, and takeback
/// on an empty history is a documented no-op. The only error-carrying
/// surface is the defensive move executor, which refuses to run a move that
/// fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessError {
    /// The candidate move violates a precondition or a movement rule.
    IllegalMove { from: Position, to: Position },
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::IllegalMove { from, to } => {
                write!(f, "illegal move from {from} to {to}")
            }
        }
    }
}

impl Error for ChessError {}
