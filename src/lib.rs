//! Crate root module declarations for the Tandem Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, move rules, and
//! utility helpers) so binaries, tests, and external presentation layers can
//! import stable module paths. The engine itself is pure and synchronous:
//! every public operation takes a state (and, where time matters, an explicit
//! instant) and returns a fresh state, leaving its input untouched.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod clock;
    pub mod game_state;
    pub mod move_record;
}

pub mod move_rules {
    pub mod attack_checks;
    pub mod bishop_rules;
    pub mod king_rules;
    pub mod knight_rules;
    pub mod legality;
    pub mod move_apply;
    pub mod move_enumerator;
    pub mod move_undo;
    pub mod pawn_rules;
    pub mod queen_rules;
    pub mod rook_rules;
    pub mod shared;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen;
    pub mod move_notation;
    pub mod render_game_state;
}
