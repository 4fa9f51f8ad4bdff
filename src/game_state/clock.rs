//! Clock transitions over explicit instants.
//!
//! The engine never reads wall-clock time itself: callers sample an instant
//! and pass it in, which keeps every transition deterministic and testable.
//! The presentation layer owns periodic polling for a live countdown and
//! calls `set_timeout` when a side's remaining time would reach zero.

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

/// Flip `clock_running` and restamp the timestamp with `now`.
pub fn toggle_clock(state: &GameState, now: DateTime<Utc>) -> GameState {
    let mut next = state.clone();
    next.clock_running = !next.clock_running;
    next.last_move_timestamp = Some(now);
    next
}

/// Mark the game over by timeout: zero `color`'s clock, stop the clock.
/// Idempotent; calling it again for the same side is a no-op in effect.
pub fn set_timeout(state: &GameState, color: Color) -> GameState {
    let mut next = state.clone();
    next.clocks[color.index()] = 0;
    next.clock_running = false;
    next.timeout_loser = Some(color);
    next
}

/// Milliseconds elapsed since the last stamped instant, zero when the clock
/// is not running or no instant was ever stamped. Negative gaps (caller
/// passed an instant before the stamp) clamp to zero.
pub(crate) fn elapsed_ms(state: &GameState, now: DateTime<Utc>) -> i64 {
    if !state.clock_running {
        return 0;
    }
    match state.last_move_timestamp {
        Some(stamp) => (now - stamp).num_milliseconds().max(0),
        None => 0,
    }
}

/// Debit elapsed time from `color`'s clock, flooring at zero.
pub(crate) fn debit_elapsed(state: &mut GameState, color: Color, now: DateTime<Utc>) {
    let elapsed = elapsed_ms(state, now);
    let clock = &mut state.clocks[color.index()];
    *clock = (*clock - elapsed).max(0);
}

/// Credit elapsed time back to `color`'s clock (takeback path).
pub(crate) fn credit_elapsed(state: &mut GameState, color: Color, now: DateTime<Utc>) {
    let elapsed = elapsed_ms(state, now);
    state.clocks[color.index()] += elapsed;
}
