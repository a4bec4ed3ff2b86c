//! Turn and round advancement.

use crate::state::GameState;

/// Advance throw/turn/round counters after a scored throw.
///
/// Returns `(new_state, game_ended)`. Called once per applied throw.
///
/// The cursor steps by the literal observed rule
/// `(index + 0.5) % player_count` rather than `+1`; it does not visit
/// integer seats on every turn change and is kept without correction.
/// Half steps are exact in f64, so the `== 0.0` wrap check is sound.
pub fn advance(mut state: GameState) -> (GameState, bool) {
    state.total_turns += 1;
    state.throws_this_turn += 1;
    if state.throws_this_turn < 3 {
        return (state, false);
    }

    state.throws_this_turn = 0;
    let count = state.players.len() as f64;
    let next_index = if count > 0.0 {
        (state.current_player_index + 0.5) % count
    } else {
        0.0
    };
    state.current_player_index = next_index;

    // Wrapping back to seat 0 means a full pass: start the next round,
    // or end the game instead of advancing past the limit.
    if next_index == 0.0 {
        if state.round + 1 > state.max_rounds {
            return (state, true);
        }
        state.round += 1;
    }

    (state, false)
}
