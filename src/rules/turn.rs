//! Turn management.
//!
//! Tracks the per-character action budget within a turn and drives the
//! transition to the next turn. Turn advancement is caller-initiated: an
//! external driver decides when all players have acted and calls
//! [`advance_turn`]; the engine never advances on its own.

use crate::core::{CharacterId, GameState, Turn, ACTIONS_PER_TURN};
use crate::rules::{heat, outcome};

/// How many actions a character has left this turn (0..=2).
#[must_use]
pub fn actions_remaining(character: &CharacterId, state: &GameState) -> u8 {
    ACTIONS_PER_TURN.saturating_sub(state.current_turn.actions_used_by(character))
}

/// Check whether every active character has used their full budget.
#[must_use]
pub fn is_turn_complete(state: &GameState) -> bool {
    state
        .active_characters()
        .all(|c| state.current_turn.actions_used_by(&c.id) >= ACTIONS_PER_TURN)
}

/// Complete the current turn and start the next one.
///
/// End-of-turn effects run while the completed turn is still current, so
/// their events land in that turn's log: the configured per-turn heat rise,
/// then the high-heat weirdness effect, then win/loss evaluation. The
/// completed turn is then archived and a fresh turn begins.
///
/// The round cap observes the incoming turn number, so the evaluator runs a
/// second time after the increment; it is idempotent, so an already-decided
/// game is untouched.
#[must_use]
pub fn advance_turn(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.current_turn.completed = true;

    let per_turn = next.heat_increase_per_turn;
    if per_turn > 0 {
        heat::increase(&mut next, per_turn, "end-of-turn heat rise");
    }
    heat::apply_weirdness_threshold(&mut next);
    outcome::evaluate(&mut next);

    let number = next.current_turn.number;
    let completed = std::mem::replace(&mut next.current_turn, Turn::numbered(number + 1));
    next.turns.push_back(completed);

    outcome::evaluate(&mut next);
    next
}
