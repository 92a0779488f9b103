//! The engine facade.
//!
//! [`MissionEngine`] composes the validator, processors, heat manager, turn
//! manager, and outcome evaluator behind two public operations: `submit` and
//! `advance_turn`. The engine itself is stateless - all game state lives in
//! the [`GameState`] value the caller threads through each call - so one
//! engine value can serve any number of sessions as long as each session's
//! state has a single writer.

use crate::core::{GameState, PlayerAction};
use crate::rules::outcome::{self, MissionResult};
use crate::rules::validator::{self, RejectReason};
use crate::rules::{process, turn};

/// Result of submitting an action.
///
/// Always carries a state: the mutated clone when the action applied, or the
/// caller's state unchanged when it was rejected. The rejection reason rides
/// along out-of-band rather than being thrown - rule violations are expected
/// outcomes.
#[derive(Clone, Debug)]
pub struct SubmitOutcome {
    /// The resulting state.
    pub state: GameState,

    /// Why the action was rejected, if it was.
    pub rejection: Option<RejectReason>,
}

impl SubmitOutcome {
    /// Check whether the action was applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.rejection.is_none()
    }

    /// Consume the outcome, keeping only the state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

/// The rules engine.
///
/// Stateless and synchronous: every operation is a pure function from
/// `(action, state)` to a new state. Construct one explicitly and share it
/// freely; it holds nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct MissionEngine;

impl MissionEngine {
    /// Create a new engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate and apply a player action.
    ///
    /// On a terminal state or a rule violation, the input state comes back
    /// unchanged with the reason attached. On success the action is charged
    /// against the character's turn budget and the processor runs. Win/loss
    /// evaluation happens at turn advancement; the heat manager and mission
    /// processor set terminal state themselves when an action crosses a
    /// threshold mid-turn.
    #[must_use]
    pub fn submit(&self, state: &GameState, action: &PlayerAction) -> SubmitOutcome {
        if state.game_over {
            tracing::debug!(character = %action.character, "action rejected: game is over");
            return SubmitOutcome {
                state: state.clone(),
                rejection: Some(RejectReason::GameOver),
            };
        }

        if let Err(reason) = validator::validate(action, state) {
            tracing::debug!(character = %action.character, %reason, "action rejected");
            return SubmitOutcome {
                state: state.clone(),
                rejection: Some(reason),
            };
        }

        let mut next = state.clone();
        next.record_action(action.character.clone(), action.kind.action_type());
        process::apply(&mut next, action);

        SubmitOutcome {
            state: next,
            rejection: None,
        }
    }

    /// Complete the current turn and start the next one.
    ///
    /// No-op on a terminal state.
    #[must_use]
    pub fn advance_turn(&self, state: &GameState) -> GameState {
        if state.game_over {
            return state.clone();
        }
        turn::advance_turn(state)
    }

    /// Check whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self, state: &GameState) -> bool {
        state.game_over
    }

    /// Get the outcome and reason of a finished game, or None while running.
    #[must_use]
    pub fn result(&self, state: &GameState) -> Option<MissionResult> {
        outcome::result(state)
    }
}
