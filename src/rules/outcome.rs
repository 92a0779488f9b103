//! Win/loss evaluation.
//!
//! `evaluate` inspects the state after significant mutations and sets the
//! terminal flags when a condition is met. It is idempotent: on an
//! already-terminal state it returns without touching anything, so the first
//! cause always wins.
//!
//! Conditions are checked in fixed priority order, first match wins:
//!
//! 1. Total incapacitation - no active characters.
//! 2. Round limit exceeded.
//! 3. Full success - all required objectives complete (escape missions also
//!    need an active character at the extraction region).
//! 4. Partial success (escape only) - an optional objective complete and an
//!    active character at the extraction region.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, MissionOutcome, MissionType};

/// Terminal outcome plus its cause, for reporting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionResult {
    /// How the mission ended.
    pub outcome: MissionOutcome,

    /// Human-readable cause.
    pub reason: String,
}

/// Get the result of a finished game, or None while it is still running.
#[must_use]
pub fn result(state: &GameState) -> Option<MissionResult> {
    if !state.game_over {
        return None;
    }
    Some(MissionResult {
        outcome: state.mission_outcome,
        reason: state.game_over_reason.clone().unwrap_or_default(),
    })
}

/// Evaluate win/loss conditions, setting terminal flags on the first match.
pub fn evaluate(state: &mut GameState) {
    if state.game_over {
        return;
    }

    if state.active_characters().next().is_none() {
        state.set_game_over(MissionOutcome::Failure, "All characters incapacitated");
        return;
    }

    if state.current_turn.number > state.max_rounds {
        state.set_game_over(MissionOutcome::Failure, "Maximum rounds reached");
        return;
    }

    let extracted = state
        .extraction_region
        .as_ref()
        .is_some_and(|region| state.any_active_at(region));

    if state.all_required_objectives_complete() {
        let success = match state.mission_type {
            MissionType::Standard => true,
            MissionType::Escape => extracted,
        };
        if success {
            state.set_game_over(MissionOutcome::Success, "All required objectives completed");
            return;
        }
    }

    if state.mission_type == MissionType::Escape && extracted {
        let any_optional_complete = state
            .objectives
            .iter()
            .any(|o| !o.required && state.is_objective_complete(&o.id));
        if any_optional_complete {
            state.set_game_over(
                MissionOutcome::Partial,
                "Extracted with optional objectives completed",
            );
        }
    }
}
