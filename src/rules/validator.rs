//! Action validation.
//!
//! `validate` is a pure predicate: given an action and a state, decide
//! legality without mutating anything. Invalidity is data, not a fault -
//! rejected actions come back as a [`RejectReason`], never a panic, and the
//! engine stays in a well-defined state.
//!
//! Checks run in a fixed order and short-circuit on the first failure:
//! common checks (character exists, is active, has budget left), then the
//! per-kind target checks.

use crate::core::{
    ActionKind, CharacterId, CharacterStatus, GameState, GearId, ObjectiveId, PlayerAction,
    RegionId, ACTIONS_PER_TURN,
};

/// Why an action was rejected.
///
/// Carried in the submit outcome so callers can surface the message to
/// players; ordinary rule violations are expected outcomes, not errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// The referenced character is not in this game.
    #[error("character not found: {0}")]
    UnknownCharacter(CharacterId),

    /// The character is disabled or transformed.
    #[error("character cannot act: {status}")]
    CharacterCannotAct {
        /// The acting character.
        character: CharacterId,
        /// Their current status.
        status: CharacterStatus,
    },

    /// The character has used both actions this turn.
    #[error("no actions remaining this turn")]
    NoActionsRemaining,

    /// The move target is not on the mission map.
    #[error("region not found: {0}")]
    UnknownRegion(RegionId),

    /// Adjacency is enforced and the target region isn't reachable.
    #[error("region {to} is not adjacent to {from}")]
    RegionNotAdjacent {
        /// Current position.
        from: RegionId,
        /// Requested destination.
        to: RegionId,
    },

    /// The character does not hold the named gear item.
    #[error("gear not held: {0}")]
    GearNotHeld(GearId),

    /// The team-up partner is not in this game.
    #[error("ally not found: {0}")]
    UnknownAlly(CharacterId),

    /// The team-up partner cannot act.
    #[error("ally cannot act: {status}")]
    AllyCannotAct {
        /// The partner character.
        ally: CharacterId,
        /// Their current status.
        status: CharacterStatus,
    },

    /// The team-up partner is in a different region.
    #[error("ally {ally} is not in the same region")]
    AllyNotPresent {
        /// The partner character.
        ally: CharacterId,
    },

    /// The referenced objective is not part of this mission.
    #[error("objective not found: {0}")]
    UnknownObjective(ObjectiveId),

    /// The game has already ended; no further actions are accepted.
    #[error("game is already over")]
    GameOver,
}

/// Check whether an action is legal in the given state.
///
/// Pure: no side effects, no mutation. Completing an already-completed
/// objective is valid (the processor treats it as an idempotent no-op).
pub fn validate(action: &PlayerAction, state: &GameState) -> Result<(), RejectReason> {
    let Some(character) = state.character(&action.character) else {
        return Err(RejectReason::UnknownCharacter(action.character.clone()));
    };

    if !character.is_active() {
        return Err(RejectReason::CharacterCannotAct {
            character: character.id.clone(),
            status: character.status,
        });
    }

    if state.current_turn.actions_used_by(&character.id) >= ACTIONS_PER_TURN {
        return Err(RejectReason::NoActionsRemaining);
    }

    match &action.kind {
        ActionKind::Move { to } => {
            if state.region(to).is_none() {
                return Err(RejectReason::UnknownRegion(to.clone()));
            }
            if state.enforce_adjacency {
                let from = &character.position;
                let adjacent = state
                    .region(from)
                    .is_some_and(|region| region.is_adjacent(to));
                if !adjacent {
                    return Err(RejectReason::RegionNotAdjacent {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            }
        }
        ActionKind::UseGear { gear } => {
            if character.gear_item(gear).is_none() {
                return Err(RejectReason::GearNotHeld(gear.clone()));
            }
        }
        ActionKind::Interact { .. } => {
            // Target semantics are resolved by the content layer; nothing
            // further to check here.
        }
        ActionKind::TeamUp { ally } => {
            let Some(partner) = state.character(ally) else {
                return Err(RejectReason::UnknownAlly(ally.clone()));
            };
            if !partner.is_active() {
                return Err(RejectReason::AllyCannotAct {
                    ally: partner.id.clone(),
                    status: partner.status,
                });
            }
            if partner.position != character.position {
                return Err(RejectReason::AllyNotPresent {
                    ally: partner.id.clone(),
                });
            }
        }
        ActionKind::Rest => {}
        ActionKind::Mission { objective } => {
            if state.objective(objective).is_none() {
                return Err(RejectReason::UnknownObjective(objective.clone()));
            }
        }
    }

    Ok(())
}
