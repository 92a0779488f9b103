//! Core types: identifiers, characters, actions, events, state.

mod action;
mod character;
mod event;
mod ids;
mod state;

pub use action::{ActionKind, ActionRecord, ActionType, PlayerAction};
pub use character::{Character, CharacterStatus, MAX_HEALTH, MAX_WEIRDNESS};
pub use event::{EventKind, GameEvent};
pub use ids::{CharacterId, GearId, ObjectiveId, RegionId};
pub use state::{
    GameSetup, GameState, MissionOutcome, MissionType, Turn, ACTIONS_PER_TURN, MAX_HEAT,
};
