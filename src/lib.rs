//! # mission-engine
//!
//! A deterministic turn-based rules engine for a cooperative tabletop
//! mission game: characters with action budgets, a global danger meter
//! ("Heat"), mission objectives, and win/loss evaluation.
//!
//! ## Design Principles
//!
//! 1. **State is a value**: Every public operation clones the state, mutates
//!    the clone, and returns it. The caller's snapshot is never touched, and
//!    `im` persistent data structures keep the clones cheap.
//!
//! 2. **Invalidity is data**: Rule violations come back as a structured
//!    rejection reason in the submit outcome, never as a panic or error
//!    return. The engine stays in a well-defined state after any input.
//!
//! 3. **Caller-driven**: The engine never advances a turn on its own; an
//!    external driver decides when all players have acted. The engine value
//!    itself is stateless, so each session owns exactly one authoritative
//!    `GameState` snapshot.
//!
//! ## Modules
//!
//! - `core`: identifiers, characters, actions, events, state
//! - `catalog`: static content definitions (regions, gear, objectives)
//! - `rules`: validator, processors, heat, turns, outcomes, and the facade
//!
//! ## Example
//!
//! ```
//! use mission_engine::catalog::{Objective, Region};
//! use mission_engine::core::{ActionKind, Character, GameSetup, MissionType, PlayerAction};
//! use mission_engine::rules::MissionEngine;
//!
//! let engine = MissionEngine::new();
//! let state = GameSetup::new("m-01", MissionType::Standard)
//!     .region(Region::new("lobby", "Lobby"))
//!     .character(Character::new("ada", "Ada", "lobby"))
//!     .objective(Objective::required("keys", "Recover the keys"))
//!     .build();
//!
//! let outcome = engine.submit(&state, &PlayerAction::new("ada", ActionKind::Rest));
//! assert!(outcome.is_applied());
//!
//! let state = engine.advance_turn(&outcome.state);
//! assert_eq!(state.current_turn.number, 2);
//! ```

pub mod catalog;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, ActionRecord, ActionType, Character, CharacterId, CharacterStatus, EventKind,
    GameEvent, GameSetup, GameState, GearId, MissionOutcome, MissionType, ObjectiveId,
    PlayerAction, RegionId, Turn, ACTIONS_PER_TURN, MAX_HEALTH, MAX_HEAT, MAX_WEIRDNESS,
};

pub use crate::catalog::{Gear, GearKind, GearRegistry, Objective, Region, RegionRegistry};

pub use crate::rules::{MissionEngine, MissionResult, RejectReason, SubmitOutcome};
