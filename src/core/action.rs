//! Player actions.
//!
//! An action is a verb (the kind) plus the noun it targets, submitted on
//! behalf of one character. Targets are typed per kind, so a move can only
//! name a region and a team-up can only name a character; target-presence is
//! guaranteed at construction and the validator checks the remaining rules
//! (existence, adjacency, same-region, and so on).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CharacterId, GearId, ObjectiveId, RegionId};

/// Action verb plus its typed target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ActionKind {
    /// Move to a region.
    Move {
        /// Destination region.
        to: RegionId,
    },
    /// Use a carried gear item.
    UseGear {
        /// The item to use.
        gear: GearId,
    },
    /// Interact with something in the current region. The engine records the
    /// attempt; concrete effects are resolved by externally supplied data.
    Interact {
        /// Free-form target id, interpreted by the content layer.
        target: String,
    },
    /// Team up with another character in the same region.
    TeamUp {
        /// The partner character.
        ally: CharacterId,
    },
    /// Rest and recover 1 health.
    Rest,
    /// Work on a mission objective.
    Mission {
        /// The objective being completed.
        objective: ObjectiveId,
    },
}

impl ActionKind {
    /// Get the fieldless type tag for this action.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionKind::Move { .. } => ActionType::Move,
            ActionKind::UseGear { .. } => ActionType::UseGear,
            ActionKind::Interact { .. } => ActionType::Interact,
            ActionKind::TeamUp { .. } => ActionType::TeamUp,
            ActionKind::Rest => ActionType::Rest,
            ActionKind::Mission { .. } => ActionType::Mission,
        }
    }
}

/// Fieldless action type tag, used in action-usage records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionType {
    /// Move to a region.
    Move,
    /// Use a carried gear item.
    UseGear,
    /// Interact with something in the region.
    Interact,
    /// Team up with another character.
    TeamUp,
    /// Rest and recover.
    Rest,
    /// Work on a mission objective.
    Mission,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ActionType::Move => "move",
            ActionType::UseGear => "use-gear",
            ActionType::Interact => "interact",
            ActionType::TeamUp => "team-up",
            ActionType::Rest => "rest",
            ActionType::Mission => "mission",
        };
        write!(f, "{tag}")
    }
}

/// A complete player action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAction {
    /// The acting character.
    pub character: CharacterId,

    /// The verb and its target.
    pub kind: ActionKind,

    /// Free-form parameters, passed through to the event log. Used by the
    /// content layer to thread context into interact resolution.
    #[serde(default)]
    pub params: FxHashMap<String, String>,
}

impl PlayerAction {
    /// Create a new action with no parameters.
    #[must_use]
    pub fn new(character: impl Into<CharacterId>, kind: ActionKind) -> Self {
        Self {
            character: character.into(),
            kind,
            params: FxHashMap::default(),
        }
    }

    /// Add a free-form parameter (builder pattern).
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// A recorded action usage, tracked against the per-turn budget.
///
/// Used for:
/// - Enforcing the 2-actions-per-character budget
/// - Replay/debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The character who took this action.
    pub character: CharacterId,

    /// The type of action taken.
    pub action_type: ActionType,

    /// Logical timestamp (shared sequence with the event log).
    pub seq: u64,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(character: CharacterId, action_type: ActionType, seq: u64) -> Self {
        Self {
            character,
            action_type,
            seq,
        }
    }
}
