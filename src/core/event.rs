//! Game events.
//!
//! Every mutation the engine performs appends an event to the current turn's
//! log. The narrative layer renders these as prose; tests assert on them.
//!
//! Timestamps are logical: a monotone sequence number allocated by the state
//! when the event is appended, so replays are bit-identical.

use serde::{Deserialize, Serialize};

use crate::core::{CharacterId, GearId, ObjectiveId, RegionId};

/// The kind of thing that happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// A character moved between regions.
    CharacterMove,
    /// A character used a gear item.
    CharacterUseGear,
    /// A character interacted with something in their region.
    CharacterInteract,
    /// Two characters teamed up.
    CharacterTeamUp,
    /// A character rested.
    CharacterRest,
    /// A character took damage.
    CharacterDamaged,
    /// A character was incapacitated.
    CharacterDisabled,
    /// A character was lost to the weirdness.
    CharacterTransformed,
    /// A character gained weirdness.
    WeirdnessIncrease,
    /// An objective was completed.
    ObjectiveCompleted,
    /// The heat level rose.
    HeatIncrease,
    /// The heat level fell.
    HeatDecrease,
    /// The game ended.
    GameOver,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            EventKind::CharacterMove => "character-move",
            EventKind::CharacterUseGear => "character-use-gear",
            EventKind::CharacterInteract => "character-interact",
            EventKind::CharacterTeamUp => "character-team-up",
            EventKind::CharacterRest => "character-rest",
            EventKind::CharacterDamaged => "character-damaged",
            EventKind::CharacterDisabled => "character-disabled",
            EventKind::CharacterTransformed => "character-transformed",
            EventKind::WeirdnessIncrease => "weirdness-increase",
            EventKind::ObjectiveCompleted => "objective-completed",
            EventKind::HeatIncrease => "heat-increase",
            EventKind::HeatDecrease => "heat-decrease",
            EventKind::GameOver => "game-over",
        };
        write!(f, "{tag}")
    }
}

/// A logged game event with contextual data.
///
/// ## Event data
///
/// - `kind`: what kind of event this is
/// - `description`: human-readable summary for the narrative layer
/// - `seq`: logical timestamp, assigned when appended to the state
/// - `character` / `target`: the acting character and a second involved
///   character (team-up partner, damage target)
/// - `regions`: region references; moves record `[from, to]`
/// - `objective` / `gear`: structured references for consumers that don't
///   want to parse the description
/// - `values`: numeric payload (amount healed, previous/new heat, etc.)
/// - `tags`: free-form strings for game-specific context (interact
///   parameters and the like)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// The kind of event.
    pub kind: EventKind,

    /// Human-readable summary.
    pub description: String,

    /// Logical timestamp. Assigned by the state on append; 0 until then.
    pub seq: u64,

    /// The character that caused or experienced the event.
    pub character: Option<CharacterId>,

    /// A second character involved (team-up partner, damage target).
    pub target: Option<CharacterId>,

    /// Regions involved. Meaning of each index is event-kind specific.
    pub regions: Vec<RegionId>,

    /// The objective involved.
    pub objective: Option<ObjectiveId>,

    /// The gear item involved.
    pub gear: Option<GearId>,

    /// Numeric payload. Meaning of each index is event-kind specific.
    pub values: Vec<i64>,

    /// Free-form context strings.
    pub tags: Vec<String>,
}

impl GameEvent {
    /// Create a new event with a kind and description.
    pub fn new(kind: EventKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            seq: 0,
            character: None,
            target: None,
            regions: Vec::new(),
            objective: None,
            gear: None,
            values: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Set the acting character (builder pattern).
    #[must_use]
    pub fn with_character(mut self, character: CharacterId) -> Self {
        self.character = Some(character);
        self
    }

    /// Set the second character involved (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target: CharacterId) -> Self {
        self.target = Some(target);
        self
    }

    /// Add a region reference (builder pattern).
    #[must_use]
    pub fn with_region(mut self, region: RegionId) -> Self {
        self.regions.push(region);
        self
    }

    /// Set the objective involved (builder pattern).
    #[must_use]
    pub fn with_objective(mut self, objective: ObjectiveId) -> Self {
        self.objective = Some(objective);
        self
    }

    /// Set the gear item involved (builder pattern).
    #[must_use]
    pub fn with_gear(mut self, gear: GearId) -> Self {
        self.gear = Some(gear);
        self
    }

    /// Add a numeric value (builder pattern).
    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.values.push(value);
        self
    }

    /// Add a free-form tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Get a region by index, or None.
    #[must_use]
    pub fn region(&self, index: usize) -> Option<&RegionId> {
        self.regions.get(index)
    }

    /// Get a value by index, or a default.
    #[must_use]
    pub fn value(&self, index: usize, default: i64) -> i64 {
        self.values.get(index).copied().unwrap_or(default)
    }

    /// Check if the event carries a specific tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
