//! Characters and their gear.
//!
//! ## Status transitions
//!
//! - `Active` characters can act and take up to 2 actions per turn.
//! - `Disabled` is reached when health hits 0 (via `take_damage`).
//! - `Transformed` is reached when weirdness hits the ceiling. Transformed
//!   characters no longer act.
//!
//! Both transitions are one-way within a game; nothing in the core rules
//! restores a disabled or transformed character.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::Gear;
use crate::core::{CharacterId, GearId, RegionId};

/// Health ceiling for every character.
pub const MAX_HEALTH: u8 = 10;

/// Weirdness ceiling. Reaching it transforms the character.
pub const MAX_WEIRDNESS: u8 = 10;

/// Whether a character can currently act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterStatus {
    /// Can act normally.
    Active,
    /// Incapacitated (health reached 0).
    Disabled,
    /// Lost to the weirdness (weirdness reached the ceiling).
    Transformed,
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterStatus::Active => write!(f, "active"),
            CharacterStatus::Disabled => write!(f, "disabled"),
            CharacterStatus::Transformed => write!(f, "transformed"),
        }
    }
}

/// A playable character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier.
    pub id: CharacterId,

    /// Display name.
    pub name: String,

    /// Current status.
    pub status: CharacterStatus,

    /// Health, 0..=MAX_HEALTH.
    pub health: u8,

    /// Weirdness, 0..=MAX_WEIRDNESS.
    pub weirdness: u8,

    /// Current region.
    pub position: RegionId,

    /// Carried gear, unique by id.
    /// SmallVec optimizes for small loadouts without heap allocation.
    pub gear: SmallVec<[Gear; 4]>,
}

impl Character {
    /// Create a new active character at full health.
    pub fn new(
        id: impl Into<CharacterId>,
        name: impl Into<String>,
        position: impl Into<RegionId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: CharacterStatus::Active,
            health: MAX_HEALTH,
            weirdness: 0,
            position: position.into(),
            gear: SmallVec::new(),
        }
    }

    /// Add a gear item (builder pattern).
    #[must_use]
    pub fn with_gear(mut self, gear: Gear) -> Self {
        debug_assert!(
            !self.gear.iter().any(|g| g.id == gear.id),
            "duplicate gear id {}",
            gear.id
        );
        self.gear.push(gear);
        self
    }

    /// Set starting health (builder pattern, clamped to the ceiling).
    #[must_use]
    pub fn with_health(mut self, health: u8) -> Self {
        self.health = health.min(MAX_HEALTH);
        self
    }

    /// Set starting weirdness (builder pattern, clamped to the ceiling).
    #[must_use]
    pub fn with_weirdness(mut self, weirdness: u8) -> Self {
        self.weirdness = weirdness.min(MAX_WEIRDNESS);
        self
    }

    /// Check if this character can act.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == CharacterStatus::Active
    }

    /// Find a carried gear item by id.
    #[must_use]
    pub fn gear_item(&self, id: &GearId) -> Option<&Gear> {
        self.gear.iter().find(|g| &g.id == id)
    }

    /// Remove a carried gear item by id.
    ///
    /// Returns true if the item was found and removed.
    pub fn remove_gear(&mut self, id: &GearId) -> bool {
        if let Some(pos) = self.gear.iter().position(|g| &g.id == id) {
            self.gear.remove(pos);
            true
        } else {
            false
        }
    }

    /// Restore health, clamped to the ceiling.
    ///
    /// Returns the amount actually healed, which is 0 at full health.
    pub fn heal(&mut self, amount: u8) -> u8 {
        let healed = amount.min(MAX_HEALTH - self.health);
        self.health += healed;
        healed
    }

    /// Deal damage, clamped at 0. Reaching 0 health disables the character.
    ///
    /// Returns the amount actually dealt.
    pub fn take_damage(&mut self, amount: u8) -> u8 {
        let dealt = amount.min(self.health);
        self.health -= dealt;
        if self.health == 0 && self.status == CharacterStatus::Active {
            self.status = CharacterStatus::Disabled;
        }
        dealt
    }

    /// Gain weirdness, clamped to the ceiling. Reaching the ceiling
    /// transforms the character.
    ///
    /// Returns the amount actually gained.
    pub fn gain_weirdness(&mut self, amount: u8) -> u8 {
        let gained = amount.min(MAX_WEIRDNESS - self.weirdness);
        self.weirdness += gained;
        if self.weirdness >= MAX_WEIRDNESS && self.status == CharacterStatus::Active {
            self.status = CharacterStatus::Transformed;
        }
        gained
    }
}
