//! Gear definitions.
//!
//! Gear items are carried by characters and used via the `use-gear` action.
//! Mechanical effects are keyed off the gear category; the content pipeline
//! authors the numbers.

use serde::{Deserialize, Serialize};

use crate::core::GearId;

/// Gear category and its mechanical payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum GearKind {
    /// Restores health, clamped to the health ceiling.
    Healing {
        /// Health restored per use.
        amount: u8,
    },
    /// Reduces the global heat level.
    Utility {
        /// Heat removed per use.
        heat_reduction: u8,
    },
    /// Combat gear. No generic effect is defined; concrete combat resolution
    /// is an extension point for game-specific drivers.
    Combat,
}

/// A gear item as carried by a character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gear {
    /// Unique identifier for this item.
    pub id: GearId,

    /// Human-readable name.
    pub name: String,

    /// Category and mechanical payload.
    pub kind: GearKind,

    /// Consumable gear is removed from the character after use.
    pub consumable: bool,
}

impl Gear {
    /// Create a new gear item.
    pub fn new(id: impl Into<GearId>, name: impl Into<String>, kind: GearKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            consumable: false,
        }
    }

    /// Mark this item as consumable (builder pattern).
    #[must_use]
    pub fn consumable(mut self) -> Self {
        self.consumable = true;
        self
    }
}
