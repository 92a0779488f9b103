//! Mission objective definitions.

use serde::{Deserialize, Serialize};

use crate::core::ObjectiveId;

/// A mission objective, flagged required or optional.
///
/// Required objectives gate full success; optional objectives feed the
/// partial-success condition on escape missions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    /// Unique identifier for this objective.
    pub id: ObjectiveId,

    /// Human-readable description.
    pub description: String,

    /// Whether this objective is required for full success.
    pub required: bool,
}

impl Objective {
    /// Create a required objective.
    pub fn required(id: impl Into<ObjectiveId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            required: true,
        }
    }

    /// Create an optional objective.
    pub fn optional(id: impl Into<ObjectiveId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            required: false,
        }
    }
}
