//! Region definitions for the mission map.

use serde::{Deserialize, Serialize};

use crate::core::RegionId;

/// A region on the mission map.
///
/// Regions form the board characters move across. Adjacency is modeled for
/// map rendering and (optionally) move validation; a region may also carry a
/// heat penalty applied when a character enters it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Unique identifier for this region.
    pub id: RegionId,

    /// Human-readable name (for display/reporting).
    pub name: String,

    /// Regions reachable from this one.
    pub adjacent: Vec<RegionId>,

    /// Heat added when a character enters this region. `None` for safe regions.
    pub heat_on_enter: Option<u8>,
}

impl Region {
    /// Create a new region with no adjacency and no heat penalty.
    pub fn new(id: impl Into<RegionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            adjacent: Vec::new(),
            heat_on_enter: None,
        }
    }

    /// Add an adjacent region (builder pattern).
    #[must_use]
    pub fn with_adjacent(mut self, region: impl Into<RegionId>) -> Self {
        self.adjacent.push(region.into());
        self
    }

    /// Set the heat-on-enter penalty (builder pattern).
    #[must_use]
    pub fn with_heat_on_enter(mut self, heat: u8) -> Self {
        self.heat_on_enter = Some(heat);
        self
    }

    /// Check whether another region is adjacent to this one.
    #[must_use]
    pub fn is_adjacent(&self, region: &RegionId) -> bool {
        self.adjacent.contains(region)
    }
}
