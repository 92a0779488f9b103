//! Registries for content definition lookup.
//!
//! The content pipeline loads region and gear definitions into registries;
//! game creation pulls from them by id. Lookup is by `FxHashMap` for fast
//! hashing of string ids.

use rustc_hash::FxHashMap;

use super::gear::Gear;
use super::region::Region;
use crate::core::{GearId, RegionId};

/// Registry of region definitions.
///
/// ## Example
///
/// ```
/// use mission_engine::catalog::{Region, RegionRegistry};
/// use mission_engine::core::RegionId;
///
/// let mut registry = RegionRegistry::new();
/// registry.register(Region::new("vault", "The Vault").with_heat_on_enter(2));
///
/// let found = registry.get(&RegionId::new("vault")).unwrap();
/// assert_eq!(found.name, "The Vault");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RegionRegistry {
    regions: FxHashMap<RegionId, Region>,
}

impl RegionRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region definition.
    ///
    /// Panics if a region with the same id already exists.
    pub fn register(&mut self, region: Region) {
        assert!(
            !self.regions.contains_key(&region.id),
            "region {} already registered",
            region.id
        );
        self.regions.insert(region.id.clone(), region);
    }

    /// Get a region definition by id.
    #[must_use]
    pub fn get(&self, id: &RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Check if a region id is registered.
    #[must_use]
    pub fn contains(&self, id: &RegionId) -> bool {
        self.regions.contains_key(id)
    }

    /// Get the number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate over all registered regions.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }
}

/// Registry of gear definitions.
#[derive(Clone, Debug, Default)]
pub struct GearRegistry {
    gear: FxHashMap<GearId, Gear>,
}

impl GearRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gear definition.
    ///
    /// Panics if an item with the same id already exists.
    pub fn register(&mut self, gear: Gear) {
        assert!(
            !self.gear.contains_key(&gear.id),
            "gear {} already registered",
            gear.id
        );
        self.gear.insert(gear.id.clone(), gear);
    }

    /// Get a gear definition by id.
    #[must_use]
    pub fn get(&self, id: &GearId) -> Option<&Gear> {
        self.gear.get(id)
    }

    /// Check if a gear id is registered.
    #[must_use]
    pub fn contains(&self, id: &GearId) -> bool {
        self.gear.contains_key(id)
    }

    /// Get the number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gear.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gear.is_empty()
    }

    /// Iterate over all registered items.
    pub fn iter(&self) -> impl Iterator<Item = &Gear> {
        self.gear.values()
    }
}
