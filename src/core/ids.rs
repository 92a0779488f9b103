//! Identifier newtypes for game entities.
//!
//! Characters, regions, objectives, and gear are all authored in the content
//! pipeline and referenced by string ids. The engine doesn't interpret ids -
//! it just stores and compares them. Newtypes keep the four id spaces from
//! being mixed up at compile time.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $display:literal) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new id.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the raw id value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($display, "({})"), self.0)
            }
        }
    };
}

string_id! {
    /// Unique identifier for a character.
    CharacterId, "Character"
}

string_id! {
    /// Unique identifier for a region on the mission map.
    RegionId, "Region"
}

string_id! {
    /// Unique identifier for a mission objective.
    ObjectiveId, "Objective"
}

string_id! {
    /// Unique identifier for a gear item.
    GearId, "Gear"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_equality() {
        assert_eq!(CharacterId::new("ada"), CharacterId::from("ada"));
        assert_ne!(CharacterId::new("ada"), CharacterId::new("ben"));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", RegionId::new("vault")), "Region(vault)");
        assert_eq!(format!("{}", GearId::new("medkit")), "Gear(medkit)");
    }

    #[test]
    fn test_id_as_str() {
        let id = ObjectiveId::new("find-the-key");
        assert_eq!(id.as_str(), "find-the-key");
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = RegionId::new("atrium");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"atrium\"");

        let back: RegionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
