//! Static content definitions.
//!
//! Regions, gear, and objectives are authored in the content pipeline (card
//! forms, markdown/JSON imports) and handed to the engine at game creation.
//! The engine reads these definitions; it never mutates them.

mod gear;
mod objective;
mod region;
mod registry;

pub use gear::{Gear, GearKind};
pub use objective::Objective;
pub use region::Region;
pub use registry::{GearRegistry, RegionRegistry};
