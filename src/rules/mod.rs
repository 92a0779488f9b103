//! Game rules: validation, action processing, heat, turns, and outcomes.
//!
//! One authoritative module per responsibility, composed by the
//! [`MissionEngine`] facade:
//!
//! - [`validator`]: pure legality checks
//! - `process`: per-action-kind state mutation (crate-internal; reachable
//!   only through the facade, which always validates first)
//! - [`heat`]: the global danger meter
//! - [`turn`]: action budgets and turn advancement
//! - [`outcome`]: win/loss evaluation

pub mod engine;
pub mod heat;
pub mod outcome;
mod process;
pub mod turn;
pub mod validator;

pub use engine::{MissionEngine, SubmitOutcome};
pub use outcome::MissionResult;
pub use validator::RejectReason;
