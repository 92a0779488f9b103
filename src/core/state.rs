//! Game state: the single source of truth.
//!
//! ## Value semantics
//!
//! A `GameState` is threaded explicitly through every engine call. Public
//! operations clone the state, mutate the clone, and return it; the caller's
//! copy is never touched. `im` persistent collections make those clones cheap.
//!
//! ## Lifecycle
//!
//! A state is created once per session via [`GameSetup`] (characters,
//! regions, and objectives are fixed at creation), then threaded through
//! repeated submit/advance-turn calls until `game_over` becomes true, at
//! which point it is retained only for reporting.

use im::{HashMap as ImHashMap, HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use crate::catalog::{Objective, Region};
use crate::core::action::{ActionRecord, ActionType};
use crate::core::character::Character;
use crate::core::event::{EventKind, GameEvent};
use crate::core::{CharacterId, ObjectiveId, RegionId};

/// Heat ceiling. Reaching it ends the game in failure.
pub const MAX_HEAT: u8 = 10;

/// Actions each character may take per turn.
pub const ACTIONS_PER_TURN: u8 = 2;

/// Mission variant, controlling win-condition behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionType {
    /// Success fires as soon as all required objectives are complete.
    Standard,
    /// Success additionally requires an active character at the extraction
    /// region; optional objectives can earn a partial success there.
    Escape,
}

impl std::fmt::Display for MissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionType::Standard => write!(f, "standard"),
            MissionType::Escape => write!(f, "escape"),
        }
    }
}

/// Terminal outcome of a mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionOutcome {
    /// Game still in progress.
    Pending,
    /// All required objectives completed (and extraction, for escape).
    Success,
    /// Escape mission: extracted with optional objectives only.
    Partial,
    /// Heat maxed, team wiped, or rounds exhausted.
    Failure,
}

impl std::fmt::Display for MissionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionOutcome::Pending => write!(f, "pending"),
            MissionOutcome::Success => write!(f, "success"),
            MissionOutcome::Partial => write!(f, "partial"),
            MissionOutcome::Failure => write!(f, "failure"),
        }
    }
}

/// One full round of play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// 1-based turn number, monotonically increasing.
    pub number: u32,

    /// Action usages this turn, for budget enforcement and replay.
    pub actions_used: Vector<ActionRecord>,

    /// Append-only event log for this turn.
    pub events: Vector<GameEvent>,

    /// Set when the turn is advanced past.
    pub completed: bool,
}

impl Turn {
    /// Create the first turn.
    #[must_use]
    pub fn first() -> Self {
        Self::numbered(1)
    }

    /// Create an empty turn with the given number.
    #[must_use]
    pub fn numbered(number: u32) -> Self {
        Self {
            number,
            actions_used: Vector::new(),
            events: Vector::new(),
            completed: false,
        }
    }

    /// Count the actions a character has used this turn.
    #[must_use]
    pub fn actions_used_by(&self, character: &CharacterId) -> u8 {
        self.actions_used
            .iter()
            .filter(|r| &r.character == character)
            .count()
            .min(u8::MAX as usize) as u8
    }
}

/// Complete game state.
///
/// Uses `im` persistent data structures so the clone-on-every-mutation
/// convention stays cheap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Mission identifier from the content pipeline.
    pub mission_id: String,

    /// Mission variant.
    pub mission_type: MissionType,

    /// Characters, ordered, unique by id.
    pub characters: Vector<Character>,

    /// Mission map, keyed by region id.
    pub regions: ImHashMap<RegionId, Region>,

    /// Mission objectives, ordered.
    pub objectives: Vector<Objective>,

    /// Completed objective ids. Grows monotonically within a game.
    pub completed_objectives: ImHashSet<ObjectiveId>,

    /// Global danger level, 0..=MAX_HEAT.
    pub heat: u8,

    /// Heat added automatically at end of each turn.
    pub heat_increase_per_turn: u8,

    /// Region required for escape-type win conditions.
    pub extraction_region: Option<RegionId>,

    /// Turn cap; exceeding it ends the game in failure.
    pub max_rounds: u32,

    /// Whether move actions must respect region adjacency.
    pub enforce_adjacency: bool,

    /// The in-progress turn.
    pub current_turn: Turn,

    /// Append-only history of completed turns.
    pub turns: Vector<Turn>,

    /// Terminal flag. Once true it is never reverted.
    pub game_over: bool,

    /// Mission outcome; `Pending` until `game_over` is set.
    pub mission_outcome: MissionOutcome,

    /// Human-readable cause, set exactly once alongside `game_over`.
    pub game_over_reason: Option<String>,

    /// Next logical timestamp for events and action records.
    seq: u64,
}

impl GameState {
    // === Lookups ===

    /// Find a character by id.
    #[must_use]
    pub fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| &c.id == id)
    }

    /// Find a character by id, mutably.
    pub fn character_mut(&mut self, id: &CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| &c.id == id)
    }

    /// Iterate over characters that can currently act.
    pub fn active_characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(|c| c.is_active())
    }

    /// Find a region by id.
    #[must_use]
    pub fn region(&self, id: &RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Find an objective by id.
    #[must_use]
    pub fn objective(&self, id: &ObjectiveId) -> Option<&Objective> {
        self.objectives.iter().find(|o| &o.id == id)
    }

    /// Check whether an objective has been completed.
    #[must_use]
    pub fn is_objective_complete(&self, id: &ObjectiveId) -> bool {
        self.completed_objectives.contains(id)
    }

    /// Check whether the mission has at least one required objective and all
    /// of them are complete.
    ///
    /// The non-vacuous guard keeps missions with only optional objectives
    /// from succeeding instantly; those earn at most a partial success.
    #[must_use]
    pub fn all_required_objectives_complete(&self) -> bool {
        let mut any_required = false;
        for objective in self.objectives.iter().filter(|o| o.required) {
            any_required = true;
            if !self.completed_objectives.contains(&objective.id) {
                return false;
            }
        }
        any_required
    }

    /// Check whether any active character is positioned in a region.
    #[must_use]
    pub fn any_active_at(&self, region: &RegionId) -> bool {
        self.active_characters().any(|c| &c.position == region)
    }

    // === Event log ===

    /// Get the next logical timestamp and increment the counter.
    pub fn next_seq(&mut self) -> u64 {
        let seq = self.seq;
        self.seq += 1;
        seq
    }

    /// Append an event to the current turn, stamping its sequence number.
    pub fn push_event(&mut self, mut event: GameEvent) {
        event.seq = self.next_seq();
        self.current_turn.events.push_back(event);
    }

    /// Record an action usage against the current turn's budget.
    pub fn record_action(&mut self, character: CharacterId, action_type: ActionType) {
        let seq = self.next_seq();
        self.current_turn
            .actions_used
            .push_back(ActionRecord::new(character, action_type, seq));
    }

    // === Terminal state ===

    /// Set the terminal flags and log a game-over event.
    ///
    /// No-op if the game is already over: the first cause wins and the reason
    /// is set exactly once.
    pub fn set_game_over(&mut self, outcome: MissionOutcome, reason: impl Into<String>) {
        if self.game_over {
            return;
        }
        let reason = reason.into();
        self.game_over = true;
        self.mission_outcome = outcome;
        self.game_over_reason = Some(reason.clone());
        self.push_event(GameEvent::new(EventKind::GameOver, reason));
    }

    // === Damage ===

    /// Deal damage to a character, logging the result.
    ///
    /// This is the single place the health-to-disabled transition happens:
    /// reaching 0 health flips status to disabled and logs it. Combat gear
    /// resolution and external drivers route damage through here.
    pub fn apply_damage(&mut self, id: &CharacterId, amount: u8) {
        let Some(character) = self.character_mut(id) else {
            tracing::warn!(character = %id, "apply_damage: character not found");
            return;
        };
        let dealt = character.take_damage(amount);
        let disabled = !character.is_active();
        let name = character.name.clone();

        self.push_event(
            GameEvent::new(
                EventKind::CharacterDamaged,
                format!("{name} took {dealt} damage"),
            )
            .with_character(id.clone())
            .with_value(i64::from(dealt)),
        );

        if disabled && dealt > 0 {
            self.push_event(
                GameEvent::new(EventKind::CharacterDisabled, format!("{name} is down"))
                    .with_character(id.clone()),
            );
        }
    }
}

/// Builder for creating a game state.
///
/// ## Example
///
/// ```
/// use mission_engine::catalog::{Objective, Region};
/// use mission_engine::core::{Character, GameSetup, MissionType};
///
/// let state = GameSetup::new("m-01", MissionType::Standard)
///     .region(Region::new("lobby", "Lobby"))
///     .character(Character::new("ada", "Ada", "lobby"))
///     .objective(Objective::required("keys", "Recover the keys"))
///     .max_rounds(8)
///     .build();
///
/// assert_eq!(state.heat, 0);
/// assert_eq!(state.current_turn.number, 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameSetup {
    mission_id: String,
    mission_type: MissionType,
    characters: Vec<Character>,
    regions: Vec<Region>,
    objectives: Vec<Objective>,
    starting_heat: u8,
    max_rounds: u32,
    extraction_region: Option<RegionId>,
    heat_increase_per_turn: Option<u8>,
    enforce_adjacency: bool,
}

impl GameSetup {
    /// Start a setup for a mission.
    #[must_use]
    pub fn new(mission_id: impl Into<String>, mission_type: MissionType) -> Self {
        Self {
            mission_id: mission_id.into(),
            mission_type,
            characters: Vec::new(),
            regions: Vec::new(),
            objectives: Vec::new(),
            starting_heat: 0,
            max_rounds: 10,
            extraction_region: None,
            heat_increase_per_turn: None,
            enforce_adjacency: false,
        }
    }

    /// Add a character.
    #[must_use]
    pub fn character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    /// Add a region to the mission map.
    #[must_use]
    pub fn region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    /// Add an objective.
    #[must_use]
    pub fn objective(mut self, objective: Objective) -> Self {
        self.objectives.push(objective);
        self
    }

    /// Set the starting heat level (clamped to the ceiling).
    #[must_use]
    pub fn starting_heat(mut self, heat: u8) -> Self {
        self.starting_heat = heat.min(MAX_HEAT);
        self
    }

    /// Set the turn cap.
    #[must_use]
    pub fn max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the extraction region (escape missions).
    #[must_use]
    pub fn extraction_region(mut self, region: impl Into<RegionId>) -> Self {
        self.extraction_region = Some(region.into());
        self
    }

    /// Override the per-turn heat rise. Defaults to 1 for escape missions
    /// and 0 otherwise.
    #[must_use]
    pub fn heat_increase_per_turn(mut self, heat: u8) -> Self {
        self.heat_increase_per_turn = Some(heat);
        self
    }

    /// Enforce region adjacency on move actions. Off by default.
    #[must_use]
    pub fn enforce_adjacency(mut self) -> Self {
        self.enforce_adjacency = true;
        self
    }

    /// Build the initial game state.
    ///
    /// Panics on setup bugs: no characters, duplicate character ids, or a
    /// character positioned in an unknown region.
    #[must_use]
    pub fn build(self) -> GameState {
        assert!(!self.characters.is_empty(), "mission needs at least one character");

        let regions: ImHashMap<RegionId, Region> = self
            .regions
            .into_iter()
            .map(|r| (r.id.clone(), r))
            .collect();

        for (i, c) in self.characters.iter().enumerate() {
            assert!(
                !self.characters[..i].iter().any(|other| other.id == c.id),
                "duplicate character id {}",
                c.id
            );
            assert!(
                regions.contains_key(&c.position),
                "character {} starts in unknown region {}",
                c.id,
                c.position
            );
        }

        let heat_increase_per_turn = self.heat_increase_per_turn.unwrap_or(match self.mission_type {
            MissionType::Escape => 1,
            MissionType::Standard => 0,
        });

        GameState {
            mission_id: self.mission_id,
            mission_type: self.mission_type,
            characters: self.characters.into(),
            regions,
            objectives: self.objectives.into(),
            completed_objectives: ImHashSet::new(),
            heat: self.starting_heat,
            heat_increase_per_turn,
            extraction_region: self.extraction_region,
            max_rounds: self.max_rounds,
            enforce_adjacency: self.enforce_adjacency,
            current_turn: Turn::first(),
            turns: Vector::new(),
            game_over: false,
            mission_outcome: MissionOutcome::Pending,
            game_over_reason: None,
            seq: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::character::CharacterStatus;

    fn two_character_setup() -> GameSetup {
        GameSetup::new("m-test", MissionType::Standard)
            .region(Region::new("lobby", "Lobby"))
            .region(Region::new("vault", "The Vault"))
            .character(Character::new("ada", "Ada", "lobby"))
            .character(Character::new("ben", "Ben", "lobby"))
            .objective(Objective::required("keys", "Recover the keys"))
    }

    #[test]
    fn test_setup_defaults() {
        let state = two_character_setup().build();

        assert_eq!(state.heat, 0);
        assert_eq!(state.heat_increase_per_turn, 0);
        assert_eq!(state.max_rounds, 10);
        assert_eq!(state.current_turn.number, 1);
        assert!(!state.current_turn.completed);
        assert!(state.turns.is_empty());
        assert!(!state.game_over);
        assert_eq!(state.mission_outcome, MissionOutcome::Pending);
        assert_eq!(state.game_over_reason, None);
    }

    #[test]
    fn test_escape_missions_default_to_per_turn_heat() {
        let state = GameSetup::new("m-escape", MissionType::Escape)
            .region(Region::new("lobby", "Lobby"))
            .character(Character::new("ada", "Ada", "lobby"))
            .extraction_region("lobby")
            .build();

        assert_eq!(state.heat_increase_per_turn, 1);
    }

    #[test]
    fn test_per_turn_heat_override() {
        let state = GameSetup::new("m-escape", MissionType::Escape)
            .region(Region::new("lobby", "Lobby"))
            .character(Character::new("ada", "Ada", "lobby"))
            .heat_increase_per_turn(3)
            .build();

        assert_eq!(state.heat_increase_per_turn, 3);
    }

    #[test]
    #[should_panic(expected = "at least one character")]
    fn test_setup_requires_characters() {
        let _ = GameSetup::new("m-empty", MissionType::Standard)
            .region(Region::new("lobby", "Lobby"))
            .build();
    }

    #[test]
    #[should_panic(expected = "duplicate character id")]
    fn test_setup_rejects_duplicate_ids() {
        let _ = GameSetup::new("m-dup", MissionType::Standard)
            .region(Region::new("lobby", "Lobby"))
            .character(Character::new("ada", "Ada", "lobby"))
            .character(Character::new("ada", "Other Ada", "lobby"))
            .build();
    }

    #[test]
    #[should_panic(expected = "unknown region")]
    fn test_setup_rejects_unknown_start_region() {
        let _ = GameSetup::new("m-lost", MissionType::Standard)
            .region(Region::new("lobby", "Lobby"))
            .character(Character::new("ada", "Ada", "basement"))
            .build();
    }

    #[test]
    fn test_lookups() {
        let state = two_character_setup().build();

        assert!(state.character(&CharacterId::new("ada")).is_some());
        assert!(state.character(&CharacterId::new("zoe")).is_none());
        assert!(state.region(&RegionId::new("vault")).is_some());
        assert!(state.objective(&ObjectiveId::new("keys")).is_some());
        assert_eq!(state.active_characters().count(), 2);
    }

    #[test]
    fn test_event_seq_is_monotone() {
        let mut state = two_character_setup().build();

        state.push_event(GameEvent::new(EventKind::HeatIncrease, "first"));
        state.record_action(CharacterId::new("ada"), ActionType::Rest);
        state.push_event(GameEvent::new(EventKind::HeatDecrease, "second"));

        assert_eq!(state.current_turn.events[0].seq, 0);
        assert_eq!(state.current_turn.actions_used[0].seq, 1);
        assert_eq!(state.current_turn.events[1].seq, 2);
    }

    #[test]
    fn test_game_over_is_set_once() {
        let mut state = two_character_setup().build();

        state.set_game_over(MissionOutcome::Failure, "first cause");
        state.set_game_over(MissionOutcome::Success, "second cause");

        assert!(state.game_over);
        assert_eq!(state.mission_outcome, MissionOutcome::Failure);
        assert_eq!(state.game_over_reason.as_deref(), Some("first cause"));

        let game_over_events: Vec<_> = state
            .current_turn
            .events
            .iter()
            .filter(|e| e.kind == EventKind::GameOver)
            .collect();
        assert_eq!(game_over_events.len(), 1);
    }

    #[test]
    fn test_apply_damage_disables_and_logs() {
        let mut state = two_character_setup().build();
        let ada = CharacterId::new("ada");

        state.apply_damage(&ada, 4);
        assert_eq!(state.character(&ada).unwrap().health, 6);

        state.apply_damage(&ada, 9);
        let character = state.character(&ada).unwrap();
        assert_eq!(character.health, 0);
        assert_eq!(character.status, CharacterStatus::Disabled);

        let kinds: Vec<_> = state.current_turn.events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::CharacterDamaged,
                EventKind::CharacterDamaged,
                EventKind::CharacterDisabled,
            ]
        );
        // Second hit only had 6 health to take.
        assert_eq!(state.current_turn.events[1].value(0, -1), 6);
    }

    #[test]
    fn test_apply_damage_unknown_character_is_noop() {
        let mut state = two_character_setup().build();
        let before = state.clone();

        state.apply_damage(&CharacterId::new("zoe"), 5);
        assert_eq!(state, before);
    }

    #[test]
    fn test_required_objectives_guard_is_non_vacuous() {
        let mut state = GameSetup::new("m-opt", MissionType::Escape)
            .region(Region::new("lobby", "Lobby"))
            .character(Character::new("ada", "Ada", "lobby"))
            .objective(Objective::optional("photos", "Photograph the lab"))
            .build();

        // Only optional objectives: never "all required complete".
        assert!(!state.all_required_objectives_complete());

        state
            .completed_objectives
            .insert(ObjectiveId::new("photos"));
        assert!(!state.all_required_objectives_complete());
    }

    #[test]
    fn test_state_serialization_round_trip() {
        let state = two_character_setup().build();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
