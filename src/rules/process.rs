//! Action processors, one per action kind.
//!
//! Processors assume the action already passed validation; the engine facade
//! orders `validate` before `apply` and never calls a processor otherwise.
//! Each processor mutates the working copy of the state the facade cloned and
//! appends events describing what happened.
//!
//! A processor that cannot find its target after validation passed has hit a
//! caller/data bug, not a game-rule outcome: it leaves the state unchanged
//! and logs a warning so the case stays diagnosable.

use crate::catalog::GearKind;
use crate::core::{
    ActionKind, CharacterId, EventKind, GameEvent, GameState, GearId, MissionType, ObjectiveId,
    PlayerAction, RegionId,
};
use crate::rules::heat;

/// Apply a validated action to the state.
pub(crate) fn apply(state: &mut GameState, action: &PlayerAction) {
    match &action.kind {
        ActionKind::Move { to } => apply_move(state, &action.character, to),
        ActionKind::UseGear { gear } => apply_use_gear(state, &action.character, gear),
        ActionKind::Interact { target } => apply_interact(state, action, target),
        ActionKind::TeamUp { ally } => apply_team_up(state, &action.character, ally),
        ActionKind::Rest => apply_rest(state, &action.character),
        ActionKind::Mission { objective } => apply_mission(state, &action.character, objective),
    }
}

fn apply_move(state: &mut GameState, id: &CharacterId, to: &RegionId) {
    let Some(character) = state.character_mut(id) else {
        tracing::warn!(character = %id, "move: character not found after validation");
        return;
    };
    let from = std::mem::replace(&mut character.position, to.clone());
    let name = character.name.clone();

    let to_name = state
        .region(to)
        .map_or_else(|| to.as_str().to_string(), |r| r.name.clone());
    state.push_event(
        GameEvent::new(
            EventKind::CharacterMove,
            format!("{name} moved to {to_name}"),
        )
        .with_character(id.clone())
        .with_region(from)
        .with_region(to.clone()),
    );

    let heat_on_enter = state.region(to).and_then(|r| r.heat_on_enter);
    if let Some(amount) = heat_on_enter {
        heat::increase(state, amount, "entered high-risk region");
    }
}

fn apply_use_gear(state: &mut GameState, id: &CharacterId, gear_id: &GearId) {
    let Some(character) = state.character(id) else {
        tracing::warn!(character = %id, "use-gear: character not found after validation");
        return;
    };
    let Some(gear) = character.gear_item(gear_id).cloned() else {
        tracing::warn!(character = %id, gear = %gear_id, "use-gear: item not found after validation");
        return;
    };
    let name = character.name.clone();

    let mut event = GameEvent::new(
        EventKind::CharacterUseGear,
        format!("{name} used {}", gear.name),
    )
    .with_character(id.clone())
    .with_gear(gear_id.clone());

    match gear.kind {
        GearKind::Healing { amount } => {
            let healed = state
                .character_mut(id)
                .map_or(0, |character| character.heal(amount));
            event = event.with_value(i64::from(healed));
            state.push_event(event);
        }
        GearKind::Utility { heat_reduction } => {
            state.push_event(event);
            heat::decrease(state, heat_reduction, "used utility gear");
        }
        GearKind::Combat => {
            // Combat resolution is an extension point; the engine only
            // records the use.
            state.push_event(event);
        }
    }

    if gear.consumable {
        if let Some(character) = state.character_mut(id) {
            character.remove_gear(gear_id);
        }
    }
}

fn apply_interact(state: &mut GameState, action: &PlayerAction, target: &str) {
    let Some(character) = state.character(&action.character) else {
        tracing::warn!(character = %action.character, "interact: character not found after validation");
        return;
    };
    let name = character.name.clone();
    let region = character.position.clone();

    // Concrete effects are resolved by externally supplied region/NPC data;
    // the engine records the attempt and provides the hook point.
    let mut event = GameEvent::new(
        EventKind::CharacterInteract,
        format!("{name} interacted with {target}"),
    )
    .with_character(action.character.clone())
    .with_region(region)
    .with_tag(format!("target:{target}"));

    let mut params: Vec<_> = action.params.iter().collect();
    params.sort();
    for (key, value) in params {
        event = event.with_tag(format!("{key}={value}"));
    }

    state.push_event(event);
}

fn apply_team_up(state: &mut GameState, id: &CharacterId, ally: &CharacterId) {
    let (Some(character), Some(partner)) = (state.character(id), state.character(ally)) else {
        tracing::warn!(character = %id, ally = %ally, "team-up: characters not found after validation");
        return;
    };
    let description = format!("{} teamed up with {}", character.name, partner.name);

    // No mechanical bonus yet; recorded as a hook for game-specific drivers.
    state.push_event(
        GameEvent::new(EventKind::CharacterTeamUp, description)
            .with_character(id.clone())
            .with_target(ally.clone()),
    );
}

fn apply_rest(state: &mut GameState, id: &CharacterId) {
    let Some(character) = state.character_mut(id) else {
        tracing::warn!(character = %id, "rest: character not found after validation");
        return;
    };
    let healed = character.heal(1);
    let name = character.name.clone();

    state.push_event(
        GameEvent::new(
            EventKind::CharacterRest,
            format!("{name} rested and recovered {healed} health"),
        )
        .with_character(id.clone())
        .with_value(i64::from(healed)),
    );
}

fn apply_mission(state: &mut GameState, id: &CharacterId, objective_id: &ObjectiveId) {
    if state.is_objective_complete(objective_id) {
        // Idempotent: no duplicate entry, no duplicate event.
        return;
    }
    let Some(objective) = state.objective(objective_id).cloned() else {
        tracing::warn!(objective = %objective_id, "mission: objective not found after validation");
        return;
    };

    state.completed_objectives.insert(objective_id.clone());
    state.push_event(
        GameEvent::new(
            EventKind::ObjectiveCompleted,
            format!("Objective completed: {}", objective.description),
        )
        .with_character(id.clone())
        .with_objective(objective_id.clone()),
    );

    // Escape missions defer the success check to extraction.
    if state.mission_type != MissionType::Escape && state.all_required_objectives_complete() {
        state.set_game_over(
            crate::core::MissionOutcome::Success,
            "All required objectives completed",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Gear, Objective, Region};
    use crate::core::{Character, GameSetup, MissionOutcome, MAX_HEALTH};

    fn setup() -> GameSetup {
        GameSetup::new("m-process", MissionType::Standard)
            .region(Region::new("lobby", "Lobby"))
            .region(Region::new("vault", "The Vault").with_heat_on_enter(2))
            .character(Character::new("ada", "Ada", "lobby"))
            .character(Character::new("ben", "Ben", "lobby"))
            .objective(Objective::required("keys", "Recover the keys"))
            .objective(Objective::required("codes", "Copy the codes"))
    }

    fn ada() -> CharacterId {
        CharacterId::new("ada")
    }

    #[test]
    fn test_move_updates_position_and_logs_from_to() {
        let mut state = setup().build();
        apply(
            &mut state,
            &PlayerAction::new("ada", ActionKind::Move { to: RegionId::new("vault") }),
        );

        assert_eq!(state.character(&ada()).unwrap().position, RegionId::new("vault"));
        let event = &state.current_turn.events[0];
        assert_eq!(event.kind, EventKind::CharacterMove);
        assert_eq!(event.region(0), Some(&RegionId::new("lobby")));
        assert_eq!(event.region(1), Some(&RegionId::new("vault")));
    }

    #[test]
    fn test_move_into_high_risk_region_raises_heat() {
        let mut state = setup().build();
        apply(
            &mut state,
            &PlayerAction::new("ada", ActionKind::Move { to: RegionId::new("vault") }),
        );

        assert_eq!(state.heat, 2);
        let heat_event = state
            .current_turn
            .events
            .iter()
            .find(|e| e.kind == EventKind::HeatIncrease)
            .unwrap();
        assert!(heat_event.description.contains("entered high-risk region"));
    }

    #[test]
    fn test_move_to_safe_region_leaves_heat_alone() {
        let mut state = setup().build();
        state.character_mut(&ada()).unwrap().position = RegionId::new("vault");

        apply(
            &mut state,
            &PlayerAction::new("ada", ActionKind::Move { to: RegionId::new("lobby") }),
        );
        assert_eq!(state.heat, 0);
    }

    #[test]
    fn test_healing_gear_clamps_and_logs_delta() {
        let mut state = GameSetup::new("m-gear", MissionType::Standard)
            .region(Region::new("lobby", "Lobby"))
            .character(
                Character::new("ada", "Ada", "lobby")
                    .with_health(9)
                    .with_gear(Gear::new("medkit", "Medkit", GearKind::Healing { amount: 3 })),
            )
            .build();

        apply(
            &mut state,
            &PlayerAction::new("ada", ActionKind::UseGear { gear: GearId::new("medkit") }),
        );

        let character = state.character(&ada()).unwrap();
        assert_eq!(character.health, MAX_HEALTH);
        let event = &state.current_turn.events[0];
        assert_eq!(event.kind, EventKind::CharacterUseGear);
        assert_eq!(event.value(0, -1), 1);
        // Not consumable: still held.
        assert!(character.gear_item(&GearId::new("medkit")).is_some());
    }

    #[test]
    fn test_utility_gear_reduces_heat() {
        let mut state = GameSetup::new("m-gear", MissionType::Standard)
            .region(Region::new("lobby", "Lobby"))
            .character(Character::new("ada", "Ada", "lobby").with_gear(
                Gear::new("smoke", "Smoke Bomb", GearKind::Utility { heat_reduction: 2 })
                    .consumable(),
            ))
            .starting_heat(5)
            .build();

        apply(
            &mut state,
            &PlayerAction::new("ada", ActionKind::UseGear { gear: GearId::new("smoke") }),
        );

        assert_eq!(state.heat, 3);
        // Consumable: removed after use.
        assert!(state
            .character(&ada())
            .unwrap()
            .gear_item(&GearId::new("smoke"))
            .is_none());

        let kinds: Vec<_> = state.current_turn.events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::CharacterUseGear, EventKind::HeatDecrease]);
    }

    #[test]
    fn test_combat_gear_only_logs() {
        let mut state = GameSetup::new("m-gear", MissionType::Standard)
            .region(Region::new("lobby", "Lobby"))
            .character(
                Character::new("ada", "Ada", "lobby")
                    .with_gear(Gear::new("bat", "Baseball Bat", GearKind::Combat)),
            )
            .build();
        let before_heat = state.heat;

        apply(
            &mut state,
            &PlayerAction::new("ada", ActionKind::UseGear { gear: GearId::new("bat") }),
        );

        assert_eq!(state.heat, before_heat);
        assert_eq!(state.current_turn.events.len(), 1);
        assert_eq!(state.current_turn.events[0].kind, EventKind::CharacterUseGear);
    }

    #[test]
    fn test_interact_records_target_and_params() {
        let mut state = setup().build();
        let action = PlayerAction::new(
            "ada",
            ActionKind::Interact {
                target: "strange-mural".to_string(),
            },
        )
        .with_param("approach", "quietly");

        apply(&mut state, &action);

        let event = &state.current_turn.events[0];
        assert_eq!(event.kind, EventKind::CharacterInteract);
        assert!(event.has_tag("target:strange-mural"));
        assert!(event.has_tag("approach=quietly"));
        assert_eq!(event.region(0), Some(&RegionId::new("lobby")));
    }

    #[test]
    fn test_team_up_logs_both_characters() {
        let mut state = setup().build();
        let before = state.clone();

        apply(
            &mut state,
            &PlayerAction::new("ada", ActionKind::TeamUp { ally: CharacterId::new("ben") }),
        );

        let event = &state.current_turn.events[0];
        assert_eq!(event.kind, EventKind::CharacterTeamUp);
        assert_eq!(event.character, Some(ada()));
        assert_eq!(event.target, Some(CharacterId::new("ben")));

        // No mechanical effect beyond the log.
        assert_eq!(state.characters, before.characters);
        assert_eq!(state.heat, before.heat);
    }

    #[test]
    fn test_rest_heals_one_and_logs_delta() {
        let mut state = setup().build();
        state.character_mut(&ada()).unwrap().health = 4;

        apply(&mut state, &PlayerAction::new("ada", ActionKind::Rest));

        assert_eq!(state.character(&ada()).unwrap().health, 5);
        assert_eq!(state.current_turn.events[0].value(0, -1), 1);
    }

    #[test]
    fn test_rest_at_full_health_logs_zero() {
        let mut state = setup().build();

        apply(&mut state, &PlayerAction::new("ada", ActionKind::Rest));

        assert_eq!(state.character(&ada()).unwrap().health, MAX_HEALTH);
        let event = &state.current_turn.events[0];
        assert_eq!(event.value(0, -1), 0);
        assert!(event.description.contains("recovered 0 health"));
    }

    #[test]
    fn test_mission_completes_objective() {
        let mut state = setup().build();

        apply(
            &mut state,
            &PlayerAction::new("ada", ActionKind::Mission { objective: ObjectiveId::new("keys") }),
        );

        assert!(state.is_objective_complete(&ObjectiveId::new("keys")));
        assert_eq!(state.current_turn.events[0].kind, EventKind::ObjectiveCompleted);
        // One required objective still open.
        assert!(!state.game_over);
    }

    #[test]
    fn test_mission_recompletion_is_idempotent() {
        let mut state = setup().build();
        let action =
            PlayerAction::new("ada", ActionKind::Mission { objective: ObjectiveId::new("keys") });

        apply(&mut state, &action);
        let after_first = state.clone();
        apply(&mut state, &action);

        assert_eq!(state, after_first);
        assert_eq!(state.completed_objectives.len(), 1);
    }

    #[test]
    fn test_last_required_objective_wins_standard_mission() {
        let mut state = setup().build();

        apply(
            &mut state,
            &PlayerAction::new("ada", ActionKind::Mission { objective: ObjectiveId::new("keys") }),
        );
        apply(
            &mut state,
            &PlayerAction::new("ben", ActionKind::Mission { objective: ObjectiveId::new("codes") }),
        );

        assert!(state.game_over);
        assert_eq!(state.mission_outcome, MissionOutcome::Success);
        assert_eq!(
            state.game_over_reason.as_deref(),
            Some("All required objectives completed")
        );
    }

    #[test]
    fn test_escape_mission_defers_success_to_extraction() {
        let mut state = GameSetup::new("m-escape", MissionType::Escape)
            .region(Region::new("lobby", "Lobby"))
            .region(Region::new("exit", "Exit"))
            .character(Character::new("ada", "Ada", "lobby"))
            .objective(Objective::required("keys", "Recover the keys"))
            .extraction_region("exit")
            .build();

        apply(
            &mut state,
            &PlayerAction::new("ada", ActionKind::Mission { objective: ObjectiveId::new("keys") }),
        );

        assert!(state.is_objective_complete(&ObjectiveId::new("keys")));
        assert!(!state.game_over);
    }
}
