//! Heat management.
//!
//! Heat is the global 0..=10 danger meter. Increases and decreases are
//! clamped; a change that doesn't move the needle logs nothing, so clamped
//! repeats never produce duplicate events. Reaching the ceiling ends the
//! game in failure. Sustained heat at or above the weirdness threshold
//! corrupts every active character at end of turn.

use crate::core::{EventKind, GameEvent, GameState, MissionOutcome, MAX_HEAT};

/// Heat at or above this at end of turn raises every active character's
/// weirdness.
pub const WEIRDNESS_THRESHOLD: u8 = 9;

/// Raise the heat level, clamped to the ceiling.
///
/// Logs a heat-increase event carrying previous level, new level, and the
/// applied delta. No event when nothing changed. Reaching the ceiling sets
/// the terminal failure state.
pub fn increase(state: &mut GameState, amount: u8, reason: &str) {
    let prev = state.heat;
    let new = prev.saturating_add(amount).min(MAX_HEAT);
    if new == prev {
        return;
    }

    state.heat = new;
    state.push_event(
        GameEvent::new(
            EventKind::HeatIncrease,
            format!("Heat rose from {prev} to {new}: {reason}"),
        )
        .with_value(i64::from(prev))
        .with_value(i64::from(new))
        .with_value(i64::from(new - prev)),
    );

    if new >= MAX_HEAT {
        state.set_game_over(MissionOutcome::Failure, "Heat level reached maximum");
    }
}

/// Lower the heat level, clamped at 0. Never ends the game.
pub fn decrease(state: &mut GameState, amount: u8, reason: &str) {
    let prev = state.heat;
    let new = prev.saturating_sub(amount);
    if new == prev {
        return;
    }

    state.heat = new;
    state.push_event(
        GameEvent::new(
            EventKind::HeatDecrease,
            format!("Heat fell from {prev} to {new}: {reason}"),
        )
        .with_value(i64::from(prev))
        .with_value(i64::from(new))
        .with_value(i64::from(prev - new)),
    );
}

/// Qualitative heat tier, for reporting only. Rule decisions never read this.
#[must_use]
pub fn heat_level_description(heat: u8) -> &'static str {
    match heat {
        0..=2 => "low",
        3..=5 => "moderate",
        6..=8 => "high",
        _ => "critical",
    }
}

/// Apply the end-of-turn weirdness effect of sustained high heat.
///
/// At or above [`WEIRDNESS_THRESHOLD`], every active character gains +1
/// weirdness (clamped); a character reaching the ceiling transforms.
pub fn apply_weirdness_threshold(state: &mut GameState) {
    if state.heat < WEIRDNESS_THRESHOLD {
        return;
    }

    let ids: Vec<_> = state.active_characters().map(|c| c.id.clone()).collect();
    for id in ids {
        let Some(character) = state.character_mut(&id) else {
            continue;
        };
        let gained = character.gain_weirdness(1);
        let weirdness = character.weirdness;
        let transformed = !character.is_active();
        let name = character.name.clone();

        if gained > 0 {
            state.push_event(
                GameEvent::new(
                    EventKind::WeirdnessIncrease,
                    format!("{name} feels the weirdness creeping in"),
                )
                .with_character(id.clone())
                .with_value(i64::from(weirdness)),
            );
        }
        if transformed {
            state.push_event(
                GameEvent::new(
                    EventKind::CharacterTransformed,
                    format!("{name} has been lost to the weirdness"),
                )
                .with_character(id),
            );
        }
    }
}
