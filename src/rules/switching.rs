use crate::data::abilities::Ability;
use crate::data::types::{Type, EFFECTIVENESS_DENOMINATOR};
use crate::types::action::Action;
use crate::types::battle_state::{BattleState, TeamFlag, Volatile, VolatileFlag, WeatherKind, WEATHER_TURNS};
use crate::types::by_side::Side;
use crate::types::logging::Event;
use crate::types::pokemon::{BoostStat, StatusKind};

use super::RulesError;

/// Spikes damage as a fraction of maximum HP, indexed by layers.
const SPIKES_DAMAGE: [(u32, u32); 4] = [(0, 1), (1, 8), (1, 6), (1, 4)];

fn validate_target(state: &BattleState, side: Side, target: u8) -> Result<(), RulesError> {
    let team = state.team(side);
    match team.roster.get(target as usize) {
        Some(p) if p.is_alive() && target != team.active => Ok(()),
        _ => Err(RulesError::InvalidSwitchTarget(side, target)),
    }
}

/// A switch chosen as the side's action for the turn.
pub fn switch_voluntary(state: &mut BattleState, side: Side, target: u8) -> Result<(), RulesError> {
    validate_target(state, side, target)?;
    if state.team(side).volatile.flags.contains(VolatileFlag::Trapped) {
        return Err(RulesError::Trapped(side));
    }
    switch_in(state, side, target, false);
    Ok(())
}

/// Forced out mid-turn by a phazing move. The replacement does not act this turn.
pub fn drag_out(state: &mut BattleState, side: Side, target: u8) -> Result<(), RulesError> {
    validate_target(state, side, target)?;
    switch_in(state, side, target, false);
    let team = state.team_mut(side);
    if team.active_pokemon().is_alive() {
        team.volatile.flags |= VolatileFlag::SwitchedIn;
    }
    Ok(())
}

/// Replacement between turns, after a faint or a U-turn / Baton Pass.
pub fn replace(state: &mut BattleState, side: Side, action: Action) -> Result<(), RulesError> {
    let Action::Switch(target) = action else {
        return Err(RulesError::NoReplacementNeeded(side));
    };
    let team = state.team(side);
    if !team.needs_replacement() {
        return Err(RulesError::NoReplacementNeeded(side));
    }
    let baton_pass = team.flags.contains(TeamFlag::BatonPassing) && team.active_pokemon().is_alive();
    validate_target(state, side, target)?;
    switch_in(state, side, target, baton_pass);
    Ok(())
}

/// Brings in `target`, then applies entry hazards and switch-in abilities.
pub(crate) fn switch_in(state: &mut BattleState, side: Side, target: u8, baton_pass: bool) {
    let team = state.team_mut(side);
    team.volatile = if baton_pass {
        Volatile {
            toxic_counter: 0,
            flags: team.volatile.flags - VolatileFlag::Flinched - VolatileFlag::SwitchedIn,
            ..team.volatile
        }
    } else {
        Volatile::default()
    };
    team.active = target;
    team.flags.clear();
    let species = team.active_pokemon().species;
    state.log.log(Event::SwitchIn(side, species));
    apply_entry_hazards(state, side);
    if state.active(side).is_alive() {
        apply_switch_in_ability(state, side);
    }
}

fn apply_entry_hazards(state: &mut BattleState, side: Side) {
    let team = state.team_mut(side);
    let hazards = team.hazards;
    let pokemon = team.active_pokemon_mut();
    let mut total = 0;
    if hazards.stealth_rock {
        let eff = Type::Rock.effectiveness(pokemon.types);
        let dmg = (pokemon.max_hp() as u32 * eff / (8 * EFFECTIVENESS_DENOMINATOR)).max(1) as u16;
        total += pokemon.take_damage(dmg);
    }
    if pokemon.is_grounded() && hazards.spikes > 0 {
        let (num, den) = SPIKES_DAMAGE[hazards.spikes.min(3) as usize];
        let dmg = pokemon.fraction_of_max_hp(num, den);
        total += pokemon.take_damage(dmg);
    }
    let mut absorbed = false;
    let mut poisoned = None;
    if pokemon.is_alive() && pokemon.is_grounded() && hazards.toxic_spikes > 0 {
        if pokemon.has_type(Type::Poison) {
            absorbed = true;
        } else {
            let kind = if hazards.toxic_spikes >= 2 {
                StatusKind::Toxic
            } else {
                StatusKind::Poison
            };
            if pokemon.status.is_healthy() && !pokemon.is_immune_to(kind) {
                pokemon.status = kind.to_status();
                poisoned = Some(kind);
            }
        }
    }
    let fainted = pokemon.is_fainted();
    let species = pokemon.species;
    if absorbed {
        team.hazards.toxic_spikes = 0;
    }
    if total > 0 {
        state.log.log(Event::HazardDamage(side, total));
    }
    if let Some(kind) = poisoned {
        state.log.log(Event::StatusApplied(side, kind));
    }
    if fainted {
        state.log.log(Event::Fainted(side, species));
    }
}

fn apply_switch_in_ability(state: &mut BattleState, side: Side) {
    match state.active(side).ability {
        Ability::Intimidate => {
            let other = state.team_mut(side.opposite());
            if other.active_pokemon().is_alive() {
                let delta = other.volatile.boost(BoostStat::Atk, -1);
                if delta != 0 {
                    state.log.log(Event::StageChange(side.opposite(), BoostStat::Atk, delta));
                }
            }
        }
        Ability::SandStream => {
            if state.field.weather != WeatherKind::Sand {
                state.field.weather = WeatherKind::Sand;
                state.field.weather_turns = WEATHER_TURNS;
                state.log.log(Event::WeatherStarted(WeatherKind::Sand));
            }
        }
        _ => {}
    }
}
