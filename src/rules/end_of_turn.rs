use crate::data::abilities::Ability;
use crate::data::types::Type;
use crate::state_key::TOXIC_COUNTER_MAX;
use crate::types::battle_state::{BattleState, VolatileFlag, WeatherKind};
use crate::types::by_side::{BySide, Side};
use crate::types::logging::Event;
use crate::types::pokemon::Status;

fn log_faint(state: &mut BattleState, side: Side) {
    let p = state.active(side);
    if p.is_fainted() {
        let species = p.species;
        state.log.log(Event::Fainted(side, species));
    }
}

fn shed_skin(state: &mut BattleState, side: Side, cured: bool) {
    let p = state.active_mut(side);
    if cured && p.is_alive() && p.ability == Ability::ShedSkin && !p.status.is_healthy() {
        p.status = Status::Healthy;
        state.log.log(Event::ShedSkin(side));
    }
}

fn weather_damage(state: &mut BattleState, side: Side) {
    let weather = state.field.weather;
    let p = state.active_mut(side);
    if p.is_fainted() {
        return;
    }
    let hurt = match weather {
        WeatherKind::Sand => !(p.has_type(Type::Rock) || p.has_type(Type::Ground) || p.has_type(Type::Steel)),
        WeatherKind::Hail => !p.has_type(Type::Ice),
        _ => false,
    };
    if hurt {
        let lost = p.take_damage(p.fraction_of_max_hp(1, 16));
        state.log.log(Event::WeatherDamage(side, lost));
        log_faint(state, side);
    }
}

fn status_damage(state: &mut BattleState, side: Side) {
    let team = state.team_mut(side);
    if team.active_pokemon().is_fainted() {
        return;
    }
    let status = team.active_pokemon().status;
    let dmg = match status {
        Status::Burn | Status::Poison => team.active_pokemon().fraction_of_max_hp(1, 8),
        Status::Toxic => {
            team.volatile.toxic_counter = (team.volatile.toxic_counter + 1).min(TOXIC_COUNTER_MAX);
            let n = team.volatile.toxic_counter as u32;
            team.active_pokemon().fraction_of_max_hp(n, 16)
        }
        _ => return,
    };
    let lost = team.active_pokemon_mut().take_damage(dmg);
    state.log.log(Event::ResidualDamage(side, lost));
    log_faint(state, side);
}

fn leech_seed(state: &mut BattleState, side: Side) {
    let team = state.team(side);
    if !team.volatile.flags.contains(VolatileFlag::LeechSeeded) || team.active_pokemon().is_fainted() {
        return;
    }
    let p = state.active_mut(side);
    let lost = p.take_damage(p.fraction_of_max_hp(1, 8));
    state.log.log(Event::ResidualDamage(side, lost));
    log_faint(state, side);
    let seeder = state.active_mut(side.opposite());
    if seeder.is_alive() {
        let healed = seeder.restore(lost);
        if healed > 0 {
            state.log.log(Event::Heal(side.opposite(), healed));
        }
    }
}

/// Residual effects, applied in a fixed order: Shed Skin, weather, status, Leech Seed,
/// then screen and weather counters tick down.
pub fn end_of_turn(state: &mut BattleState, shed: BySide<bool>) {
    for side in Side::VALUES {
        shed_skin(state, side, shed[side]);
    }
    for side in Side::VALUES {
        weather_damage(state, side);
    }
    for side in Side::VALUES {
        status_damage(state, side);
    }
    for side in Side::VALUES {
        leech_seed(state, side);
    }
    for side in Side::VALUES {
        let team = state.team_mut(side);
        team.screens.tick();
        team.volatile.flags -= VolatileFlag::Flinched | VolatileFlag::SwitchedIn;
    }
    if state.field.weather != WeatherKind::Clear {
        state.field.weather_turns = state.field.weather_turns.saturating_sub(1);
        if state.field.weather_turns == 0 {
            let ended = state.field.weather;
            state.field.weather = WeatherKind::Clear;
            state.log.log(Event::WeatherEnded(ended));
        }
    }
}
