use crate::data::abilities::Ability;
use crate::data::moves::{MoveData, MoveEffect, SecondaryEffect, STRUGGLE};
use crate::data::types::Type;
use crate::types::action::{Action, ActionRoll, Variant};
use crate::types::battle_state::{BattleState, TeamFlag, VolatileFlag, SCREEN_TURNS, WEATHER_TURNS};
use crate::types::by_side::Side;
use crate::types::logging::Event;
use crate::types::pokemon::{BoostStat, Status, StatusKind, SLEEP_MAX_TURNS};

use super::chance::{can_act, status_move_connects};
use super::damage;
use super::switching::{drag_out, switch_voluntary};
use super::RulesError;

/// Plays one side's action. Does nothing if the side can no longer act.
pub fn act(state: &mut BattleState, side: Side, action: Action, roll: &ActionRoll) -> Result<(), RulesError> {
    if !can_act(state, side) {
        return Ok(());
    }
    match action {
        Action::Switch(target) => switch_voluntary(state, side, target),
        Action::UseMove(slot) => {
            let move_slot = state
                .active(side)
                .moves
                .get(slot as usize)
                .copied()
                .ok_or(RulesError::InvalidMoveSlot(side, slot))?;
            if move_slot.pp == 0 {
                return Err(RulesError::NoPp(side, slot));
            }
            use_move(state, side, Some(slot), move_slot.id.get_move(), roll)
        }
        Action::Struggle => {
            if state.active(side).moves.iter().any(|s| s.pp > 0) {
                return Err(RulesError::CannotStruggle(side));
            }
            use_move(state, side, None, &STRUGGLE, roll)
        }
    }
}

/// Returns false if the user stays asleep.
fn check_sleep(state: &mut BattleState, side: Side, roll: &ActionRoll) -> bool {
    let user = state.active_mut(side);
    let Status::Sleep { turns_slept } = user.status else {
        return true;
    };
    if roll.awaken {
        user.status = Status::Healthy;
        state.log.log(Event::WokeUp(side));
        true
    } else {
        let step = if user.ability == Ability::EarlyBird { 2 } else { 1 };
        user.status = Status::Sleep {
            turns_slept: (turns_slept + step).min(SLEEP_MAX_TURNS),
        };
        state.log.log(Event::FastAsleep(side));
        false
    }
}

fn use_move(
    state: &mut BattleState,
    side: Side,
    slot: Option<u8>,
    md: &'static MoveData,
    roll: &ActionRoll,
) -> Result<(), RulesError> {
    if state.team(side).volatile.flags.contains(VolatileFlag::Flinched) {
        state.log.log(Event::Flinched(side));
        return Ok(());
    }
    if !check_sleep(state, side, roll) {
        return Ok(());
    }
    let pressure = state.active(side.opposite()).ability == Ability::Pressure;
    match slot {
        Some(slot) => {
            let user = state.active_mut(side);
            let move_slot = &mut user.moves[slot as usize];
            move_slot.pp = move_slot.pp.saturating_sub(1 + pressure as u8);
            let id = move_slot.id;
            state.log.log(Event::UseMove(side, id));
        }
        None => state.log.log(Event::Struggle(side)),
    }
    if !roll.hit {
        state.log.log(Event::Missed(side));
        return Ok(());
    }
    if md.is_damaging() {
        use_damaging_move(state, side, md, slot.is_none(), roll)
    } else {
        use_status_move(state, side, md, roll)
    }
}

fn use_damaging_move(
    state: &mut BattleState,
    side: Side,
    md: &'static MoveData,
    typeless: bool,
    roll: &ActionRoll,
) -> Result<(), RulesError> {
    let target_side = side.opposite();
    if state.active(target_side).is_fainted() {
        state.log.log(Event::MoveFailed(side));
        return Ok(());
    }
    let calc = damage::calculate(state, side, md, roll.critical, typeless);
    if calc.is_immune() {
        state.log.log(Event::MoveFailed(side));
        return Ok(());
    }
    if roll.critical {
        state.log.log(Event::CriticalHit(side));
    }
    let target = state.active_mut(target_side);
    let dealt = target.take_damage(calc.damage);
    let (target_fainted, target_species) = (target.is_fainted(), target.species);
    state.log.log(Event::Damage(target_side, dealt));
    if target_fainted {
        state.log.log(Event::Fainted(target_side, target_species));
    }

    if typeless {
        let user = state.active_mut(side);
        let recoil = user.fraction_of_max_hp(1, 4);
        let lost = user.take_damage(recoil);
        let (fainted, species) = (user.is_fainted(), user.species);
        state.log.log(Event::Recoil(side, lost));
        if fainted {
            state.log.log(Event::Fainted(side, species));
        }
    }

    match roll.variant {
        Variant::Plain => {}
        Variant::Secondary => {
            if let Some(secondary) = md.secondary {
                apply_secondary(state, side, secondary.effect);
            }
        }
        v @ Variant::Phaze(..) => return Err(RulesError::InvalidVariant(side, v)),
    }

    let user_alive = state.active(side).is_alive();
    match md.effect {
        MoveEffect::UserBoosts(boosts) if user_alive => boost(state, side, boosts),
        MoveEffect::SwitchOut if user_alive && state.team(side).has_replacement() => {
            state.team_mut(side).flags |= TeamFlag::PendingSwitch;
        }
        _ => {}
    }
    Ok(())
}

fn apply_secondary(state: &mut BattleState, side: Side, effect: SecondaryEffect) {
    let target_side = side.opposite();
    let target_alive = state.active(target_side).is_alive();
    match effect {
        SecondaryEffect::Status(kind) if target_alive => {
            inflict(state, target_side, kind);
        }
        SecondaryEffect::Flinch if target_alive => {
            state.team_mut(target_side).volatile.flags |= VolatileFlag::Flinched;
        }
        SecondaryEffect::TargetBoost(stat, delta) if target_alive => boost(state, target_side, &[(stat, delta)]),
        SecondaryEffect::UserBoost(stat, delta) if state.active(side).is_alive() => boost(state, side, &[(stat, delta)]),
        _ => {}
    }
}

/// Returns false if the status could not be applied.
fn inflict(state: &mut BattleState, side: Side, kind: StatusKind) -> bool {
    let team = state.team_mut(side);
    let pokemon = team.active_pokemon_mut();
    if !pokemon.status.is_healthy() || pokemon.is_immune_to(kind) {
        return false;
    }
    pokemon.status = kind.to_status();
    if kind == StatusKind::Toxic {
        team.volatile.toxic_counter = 0;
    }
    state.log.log(Event::StatusApplied(side, kind));
    true
}

fn boost(state: &mut BattleState, side: Side, boosts: &[(BoostStat, i8)]) {
    for &(stat, delta) in boosts {
        let changed = state.team_mut(side).volatile.boost(stat, delta);
        if changed != 0 {
            state.log.log(Event::StageChange(side, stat, changed));
        }
    }
}

fn use_status_move(
    state: &mut BattleState,
    side: Side,
    md: &'static MoveData,
    roll: &ActionRoll,
) -> Result<(), RulesError> {
    let target_side = side.opposite();
    let target_alive = state.active(target_side).is_alive();
    let succeeded = match md.effect {
        MoveEffect::None => true,
        MoveEffect::Status(kind) => {
            target_alive && status_move_connects(md, state.active(target_side)) && inflict(state, target_side, kind)
        }
        MoveEffect::UserBoosts(boosts) => {
            boost(state, side, boosts);
            true
        }
        MoveEffect::HealHalf => {
            let user = state.active_mut(side);
            let healed = user.restore(user.fraction_of_max_hp(1, 2));
            if healed > 0 {
                state.log.log(Event::Heal(side, healed));
            }
            healed > 0
        }
        MoveEffect::Phaze => match roll.variant {
            Variant::Phaze(target) if target_alive => {
                drag_out(state, target_side, target)?;
                true
            }
            Variant::Phaze(..) | Variant::Plain => false,
            v @ Variant::Secondary => return Err(RulesError::InvalidVariant(side, v)),
        },
        MoveEffect::SwitchOut => false,
        MoveEffect::BatonPass => {
            let team = state.team_mut(side);
            let possible = team.has_replacement();
            if possible {
                team.flags |= TeamFlag::PendingSwitch | TeamFlag::BatonPassing;
            }
            possible
        }
        MoveEffect::Hazard(hazard) => {
            let added = state.team_mut(target_side).hazards.add(hazard);
            if added {
                state.log.log(Event::HazardSet(target_side, hazard));
            }
            added
        }
        MoveEffect::Screen(screen) => {
            let turns = state.team_mut(side).screens.get_mut(screen);
            let possible = *turns == 0;
            if possible {
                *turns = SCREEN_TURNS;
                state.log.log(Event::ScreenSet(side, screen));
            }
            possible
        }
        MoveEffect::Weather(weather) => {
            let possible = state.field.weather != weather;
            if possible {
                state.field.weather = weather;
                state.field.weather_turns = WEATHER_TURNS;
                state.log.log(Event::WeatherStarted(weather));
            }
            possible
        }
        MoveEffect::Trap => {
            let flags = &mut state.team_mut(target_side).volatile.flags;
            let possible = target_alive && !flags.contains(VolatileFlag::Trapped);
            if possible {
                *flags |= VolatileFlag::Trapped;
            }
            possible
        }
        MoveEffect::LeechSeed => {
            let immune = state.active(target_side).has_type(Type::Grass);
            let flags = &mut state.team_mut(target_side).volatile.flags;
            let possible = target_alive && !immune && !flags.contains(VolatileFlag::LeechSeeded);
            if possible {
                *flags |= VolatileFlag::LeechSeeded;
            }
            possible
        }
    };
    if !succeeded {
        state.log.log(Event::MoveFailed(side));
    }
    Ok(())
}
