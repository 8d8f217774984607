use enumset::EnumSet;

use crate::data::abilities::Ability;
use crate::data::moves::{Accuracy, MoveData, MoveEffect, SecondaryEffect};
use crate::data::types::Type;
use crate::types::action::{
    Action, ChanceAxis, Variant, ACCURACY_DENOMINATOR, AWAKEN_DENOMINATOR, CRITICAL_DENOMINATOR, VARIANT_DENOMINATOR,
};
use crate::types::battle_state::{BattleState, VolatileFlag};
use crate::types::by_side::Side;
use crate::types::pokemon::{BoostStat, Pokemon, Status, SLEEP_MAX_TURNS};

use super::order::move_data;
use super::{RollProfile, VariantList};

/// Wake-up numerators over 12, indexed by turns already slept.
const WAKE_CHANCE: [u64; SLEEP_MAX_TURNS as usize + 1] = [0, 3, 4, 6, 12];
const WAKE_CHANCE_EARLY_BIRD: [u64; SLEEP_MAX_TURNS as usize + 1] = [3, 6, 8, 12, 12];

/// Critical hit numerators over 16, indexed by critical stage.
const CRITICAL_CHANCE: [u64; 3] = [1, 2, 4];

pub const SHED_SKIN_CHANCE: u64 = 3;

pub fn awaken_chance(pokemon: &Pokemon) -> Option<u64> {
    let Status::Sleep { turns_slept } = pokemon.status else {
        return None;
    };
    let t = turns_slept.min(SLEEP_MAX_TURNS) as usize;
    let table = if pokemon.ability == Ability::EarlyBird {
        &WAKE_CHANCE_EARLY_BIRD
    } else {
        &WAKE_CHANCE
    };
    debug_assert!(table[t] <= AWAKEN_DENOMINATOR);
    Some(table[t])
}

/// Hit numerator over 100, or `None` if the move cannot miss.
pub fn hit_chance(state: &BattleState, side: Side, md: &MoveData) -> Option<u64> {
    let (own, other) = state.sides.get_two(side);
    let Accuracy::Percent(percent) = md.accuracy else {
        return None;
    };
    if own.active_pokemon().ability == Ability::NoGuard || other.active_pokemon().ability == Ability::NoGuard {
        return None;
    }
    let stage = own.volatile.stages[BoostStat::Accuracy] - other.volatile.stages[BoostStat::Evasion];
    let (num, den) = BoostStat::Accuracy.stage_multiplier(stage);
    Some((percent as u64 * num as u64 / den as u64).min(ACCURACY_DENOMINATOR))
}

/// Critical hit numerator over 16, or `None` for non-damaging moves.
pub fn critical_chance(pokemon: &Pokemon, md: &MoveData) -> Option<u64> {
    if !md.is_damaging() {
        return None;
    }
    let stage = md.high_critical as usize + (pokemon.ability == Ability::SuperLuck) as usize;
    let n = CRITICAL_CHANCE[stage.min(CRITICAL_CHANCE.len() - 1)];
    debug_assert!(n <= CRITICAL_DENOMINATOR);
    Some(n)
}

/// Weighted variants over 60. Phazing picks uniformly among the target's healthy bench.
pub fn variants(state: &BattleState, side: Side, md: &MoveData) -> VariantList {
    let target = state.team(side.opposite());
    let mut res = VariantList::new();
    if md.effect == MoveEffect::Phaze {
        let candidates: VariantList = target
            .replacement_candidates()
            .map(|i| (0, Variant::Phaze(i)))
            .collect();
        let n = candidates.len() as u64;
        if n > 0 {
            debug_assert_eq!(0, VARIANT_DENOMINATOR % n);
            res.extend(candidates.into_iter().map(|(_, v)| (VARIANT_DENOMINATOR / n, v)));
        }
        return res;
    }
    let Some(secondary) = md.secondary else {
        return res;
    };
    if let SecondaryEffect::Status(kind) = secondary.effect {
        let target = target.active_pokemon();
        if !target.status.is_healthy() || target.is_immune_to(kind) {
            return res;
        }
    }
    let w = secondary.chance as u64 * VARIANT_DENOMINATOR / 100;
    res.push((w, Variant::Secondary));
    res.push((VARIANT_DENOMINATOR - w, Variant::Plain));
    res
}

/// Whether `side` still gets to act this turn.
#[inline]
pub fn can_act(state: &BattleState, side: Side) -> bool {
    let team = state.team(side);
    team.active_pokemon().is_alive() && !team.volatile.flags.contains(VolatileFlag::SwitchedIn)
}

pub fn roll_profile(state: &BattleState, side: Side, action: Action) -> Option<RollProfile> {
    if !can_act(state, side) {
        return None;
    }
    let team = state.team(side);
    let Some(md) = move_data(state, side, action) else {
        return Some(RollProfile::default());
    };
    if team.volatile.flags.contains(VolatileFlag::Flinched) {
        return Some(RollProfile::default());
    }
    let user = team.active_pokemon();
    Some(RollProfile {
        awaken: awaken_chance(user),
        hit: hit_chance(state, side, md),
        critical: critical_chance(user, md),
        variants: variants(state, side, md),
    })
}

pub fn shed_skin_chance(state: &BattleState, side: Side) -> Option<u64> {
    let p = state.active(side);
    (p.is_alive() && p.ability == Ability::ShedSkin && !p.status.is_healthy()).then_some(SHED_SKIN_CHANCE)
}

/// Axes that may branch for `side` during a turn in which it chose `action`.
pub fn declared_axes(state: &BattleState, side: Side, action: Action) -> EnumSet<ChanceAxis> {
    let team = state.team(side);
    let mut axes = EnumSet::empty();
    if team
        .roster
        .iter()
        .any(|p| p.is_alive() && p.ability == Ability::ShedSkin)
    {
        axes |= ChanceAxis::ShedSkin;
    }
    let Some(md) = move_data(state, side, action) else {
        return axes;
    };
    let user = team.active_pokemon();
    if user.status.is_asleep() || user.ability == Ability::EarlyBird {
        axes |= ChanceAxis::Awaken;
    }
    if matches!(md.accuracy, Accuracy::Percent(..)) {
        axes |= ChanceAxis::Accuracy;
    }
    if md.is_damaging() {
        axes |= ChanceAxis::Critical;
    }
    if md.secondary.is_some() || md.effect == MoveEffect::Phaze {
        axes |= ChanceAxis::Variant;
    }
    axes
}

/// Electric-type status moves do not affect Ground types.
pub(crate) fn status_move_connects(md: &MoveData, target: &Pokemon) -> bool {
    !(md.move_type == Type::Electric && target.has_type(Type::Ground))
}
