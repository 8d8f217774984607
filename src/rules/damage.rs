use crate::data::abilities::Ability;
use crate::data::moves::{MoveCategory, MoveData};
use crate::data::types::{Type, EFFECTIVENESS_DENOMINATOR};
use crate::types::battle_state::{BattleState, WeatherKind};
use crate::types::by_side::Side;
use crate::types::pokemon::{BoostStat, Status};

/// Damage rolls are fixed at this percentage of the maximum roll.
pub const DAMAGE_ROLL_PERCENT: u32 = 93;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageCalc {
    pub damage: u16,
    /// Numerator over `EFFECTIVENESS_DENOMINATOR`.
    pub effectiveness: u32,
}

impl DamageCalc {
    #[inline]
    pub fn is_immune(&self) -> bool {
        self.effectiveness == 0
    }
}

/// Effectiveness of `md` against the opposing active Pokémon. `typeless` moves are always neutral.
pub fn effectiveness(state: &BattleState, side: Side, md: &MoveData, typeless: bool) -> u32 {
    let target = state.active(side.opposite());
    if typeless {
        return EFFECTIVENESS_DENOMINATOR;
    }
    if md.move_type == Type::Ground && target.ability == Ability::Levitate {
        return 0;
    }
    md.move_type.effectiveness(target.types)
}

/// Damage dealt by the active Pokémon of `side` to the opposing active Pokémon.
pub fn calculate(state: &BattleState, side: Side, md: &MoveData, critical: bool, typeless: bool) -> DamageCalc {
    let effectiveness = effectiveness(state, side, md, typeless);
    if effectiveness == 0 || !md.is_damaging() {
        return DamageCalc {
            damage: 0,
            effectiveness,
        };
    }
    let (own, other) = state.sides.get_two(side);
    let user = own.active_pokemon();
    let target = other.active_pokemon();
    let physical = md.category == MoveCategory::Physical;
    let (atk_stat, def_stat) = if physical {
        (BoostStat::Atk, BoostStat::Def)
    } else {
        (BoostStat::SpA, BoostStat::SpD)
    };
    let mut atk_stage = own.volatile.stages[atk_stat];
    let mut def_stage = other.volatile.stages[def_stat];
    if critical {
        atk_stage = atk_stage.max(0);
        def_stage = def_stage.min(0);
    }
    let boosted = |base: u16, stat: BoostStat, stage: i8| {
        let (num, den) = stat.stage_multiplier(stage);
        (base as u32 * num / den).max(1)
    };
    let atk = boosted(user.stats.get(atk_stat), atk_stat, atk_stage);
    let def = boosted(target.stats.get(def_stat), def_stat, def_stage);

    let level_factor = 2 * user.level as u32 / 5 + 2;
    let mut dmg = level_factor * md.power as u32 * atk / def / 50;
    if physical && user.status == Status::Burn {
        dmg /= 2;
    }
    if !critical {
        let screened = if physical {
            other.screens.reflect > 0
        } else {
            other.screens.light_screen > 0
        };
        if screened {
            dmg /= 2;
        }
    }
    dmg = match (state.field.weather, md.move_type) {
        (WeatherKind::Rain, Type::Water) | (WeatherKind::Sun, Type::Fire) => dmg * 3 / 2,
        (WeatherKind::Rain, Type::Fire) | (WeatherKind::Sun, Type::Water) => dmg / 2,
        _ => dmg,
    };
    dmg += 2;
    if critical {
        dmg *= 2;
    }
    dmg = dmg * DAMAGE_ROLL_PERCENT / 100;
    if !typeless && user.has_type(md.move_type) {
        dmg = dmg * 3 / 2;
    }
    dmg = dmg * effectiveness / EFFECTIVENESS_DENOMINATOR;
    DamageCalc {
        damage: dmg.clamp(1, u16::MAX as u32) as u16,
        effectiveness,
    }
}
