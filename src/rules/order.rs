use std::cmp::Ordering;

use crate::data::moves::{MoveData, STRUGGLE};
use crate::types::action::{Action, TurnOrder};
use crate::types::battle_state::BattleState;
use crate::types::by_side::Side;
use crate::types::pokemon::{BoostStat, Status};

/// Switching always happens before any move.
pub const SWITCH_PRIORITY: i8 = 7;

/// Move data for an action, if it uses a move.
pub fn move_data(state: &BattleState, side: Side, action: Action) -> Option<&'static MoveData> {
    match action {
        Action::UseMove(slot) => state
            .active(side)
            .moves
            .get(slot as usize)
            .map(|s| s.id.get_move()),
        Action::Struggle => Some(&STRUGGLE),
        Action::Switch(..) => None,
    }
}

pub fn priority(state: &BattleState, side: Side, action: Action) -> i8 {
    match action {
        Action::Switch(..) => SWITCH_PRIORITY,
        _ => move_data(state, side, action).map(|m| m.priority).unwrap_or_default(),
    }
}

/// Speed after stat stages and paralysis.
pub fn effective_speed(state: &BattleState, side: Side) -> u32 {
    let team = state.team(side);
    let pokemon = team.active_pokemon();
    let (num, den) = BoostStat::Spe.stage_multiplier(team.volatile.stages[BoostStat::Spe]);
    let speed = pokemon.stats.spe as u32 * num / den;
    match pokemon.status {
        Status::Paralysis => speed / 4,
        _ => speed,
    }
}

pub fn turn_order(state: &BattleState, ai: Action, foe: Action) -> TurnOrder {
    let by_priority = priority(state, Side::Ai, ai).cmp(&priority(state, Side::Foe, foe));
    let ordering = by_priority.then_with(|| effective_speed(state, Side::Ai).cmp(&effective_speed(state, Side::Foe)));
    match ordering {
        Ordering::Greater => TurnOrder::First(Side::Ai),
        Ordering::Less => TurnOrder::First(Side::Foe),
        Ordering::Equal => TurnOrder::SpeedTie,
    }
}
