//! Deterministic battle rules: legality, turn order, chance profiles and state transitions.
//!
//! All randomness of a turn is supplied from outside as a `ResolvedOutcome`, so that
//! applying the same actions and outcome to the same state always yields the same state.
use enumset::EnumSet;
use smallvec::SmallVec;

use crate::data_structures::ActionList;
use crate::types::action::{Action, ActionRoll, ChanceAxis, ResolvedOutcome, TurnOrder, Variant};
use crate::types::battle_state::BattleState;
use crate::types::by_side::{BySide, Side};

pub mod chance;
pub mod damage;
pub mod end_of_turn;
pub mod order;
pub mod switching;
pub mod use_move;

/// Rejected inputs. These indicate a caller bug: legal actions never produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RulesError {
    #[error("{0}: no move in slot {1}")]
    InvalidMoveSlot(Side, u8),
    #[error("{0}: no PP left in slot {1}")]
    NoPp(Side, u8),
    #[error("{0}: cannot use Struggle while a move has PP")]
    CannotStruggle(Side),
    #[error("{0}: cannot switch to roster index {1}")]
    InvalidSwitchTarget(Side, u8),
    #[error("{0}: the active Pokémon is trapped")]
    Trapped(Side),
    #[error("{0}: no replacement is needed")]
    NoReplacementNeeded(Side),
    #[error("{0}: no roll supplied for a side that acts")]
    MissingRoll(Side),
    #[error("{0}: roll variant {1:?} does not apply to this move")]
    InvalidVariant(Side, Variant),
    #[error("{0}: chance axis {1:?} branches but was not declared")]
    UndeclaredChance(Side, ChanceAxis),
}

pub type VariantList = SmallVec<[(u64, Variant); 6]>;

/// Probabilities of the random events of one side's action, queried right before it acts.
/// Numerators are over the fixed denominators of `ChanceAxis`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollProfile {
    /// `Some` only if the user is asleep: chance to wake up and move.
    pub awaken: Option<u64>,
    /// `None` if the move cannot miss.
    pub hit: Option<u64>,
    /// `None` if the move deals no damage.
    pub critical: Option<u64>,
    /// Weighted variants. Empty means a single `Variant::Plain`.
    pub variants: VariantList,
}

/// The rules collaborator of the search.
pub trait BattleRules {
    /// Actions available to `side` in the move-selection phase.
    fn legal_actions(&self, state: &BattleState, side: Side) -> ActionList<Action>;

    /// Switches available to `side` in the replacement phase. Empty if it has nothing to replace.
    fn legal_replacements(&self, state: &BattleState, side: Side) -> ActionList<Action>;

    fn turn_order(&self, state: &BattleState, ai: Action, foe: Action) -> TurnOrder;

    /// Every chance axis that might branch for `side` this turn. Must be a superset of the
    /// axes that actually branch while the turn is played out.
    fn declared_axes(&self, state: &BattleState, side: Side, action: Action) -> EnumSet<ChanceAxis>;

    /// `None` if `side` cannot act any more this turn.
    fn roll_profile(&self, state: &BattleState, side: Side, action: Action) -> Option<RollProfile>;

    /// Numerator of the end-of-turn Shed Skin cure, if it can happen.
    fn shed_skin_chance(&self, state: &BattleState, side: Side) -> Option<u64>;

    /// Plays one side's half of the turn.
    fn act(&self, state: &mut BattleState, side: Side, action: Action, roll: &ActionRoll) -> Result<(), RulesError>;

    fn end_of_turn(&self, state: &mut BattleState, shed_skin: BySide<bool>);

    /// Brings in a replacement between turns.
    fn replace(&self, state: &mut BattleState, side: Side, action: Action) -> Result<(), RulesError>;

    /// Applies one fully resolved turn.
    fn apply_turn(
        &self,
        state: &BattleState,
        ai: Action,
        foe: Action,
        outcome: &ResolvedOutcome,
    ) -> Result<BattleState, RulesError> {
        let mut next = state.clone();
        let actions = BySide::new(ai, foe);
        for side in [outcome.first, outcome.first.opposite()] {
            if next.is_decided() {
                break;
            }
            match outcome.rolls[side] {
                Some(roll) => self.act(&mut next, side, actions[side], &roll)?,
                None => {
                    if self.roll_profile(&next, side, actions[side]).is_some() {
                        return Err(RulesError::MissingRoll(side));
                    }
                }
            }
        }
        if !next.is_decided() {
            self.end_of_turn(&mut next, outcome.shed_skin);
        }
        Ok(next)
    }
}

/// The rules implemented by this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl BattleRules for StandardRules {
    #[inline]
    fn legal_actions(&self, state: &BattleState, side: Side) -> ActionList<Action> {
        legal_actions(state, side)
    }

    #[inline]
    fn legal_replacements(&self, state: &BattleState, side: Side) -> ActionList<Action> {
        legal_replacements(state, side)
    }

    #[inline]
    fn turn_order(&self, state: &BattleState, ai: Action, foe: Action) -> TurnOrder {
        order::turn_order(state, ai, foe)
    }

    #[inline]
    fn declared_axes(&self, state: &BattleState, side: Side, action: Action) -> EnumSet<ChanceAxis> {
        chance::declared_axes(state, side, action)
    }

    #[inline]
    fn roll_profile(&self, state: &BattleState, side: Side, action: Action) -> Option<RollProfile> {
        chance::roll_profile(state, side, action)
    }

    #[inline]
    fn shed_skin_chance(&self, state: &BattleState, side: Side) -> Option<u64> {
        chance::shed_skin_chance(state, side)
    }

    #[inline]
    fn act(&self, state: &mut BattleState, side: Side, action: Action, roll: &ActionRoll) -> Result<(), RulesError> {
        use_move::act(state, side, action, roll)
    }

    #[inline]
    fn end_of_turn(&self, state: &mut BattleState, shed_skin: BySide<bool>) {
        end_of_turn::end_of_turn(state, shed_skin)
    }

    #[inline]
    fn replace(&self, state: &mut BattleState, side: Side, action: Action) -> Result<(), RulesError> {
        switching::replace(state, side, action)
    }
}

/// Applies one fully resolved turn with the standard rules. The input state is not modified.
pub fn apply_turn(
    state: &BattleState,
    ai: Action,
    foe: Action,
    outcome: &ResolvedOutcome,
) -> Result<BattleState, RulesError> {
    StandardRules.apply_turn(state, ai, foe, outcome)
}

/// Moves with PP left (or Struggle), plus switches unless trapped.
/// Empty if the active Pokémon has fainted: the side must replace it first.
pub fn legal_actions(state: &BattleState, side: Side) -> ActionList<Action> {
    let team = state.team(side);
    let active = team.active_pokemon();
    let mut actions: ActionList<Action> = crate::action_list![];
    if active.is_fainted() {
        return actions;
    }
    actions.extend(
        active
            .moves
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.pp > 0)
            .map(|(i, _)| Action::UseMove(i as u8)),
    );
    if actions.is_empty() {
        actions.push(Action::Struggle);
    }
    if !team.volatile.flags.contains(crate::types::battle_state::VolatileFlag::Trapped) {
        actions.extend(team.replacement_candidates().map(Action::Switch));
    }
    actions
}

/// Switches available between turns. Empty unless the side needs a replacement.
pub fn legal_replacements(state: &BattleState, side: Side) -> ActionList<Action> {
    let team = state.team(side);
    if !team.needs_replacement() {
        return crate::action_list![];
    }
    team.replacement_candidates().map(Action::Switch).collect()
}

#[cfg(test)]
mod tests;
