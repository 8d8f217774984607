use std::cmp::Reverse;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use pokesim::prelude::*;

/// Scores of actions from earlier in the same search, used to order actions so that
/// alpha-beta pruning cuts as early as possible.
#[derive(Debug, Default, Clone)]
pub struct MoveScores {
    scores: FxHashMap<(Side, u8, Action), Score>,
}

impl MoveScores {
    /// Number of scored (side, active, action) triples.
    pub(crate) fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    fn key(state: &BattleState, side: Side, action: Action) -> (Side, u8, Action) {
        (side, state.team(side).active, action)
    }

    #[inline]
    pub fn get(&self, state: &BattleState, side: Side, action: Action) -> Option<Score> {
        self.scores.get(&Self::key(state, side, action)).copied()
    }

    #[inline]
    pub fn record(&mut self, state: &BattleState, side: Side, action: Action, score: Score) {
        self.scores.insert(Self::key(state, side, action), score);
    }

    /// Best first for `side`: AI actions by descending score, foe actions by ascending score.
    /// Unscored actions go last, in their original order.
    pub fn order(&self, state: &BattleState, side: Side, actions: ActionList<Action>) -> ActionList<Action> {
        match side {
            Side::Ai => actions
                .into_iter()
                .sorted_by_key(|&a| Reverse(self.get(state, side, a).unwrap_or(Score::MIN)))
                .collect(),
            Side::Foe => actions
                .into_iter()
                .sorted_by_key(|&a| self.get(state, side, a).unwrap_or(Score::MAX))
                .collect(),
        }
    }
}
