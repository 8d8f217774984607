use std::fmt::Debug;
use std::ops::Neg;

use super::battle_state::BattleResult;
use super::by_side::Side;

/// Heuristic value
pub type HV = i64;

/// Evaluation of a state from the AI's perspective. Larger is better for the AI.
#[derive(Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub _repr: HV,
}

pub const VICTORY: HV = 1 << 32;

impl Score {
    /// The AI has won.
    pub const VICTORY: Score = Score::from_repr(VICTORY);
    /// The foe has won.
    pub const DEFEAT: Score = Score::from_repr(-VICTORY);
    /// Both sides lost their last Pokémon in the same turn.
    pub const DRAW: Score = Score::from_repr(0);
    /// Strictly below every reachable score.
    pub const MIN: Score = Score::from_repr(-VICTORY - 1);
    /// Strictly above every reachable score.
    pub const MAX: Score = Score::from_repr(VICTORY + 1);

    #[inline]
    pub const fn from_repr(value: HV) -> Self {
        Self { _repr: value }
    }

    /// A heuristic score, clamped strictly inside the sentinels.
    #[inline]
    pub fn heuristic(value: HV) -> Self {
        Self::from_repr(value.clamp(-VICTORY + 1, VICTORY - 1))
    }

    #[inline]
    pub fn get_eval(self) -> HV {
        self._repr
    }

    pub fn from_result(result: BattleResult) -> Self {
        match result {
            BattleResult::Won(Side::Ai) => Score::VICTORY,
            BattleResult::Won(Side::Foe) => Score::DEFEAT,
            BattleResult::Draw => Score::DRAW,
        }
    }

    /// Whether this is a win or loss sentinel.
    #[inline]
    pub fn is_decisive(self) -> bool {
        self == Score::VICTORY || self == Score::DEFEAT
    }
}

impl Neg for Score {
    type Output = Self;

    #[inline]
    fn neg(self) -> Score {
        Score::from_repr(-self._repr)
    }
}

impl Debug for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Score::VICTORY => write!(f, "Victory"),
            Score::DEFEAT => write!(f, "Defeat"),
            Score { _repr: v } => write!(f, "Score({v:+})"),
        }
    }
}
