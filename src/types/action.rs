use std::fmt::Display;

use enumset::{EnumSet, EnumSetType};

use super::by_side::{BySide, Side};

/// A decision for one side. Only meaningful relative to a specific state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Use the move in this slot of the active Pokémon.
    UseMove(u8),
    /// Bring in the roster member at this index.
    Switch(u8),
    /// Forced when no move slot has PP left.
    Struggle,
}

impl Action {
    #[inline]
    pub fn is_switch(&self) -> bool {
        matches!(self, Action::Switch(..))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::UseMove(i) => write!(f, "Move#{i}"),
            Action::Switch(i) => write!(f, "Switch#{i}"),
            Action::Struggle => write!(f, "Struggle"),
        }
    }
}

/// The move-specific random outcome selected for a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// No secondary effect.
    #[default]
    Plain,
    /// The move's secondary effect triggers.
    Secondary,
    /// A phazing move drags out the roster member at this index.
    Phaze(u8),
}

/// Resolved randomness for one side's action during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRoll {
    /// Wakes up before moving. Ignored unless asleep.
    pub awaken: bool,
    pub hit: bool,
    pub critical: bool,
    pub variant: Variant,
}

impl Default for ActionRoll {
    fn default() -> Self {
        Self {
            awaken: false,
            hit: true,
            critical: false,
            variant: Variant::Plain,
        }
    }
}

/// The random outcome of a whole turn. Together with both actions it determines the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedOutcome {
    pub first: Side,
    /// `None` for a side that never got to act.
    pub rolls: BySide<Option<ActionRoll>>,
    pub shed_skin: BySide<bool>,
}

impl ResolvedOutcome {
    pub fn new(first: Side) -> Self {
        Self {
            first,
            rolls: Default::default(),
            shed_skin: Default::default(),
        }
    }

    pub fn with_roll(mut self, side: Side, roll: ActionRoll) -> Self {
        self.rolls[side] = Some(roll);
        self
    }

    pub fn with_shed_skin(mut self, side: Side, shed_skin: bool) -> Self {
        self.shed_skin[side] = shed_skin;
        self
    }
}

/// Independent sources of randomness in a turn.
#[allow(clippy::derive_hash_xor_eq)]
#[derive(Debug, EnumSetType, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChanceAxis {
    Order,
    Awaken,
    Accuracy,
    Critical,
    Variant,
    ShedSkin,
}

pub const ORDER_DENOMINATOR: u64 = 2;
pub const AWAKEN_DENOMINATOR: u64 = 12;
pub const ACCURACY_DENOMINATOR: u64 = 100;
pub const CRITICAL_DENOMINATOR: u64 = 16;
pub const VARIANT_DENOMINATOR: u64 = 60;
pub const SHED_SKIN_DENOMINATOR: u64 = 10;

impl ChanceAxis {
    #[inline]
    pub const fn denominator(self) -> u64 {
        match self {
            ChanceAxis::Order => ORDER_DENOMINATOR,
            ChanceAxis::Awaken => AWAKEN_DENOMINATOR,
            ChanceAxis::Accuracy => ACCURACY_DENOMINATOR,
            ChanceAxis::Critical => CRITICAL_DENOMINATOR,
            ChanceAxis::Variant => VARIANT_DENOMINATOR,
            ChanceAxis::ShedSkin => SHED_SKIN_DENOMINATOR,
        }
    }

    /// Product of the denominators of `axes`.
    pub fn total(axes: EnumSet<ChanceAxis>) -> u64 {
        axes.iter().map(ChanceAxis::denominator).product()
    }
}

/// Who moves first in a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnOrder {
    First(Side),
    /// Same priority and speed: decided by a fair coin flip.
    SpeedTie,
}
