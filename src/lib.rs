#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![doc = include_str!("../README.md")]

/// Builder for `BattleState`s
pub mod builder;

/// Static battle data: types, species, abilities and moves.
pub mod data;

/// Module containing collection datatypes used by this crate.
pub mod data_structures;

/// Heuristic evaluation
pub mod evaluate;

/// Deterministic battle rules
pub mod rules;

/// Mixed-radix fingerprints of battle states
pub mod state_key;

pub mod types;

/// Re-exports the `smallvec` crate
pub use smallvec;

/// Re-exports the `rand` create
pub use rand;

/// Re-exports the `enum_map` crate
pub use enum_map;

/// Re-exports the `thiserror` crate
pub use thiserror;

/// Re-exports the `enumset` crate
pub use enumset;

pub mod prelude {
    pub use crate::builder::BattleBuilder;
    pub use crate::data::{abilities::Ability, moves::MoveId, species::Species, types::Type};
    pub use crate::data_structures::ActionList;
    pub use crate::evaluate::{EvalWeights, Evaluate, Evaluator};
    pub use crate::rules::{
        apply_turn, legal_actions, legal_replacements, BattleRules, RollProfile, RulesError, StandardRules,
    };
    pub use crate::state_key::{HashValue, RadixHash, RadixHasher, StateKey};
    pub use crate::types::action::{Action, ActionRoll, ChanceAxis, ResolvedOutcome, TurnOrder, Variant};
    pub use crate::types::battle_state::{
        BattleResult, BattleState, EntryHazards, Field, Hazard, Roster, Screen, Screens, Team, TeamFlag, Volatile,
        VolatileFlag, WeatherKind,
    };
    pub use crate::types::by_side::{BySide, Side};
    pub use crate::types::logging::{Event, EventLog};
    pub use crate::types::pokemon::{BoostStat, MoveSlot, Pokemon, Stats, Status, StatusKind};
    pub use crate::types::score::Score;
}

#[cfg(test)]
mod tests;
