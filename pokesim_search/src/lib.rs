//! Move selection for `pokesim` battles.
//!
//! ```
//! use pokesim::prelude::*;
//! use pokesim_search::prelude::*;
//!
//! let state = BattleBuilder::single(
//!     Pokemon::new(Species::Jolteon, &[MoveId::Thunderbolt, MoveId::ShadowBall]),
//!     Pokemon::new(Species::Gyarados, &[MoveId::Surf]),
//! )
//! .build();
//! let mut search = Expectiminimax::default();
//! let res = search.select_action(&state, 2).unwrap();
//! assert_eq!(Action::UseMove(0), res.action);
//! ```
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]

/// Implementation for expectiminimax search
pub mod expectiminimax;

/// Fixed-size transposition table
pub mod transposition_table;

pub mod prelude {
    pub use crate::expectiminimax::{
        select_action, Expectiminimax, SearchConfig, SearchCounter, SearchError, SearchLimits, SearchResult,
    };
    pub use crate::transposition_table::TranspositionTable;
}

#[cfg(test)]
mod tests;
