//! Expectiminimax search with alpha-beta pruning at the foe's decision layer.
//!
//! Each node is a simultaneous decision: the AI maximizes over its actions, the foe
//! minimizes over its replies, and every action pair is scored as the probability
//! weighted average of the turn's chance outcomes.
pub mod chance;

pub mod move_scores;

pub mod search;

pub mod types;

pub use chance::{expand, ChanceExpansion, ChanceOutcome, Continuation};
pub use move_scores::MoveScores;
pub use search::{select_action, Expectiminimax};
pub use types::*;
