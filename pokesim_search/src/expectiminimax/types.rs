use std::ops::Add;

use instant::Instant;
use pokesim::smallvec::SmallVec;

use pokesim::prelude::*;

use crate::transposition_table::DEFAULT_DIMENSIONS;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCounter {
    /// Number of states visited through turn and replacement resolution.
    pub states_visited: u64,
    /// Number of times a position was evaluated (zero depth or battle decided).
    pub evals: u64,
    /// Number of times there is a transposition table hit
    pub tt_hits: u64,
    /// Number of foe action loops cut short by alpha-beta pruning.
    pub beta_cutoffs: u64,
    /// Last finished depth for iterative deepening
    pub last_depth: u8,
}

impl SearchCounter {
    pub const ZERO: SearchCounter = SearchCounter {
        states_visited: 0,
        evals: 0,
        tt_hits: 0,
        beta_cutoffs: 0,
        last_depth: 0,
    };

    #[inline]
    pub fn add_in_place(&mut self, c: &SearchCounter) {
        self.states_visited += c.states_visited;
        self.evals += c.evals;
        self.tt_hits += c.tt_hits;
        self.beta_cutoffs += c.beta_cutoffs;
        self.last_depth = self.last_depth.max(c.last_depth);
    }

    pub fn summary(&self, dt_ns: u128) -> String {
        let dt_ms: f64 = 1e-6 * (dt_ns as f64);
        let rate: f64 = if dt_ns == 0 {
            0.0
        } else {
            (1e-6_f64 * 1e9_f64) * (self.states_visited as f64) / (dt_ns as f64)
        };
        format!(
            "depth={} states={} evals={} tt_hits={} cutoffs={} dt={dt_ms:.2}ms rate={rate:.4} Mstates/s",
            self.last_depth, self.states_visited, self.evals, self.tt_hits, self.beta_cutoffs
        )
    }
}

impl Add for SearchCounter {
    type Output = SearchCounter;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut a = self;
        a.add_in_place(&rhs);
        a
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    pub max_time_ms: Option<u128>,
    pub max_positions: Option<u64>,
}

impl SearchLimits {
    pub fn should_terminate(&self, start_time: Instant, positions_searched: u64) -> bool {
        if let Some(max_positions) = self.max_positions {
            if positions_searched >= max_positions {
                return true;
            }
        }
        if let Some(max_time_ms) = self.max_time_ms {
            return start_time.elapsed().as_millis() >= max_time_ms;
        }
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum depth for iterative deepening. Each turn or replacement consumes one unit.
    pub depth: u8,
    pub limits: Option<SearchLimits>,
    /// Transposition table dimensions. Any zero dimension disables the table.
    pub tt_dimensions: (usize, usize, usize),
    /// Cut the foe's action loop once it cannot beat the AI's best alternative.
    pub alpha_beta: bool,
    /// Seed of the random fallback action.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            limits: None,
            tt_dimensions: DEFAULT_DIMENSIONS,
            alpha_beta: true,
            seed: 0,
        }
    }
}

impl SearchConfig {
    pub fn new(depth: u8, limits: Option<SearchLimits>) -> Self {
        Self {
            depth,
            limits,
            ..Default::default()
        }
    }
}

pub type RootScores = SmallVec<[(Action, Score); 16]>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The AI's decision: a move or switch, or the replacement to bring in.
    pub action: Action,
    pub score: Score,
    /// Scores of every root decision at the last completed depth, in legal order.
    /// Exact without pruning, upper bounds for pruned decisions otherwise.
    pub root_scores: RootScores,
    pub counter: SearchCounter,
    /// 0 if no depth completed and `action` is the random fallback.
    pub completed_depth: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("{0} has no legal action")]
    NoLegalActions(Side),
    #[error("the AI has no decision to make in this state")]
    NoDecision,
    #[error("rules rejected an action: {0}")]
    Rules(#[from] RulesError),
}

/// Early exits of the recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Halt {
    /// The search budget ran out. The current depth is discarded.
    Budget,
    Error(SearchError),
}

impl From<RulesError> for Halt {
    #[inline]
    fn from(value: RulesError) -> Self {
        Halt::Error(SearchError::Rules(value))
    }
}

impl From<SearchError> for Halt {
    #[inline]
    fn from(value: SearchError) -> Self {
        Halt::Error(value)
    }
}
