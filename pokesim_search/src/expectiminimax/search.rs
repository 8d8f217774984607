use instant::Instant;
use log::{debug, trace, warn};

use pokesim::action_list;
use pokesim::prelude::*;
use pokesim::rand::{rngs::SmallRng, Rng, SeedableRng};
use pokesim::types::score::HV;

use crate::transposition_table::TranspositionTable;

use super::chance::{expand, Continuation};
use super::move_scores::MoveScores;
use super::types::*;

/// What the AI decides at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Between turns: some active Pokémon has fainted or a pending switch must be resolved.
    Replacement,
    /// Both sides choose a move or a switch.
    MoveSelection,
}

impl Phase {
    #[inline]
    fn of(state: &BattleState) -> Self {
        let BySide(ai, foe) = state.pending_replacements();
        if ai || foe {
            Phase::Replacement
        } else {
            Phase::MoveSelection
        }
    }
}

/// Per-depth search context.
struct Searcher<'a, R: BattleRules, E: Evaluate> {
    rules: &'a R,
    evaluator: &'a E,
    tt: &'a mut TranspositionTable,
    config: &'a SearchConfig,
    move_scores: &'a mut MoveScores,
    start_time: Instant,
    /// States visited by earlier depths, counted against the position budget.
    previous_states: u64,
    counter: SearchCounter,
}

impl<'a, R: BattleRules, E: Evaluate> Searcher<'a, R, E> {
    #[inline]
    fn check_limits(&self) -> Result<(), Halt> {
        let Some(limits) = &self.config.limits else {
            return Ok(());
        };
        if limits.should_terminate(self.start_time, self.previous_states + self.counter.states_visited) {
            Err(Halt::Budget)
        } else {
            Ok(())
        }
    }

    /// Value of a state reached by a turn or a replacement, with `depth` left.
    fn continuation(&mut self, state: &BattleState, depth: u8) -> Result<Score, Halt> {
        self.check_limits()?;
        self.counter.states_visited += 1;
        if let Some(result) = state.result() {
            self.counter.evals += 1;
            return Ok(Score::from_result(result));
        }
        if depth == 0 {
            self.counter.evals += 1;
            return Ok(self.evaluator.evaluate(state));
        }
        let key = state.state_key();
        if let Some(score) = self.tt.lookup(&key, state, depth) {
            self.counter.tt_hits += 1;
            return Ok(score);
        }
        let (score, _) = self.node(state, depth, None)?;
        self.tt.store(&key, state, depth, score);
        Ok(score)
    }

    /// Searches an undecided state. The node consumes one unit of `depth`.
    fn node(
        &mut self,
        state: &BattleState,
        depth: u8,
        root_scores: Option<&mut RootScores>,
    ) -> Result<(Score, Option<Action>), Halt> {
        debug_assert!(depth > 0);
        match Phase::of(state) {
            Phase::Replacement => self.replacement_phase(state, depth, root_scores),
            Phase::MoveSelection => self.move_selection_phase(state, depth, root_scores),
        }
    }

    /// `None` stands for keeping the current active Pokémon.
    fn replacement_choices(&self, state: &BattleState, side: Side) -> ActionList<Option<Action>> {
        let replacements = self.rules.legal_replacements(state, side);
        if replacements.is_empty() {
            action_list![None]
        } else {
            replacements.into_iter().map(Some).collect()
        }
    }

    fn replacement_phase(
        &mut self,
        state: &BattleState,
        depth: u8,
        mut root_scores: Option<&mut RootScores>,
    ) -> Result<(Score, Option<Action>), Halt> {
        let ai_choices = self.replacement_choices(state, Side::Ai);
        let foe_choices = self.replacement_choices(state, Side::Foe);
        let mut alpha = Score::MIN;
        let mut best = None;
        for &ai in &ai_choices {
            let mut beta = Score::MAX;
            for &foe in &foe_choices {
                let mut next = state.clone();
                if let Some(action) = ai {
                    self.rules.replace(&mut next, Side::Ai, action)?;
                }
                if let Some(action) = foe {
                    self.rules.replace(&mut next, Side::Foe, action)?;
                }
                let value = self.continuation(&next, depth - 1)?;
                beta = beta.min(value);
                if self.config.alpha_beta && beta <= alpha {
                    self.counter.beta_cutoffs += 1;
                    break;
                }
            }
            if let (Some(scores), Some(action)) = (root_scores.as_deref_mut(), ai) {
                scores.push((action, beta));
            }
            if beta > alpha {
                alpha = beta;
                best = ai;
            }
            if self.config.alpha_beta && alpha == Score::VICTORY {
                break;
            }
        }
        Ok((alpha, best))
    }

    fn move_selection_phase(
        &mut self,
        state: &BattleState,
        depth: u8,
        mut root_scores: Option<&mut RootScores>,
    ) -> Result<(Score, Option<Action>), Halt> {
        let mut actions = BySide::new(ActionList::new(), ActionList::new());
        for side in Side::VALUES {
            let legal = self.rules.legal_actions(state, side);
            if legal.is_empty() {
                return Err(SearchError::NoLegalActions(side).into());
            }
            actions[side] = self.move_scores.order(state, side, legal);
        }

        let mut alpha = Score::MIN;
        let mut best = None;
        for &ai in &actions.0 {
            let mut beta = Score::MAX;
            for &foe in &actions.1 {
                let value = self.chance_value(state, ai, foe, depth)?;
                self.move_scores.record(state, Side::Foe, foe, value);
                beta = beta.min(value);
                if self.config.alpha_beta && beta <= alpha {
                    self.counter.beta_cutoffs += 1;
                    break;
                }
            }
            self.move_scores.record(state, Side::Ai, ai, beta);
            if let Some(scores) = root_scores.as_deref_mut() {
                scores.push((ai, beta));
            }
            if beta > alpha {
                alpha = beta;
                best = Some(ai);
            }
            if self.config.alpha_beta && alpha == Score::VICTORY {
                break;
            }
        }
        Ok((alpha, best))
    }

    /// Probability-weighted value of one turn.
    fn chance_value(&mut self, state: &BattleState, ai: Action, foe: Action, depth: u8) -> Result<Score, Halt> {
        let expansion = expand(self.rules, state, ai, foe)?;
        let mut total: i128 = 0;
        for outcome in &expansion.outcomes {
            let value = match &outcome.continuation {
                Continuation::Decided(result) => {
                    self.counter.states_visited += 1;
                    self.counter.evals += 1;
                    Score::from_result(*result)
                }
                Continuation::Ongoing(next) => self.continuation(next, depth - 1)?,
            };
            total += outcome.weight as i128 * value.get_eval() as i128;
        }
        Ok(Score::from_repr((total / expansion.denominator as i128) as HV))
    }

    /// Searches the root at `depth`. Root scores come back in `decisions` order.
    fn root(
        &mut self,
        state: &BattleState,
        decisions: &ActionList<Action>,
        depth: u8,
    ) -> Result<(Action, Score, RootScores), Halt> {
        self.check_limits()?;
        self.counter.states_visited += 1;
        let mut explored = RootScores::new();
        let (score, best) = self.node(state, depth, Some(&mut explored))?;
        let action = best.ok_or(SearchError::NoLegalActions(Side::Ai))?;
        let root_scores = decisions
            .iter()
            .filter_map(|a| explored.iter().find(|(b, _)| a == b).copied())
            .collect();
        Ok((action, score, root_scores))
    }
}

/// The AI's options at the root.
fn root_decisions<R: BattleRules>(rules: &R, state: &BattleState) -> Result<ActionList<Action>, SearchError> {
    if state.is_decided() {
        return Err(SearchError::NoDecision);
    }
    let pending = state.pending_replacements();
    let decisions = if pending[Side::Ai] {
        rules.legal_replacements(state, Side::Ai)
    } else if pending[Side::Foe] {
        return Err(SearchError::NoDecision);
    } else {
        rules.legal_actions(state, Side::Ai)
    };
    if decisions.is_empty() {
        return Err(SearchError::NoLegalActions(Side::Ai));
    }
    Ok(decisions)
}

/// Selects the AI's action by iterative deepening from depth 1 to `depth_limit`.
///
/// The returned answer is the one of the last depth that completed within the
/// configured limits, or a random legal action if none did.
pub fn select_action<R: BattleRules, E: Evaluate>(
    rules: &R,
    evaluator: &E,
    tt: &mut TranspositionTable,
    config: &SearchConfig,
    state: &BattleState,
    depth_limit: u8,
) -> Result<SearchResult, SearchError> {
    let mut root = state.clone();
    root.disable_log();
    let decisions = root_decisions(rules, &root)?;

    let start_time = Instant::now();
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let fallback = decisions[rng.gen_range(0..decisions.len())];
    let mut result = SearchResult {
        action: fallback,
        score: evaluator.evaluate(&root),
        root_scores: Default::default(),
        counter: SearchCounter::ZERO,
        completed_depth: 0,
    };

    let mut move_scores = MoveScores::default();
    let mut counter = SearchCounter::ZERO;
    for depth in 1..=depth_limit {
        let mut searcher = Searcher {
            rules,
            evaluator,
            tt: &mut *tt,
            config,
            move_scores: &mut move_scores,
            start_time,
            previous_states: counter.states_visited,
            counter: SearchCounter::ZERO,
        };
        let res = searcher.root(&root, &decisions, depth);
        counter.add_in_place(&searcher.counter);
        match res {
            Ok((action, score, root_scores)) => {
                counter.last_depth = depth;
                debug!(
                    "depth {depth}: {action} score={score:?} {} scored_actions={}",
                    counter.summary(start_time.elapsed().as_nanos()),
                    move_scores.len()
                );
                trace!("depth {depth}: root scores {root_scores:?}");
                result.action = action;
                result.score = score;
                result.root_scores = root_scores;
                result.completed_depth = depth;
                if score.is_decisive() {
                    break;
                }
            }
            Err(Halt::Budget) => {
                warn!(
                    "depth {depth} aborted by search limits, keeping depth {} answer {}",
                    result.completed_depth, result.action
                );
                break;
            }
            Err(Halt::Error(e)) => return Err(e),
        }
    }
    result.counter = counter;
    Ok(result)
}

/// Expectiminimax search over the battle rules `R` with the evaluator `E`.
///
/// The transposition table is owned by the search and kept across calls: callers
/// may clear or replace it between searches.
#[derive(Debug)]
pub struct Expectiminimax<R: BattleRules = StandardRules, E: Evaluate = Evaluator> {
    pub rules: R,
    pub evaluator: E,
    pub tt: TranspositionTable,
    pub config: SearchConfig,
}

impl Default for Expectiminimax {
    fn default() -> Self {
        Self::new(StandardRules, Evaluator::default(), SearchConfig::default())
    }
}

impl<R: BattleRules, E: Evaluate> Expectiminimax<R, E> {
    pub fn new(rules: R, evaluator: E, config: SearchConfig) -> Self {
        let tt = TranspositionTable::new(config.tt_dimensions);
        Self::with_table(rules, evaluator, tt, config)
    }

    pub fn with_table(rules: R, evaluator: E, tt: TranspositionTable, config: SearchConfig) -> Self {
        Self {
            rules,
            evaluator,
            tt,
            config,
        }
    }

    /// Searches `state` up to `depth_limit`.
    pub fn select_action(&mut self, state: &BattleState, depth_limit: u8) -> Result<SearchResult, SearchError> {
        select_action(&self.rules, &self.evaluator, &mut self.tt, &self.config, state, depth_limit)
    }

    /// Searches `state` up to the configured depth.
    pub fn search(&mut self, state: &BattleState) -> Result<SearchResult, SearchError> {
        self.select_action(state, self.config.depth)
    }
}
