//! Heuristic evaluation of battle states from the AI's perspective.
use crate::data::types::{Type, EFFECTIVENESS_DENOMINATOR};
use crate::types::battle_state::{BattleState, Team, VolatileFlag};
use crate::types::by_side::Side;
use crate::types::pokemon::{BoostStat, Pokemon, Status};
use crate::types::score::{Score, HV};

/// The evaluator collaborator of the search.
pub trait Evaluate {
    /// The win/loss/draw sentinel exactly when the battle is decided, otherwise a
    /// heuristic score strictly between the sentinels.
    fn evaluate(&self, state: &BattleState) -> Score;
}

/// Every tunable term of the evaluator. Status, hazard and no-PP terms are penalties (negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalWeights {
    /// Per Pokémon still standing.
    pub alive: HV,
    /// Value of a full HP bar. Scaled by remaining HP fraction.
    pub hp: HV,
    pub burn: HV,
    pub paralysis: HV,
    pub poison: HV,
    pub toxic: HV,
    pub sleep: HV,
    /// Per stage of the active Pokémon.
    pub attack_stage: HV,
    pub defense_stage: HV,
    pub special_attack_stage: HV,
    pub special_defense_stage: HV,
    pub speed_stage: HV,
    pub accuracy_stage: HV,
    pub evasion_stage: HV,
    /// Per layer, per grounded Pokémon left in reserve.
    pub spikes: HV,
    pub toxic_spikes: HV,
    /// Scaled by the rock effectiveness against each Pokémon left in reserve.
    pub stealth_rock: HV,
    /// Per turn remaining.
    pub reflect: HV,
    pub light_screen: HV,
    pub leech_seeded: HV,
    pub trapped: HV,
    /// Per move slot out of PP.
    pub no_pp: HV,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            alive: 400,
            hp: 1000,
            burn: -80,
            paralysis: -100,
            poison: -60,
            toxic: -120,
            sleep: -150,
            attack_stage: 30,
            defense_stage: 20,
            special_attack_stage: 30,
            special_defense_stage: 20,
            speed_stage: 25,
            accuracy_stage: 10,
            evasion_stage: 15,
            spikes: -30,
            toxic_spikes: -40,
            stealth_rock: -50,
            reflect: 15,
            light_screen: 15,
            leech_seeded: -40,
            trapped: -40,
            no_pp: -20,
        }
    }
}

impl EvalWeights {
    #[inline]
    fn stage(&self, stat: BoostStat) -> HV {
        match stat {
            BoostStat::Atk => self.attack_stage,
            BoostStat::Def => self.defense_stage,
            BoostStat::SpA => self.special_attack_stage,
            BoostStat::SpD => self.special_defense_stage,
            BoostStat::Spe => self.speed_stage,
            BoostStat::Accuracy => self.accuracy_stage,
            BoostStat::Evasion => self.evasion_stage,
        }
    }

    #[inline]
    fn status(&self, status: Status) -> HV {
        match status {
            Status::Healthy => 0,
            Status::Burn => self.burn,
            Status::Paralysis => self.paralysis,
            Status::Poison => self.poison,
            Status::Toxic => self.toxic,
            Status::Sleep { .. } => self.sleep,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluator {
    pub weights: EvalWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    fn eval_pokemon(&self, p: &Pokemon) -> HV {
        let w = &self.weights;
        let no_pp = p.moves.iter().filter(|s| s.pp == 0).count() as HV;
        w.alive + w.hp * p.hp as HV / p.max_hp().max(1) as HV + w.status(p.status) + w.no_pp * no_pp
    }

    /// Expected entry hazard cost for a Pokémon that may switch in later.
    fn eval_hazards(&self, team: &Team, p: &Pokemon) -> HV {
        let w = &self.weights;
        let mut v = 0;
        if team.hazards.stealth_rock {
            v += w.stealth_rock * Type::Rock.effectiveness(p.types) as HV / EFFECTIVENESS_DENOMINATOR as HV;
        }
        if p.is_grounded() {
            v += w.spikes * team.hazards.spikes as HV + w.toxic_spikes * team.hazards.toxic_spikes as HV;
        }
        v
    }

    pub fn eval_team(&self, team: &Team) -> HV {
        let w = &self.weights;
        let mut v = 0;
        for (i, p) in team.roster.iter().enumerate() {
            if p.is_fainted() {
                continue;
            }
            v += self.eval_pokemon(p);
            if i != team.active as usize {
                v += self.eval_hazards(team, p);
            }
        }
        if team.active_pokemon().is_alive() {
            v += BoostStat::VALUES
                .iter()
                .map(|&s| w.stage(s) * team.volatile.stages[s] as HV)
                .sum::<HV>();
            if team.volatile.flags.contains(VolatileFlag::LeechSeeded) {
                v += w.leech_seeded;
            }
            if team.volatile.flags.contains(VolatileFlag::Trapped) {
                v += w.trapped;
            }
        }
        v += w.reflect * team.screens.reflect as HV + w.light_screen * team.screens.light_screen as HV;
        v
    }
}

impl Evaluate for Evaluator {
    fn evaluate(&self, state: &BattleState) -> Score {
        if let Some(result) = state.result() {
            return Score::from_result(result);
        }
        Score::heuristic(self.eval_team(state.team(Side::Ai)) - self.eval_team(state.team(Side::Foe)))
    }
}
