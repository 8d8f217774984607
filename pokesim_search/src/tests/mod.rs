use pokesim::enumset::EnumSet;
use pokesim::prelude::*;

use crate::expectiminimax::*;




pub fn single(ai: Pokemon, foe: Pokemon) -> BattleState {
    BattleBuilder::single(ai, foe).build()
}

/// Both Jolteons tie on speed. Thunderbolt always knocks out the weakened foe,
/// whose Dynamic Punch hits half of the time and never knocks out.
pub fn lethal_speed_tie() -> BattleState {
    single(
        Pokemon::new(Species::Jolteon, &[MoveId::Thunderbolt, MoveId::DynamicPunch]),
        Pokemon::new(Species::Jolteon, &[MoveId::DynamicPunch]).with_hp(50),
    )
}

/// Garchomp outspeeds and knocks out Pikachu, which cannot touch it.
pub fn doomed() -> BattleState {
    single(
        Pokemon::new(Species::Pikachu, &[MoveId::Thunderbolt]).with_hp(1),
        Pokemon::new(Species::Garchomp, &[MoveId::Earthquake]),
    )
}

/// Small states with at most 3 actions per side.
pub fn small_states() -> Vec<BattleState> {
    vec![
        single(
            Pokemon::new(Species::Garchomp, &[MoveId::Earthquake, MoveId::SwordsDance]),
            Pokemon::new(Species::Metagross, &[MoveId::MeteorMash, MoveId::CalmMind]),
        ),
        single(
            Pokemon::new(Species::Starmie, &[MoveId::Surf, MoveId::Recover, MoveId::ThunderWave]),
            Pokemon::new(Species::Tyranitar, &[MoveId::Crunch, MoveId::StoneEdge]),
        ),
        single(
            Pokemon::new(Species::Jolteon, &[MoveId::Thunderbolt, MoveId::ShadowBall]),
            Pokemon::new(Species::Jolteon, &[MoveId::Thunderbolt, MoveId::ShadowBall]).with_hp(150),
        ),
        BattleBuilder::new(
            [
                Pokemon::new(Species::Gengar, &[MoveId::ShadowBall]),
                Pokemon::new(Species::Snorlax, &[MoveId::BodySlam]),
            ],
            [
                Pokemon::new(Species::Alakazam, &[MoveId::Psychic]),
                Pokemon::new(Species::Machamp, &[MoveId::CrossChop]),
            ],
        )
        .build(),
    ]
}

pub fn config(alpha_beta: bool) -> SearchConfig {
    SearchConfig {
        alpha_beta,
        ..Default::default()
    }
}

pub fn search(state: &BattleState, depth: u8, config: SearchConfig) -> SearchResult {
    Expectiminimax::new(StandardRules, Evaluator::default(), config)
        .select_action(state, depth)
        .unwrap()
}

#[derive(Debug, Clone, Copy)]
pub enum Fault {
    RejectMoves,
    NoFoeActions,
    NoDeclaredAxes,
}

/// Standard rules with one injected fault.
#[derive(Debug)]
pub struct FaultyRules(pub Fault);

impl BattleRules for FaultyRules {
    fn legal_actions(&self, state: &BattleState, side: Side) -> ActionList<Action> {
        match (self.0, side) {
            (Fault::NoFoeActions, Side::Foe) => ActionList::new(),
            _ => StandardRules.legal_actions(state, side),
        }
    }

    fn legal_replacements(&self, state: &BattleState, side: Side) -> ActionList<Action> {
        StandardRules.legal_replacements(state, side)
    }

    fn turn_order(&self, state: &BattleState, ai: Action, foe: Action) -> TurnOrder {
        StandardRules.turn_order(state, ai, foe)
    }

    fn declared_axes(&self, state: &BattleState, side: Side, action: Action) -> EnumSet<ChanceAxis> {
        match self.0 {
            Fault::NoDeclaredAxes => EnumSet::empty(),
            _ => StandardRules.declared_axes(state, side, action),
        }
    }

    fn roll_profile(&self, state: &BattleState, side: Side, action: Action) -> Option<RollProfile> {
        StandardRules.roll_profile(state, side, action)
    }

    fn shed_skin_chance(&self, state: &BattleState, side: Side) -> Option<u64> {
        StandardRules.shed_skin_chance(state, side)
    }

    fn act(&self, state: &mut BattleState, side: Side, action: Action, roll: &ActionRoll) -> Result<(), RulesError> {
        match self.0 {
            Fault::RejectMoves => Err(RulesError::NoPp(side, 0)),
            _ => StandardRules.act(state, side, action, roll),
        }
    }

    fn end_of_turn(&self, state: &mut BattleState, shed_skin: BySide<bool>) {
        StandardRules.end_of_turn(state, shed_skin)
    }

    fn replace(&self, state: &mut BattleState, side: Side, action: Action) -> Result<(), RulesError> {
        StandardRules.replace(state, side, action)
    }
}
