use crate::prelude::*;

pub mod state_key;

pub mod prop_tests;


/// A representative 3v3 battle used across tests.
pub fn sample_battle() -> BattleState {
    BattleBuilder::new(
        [
            Pokemon::new(
                Species::Tyranitar,
                &[MoveId::StoneEdge, MoveId::Crunch, MoveId::StealthRock, MoveId::Earthquake],
            ),
            Pokemon::new(Species::Starmie, &[MoveId::Surf, MoveId::Thunderbolt, MoveId::Recover]),
            Pokemon::new(Species::Breloom, &[MoveId::Spore, MoveId::LeafBlade, MoveId::UTurn]),
        ],
        [
            Pokemon::new(
                Species::Dragonite,
                &[MoveId::DragonDance, MoveId::ExtremeSpeed, MoveId::Earthquake],
            ),
            Pokemon::new(Species::Skarmory, &[MoveId::Spikes, MoveId::Whirlwind]),
            Pokemon::new(Species::Gengar, &[MoveId::ShadowBall, MoveId::Hypnosis]),
        ],
    )
    .build()
}
