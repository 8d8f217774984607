use proptest::prelude::*;
use proptest::sample::{select, subsequence, Index};

use crate::prelude::*;

const SPECIES: [Species; 12] = [
    Species::Pikachu,
    Species::Jolteon,
    Species::Gyarados,
    Species::Snorlax,
    Species::Garchomp,
    Species::Tyranitar,
    Species::Starmie,
    Species::Gengar,
    Species::Skarmory,
    Species::Breloom,
    Species::Dragonair,
    Species::Metagross,
];

const MOVES: [MoveId; 16] = [
    MoveId::Thunderbolt,
    MoveId::Flamethrower,
    MoveId::Surf,
    MoveId::IceBeam,
    MoveId::Earthquake,
    MoveId::StoneEdge,
    MoveId::BodySlam,
    MoveId::ShadowBall,
    MoveId::UTurn,
    MoveId::SwordsDance,
    MoveId::Recover,
    MoveId::Toxic,
    MoveId::Spore,
    MoveId::StealthRock,
    MoveId::Reflect,
    MoveId::LeechSeed,
];

prop_compose! {
    fn arb_pokemon()(
        species in select(SPECIES.to_vec()),
        moves in subsequence(MOVES.to_vec(), 1..=4),
        hp_percent in 1u16..=100,
    ) -> Pokemon {
        let p = Pokemon::new(species, &moves);
        let hp = (p.max_hp() * hp_percent / 100).max(1);
        p.with_hp(hp)
    }
}

prop_compose! {
    fn arb_full_pokemon()(
        species in select(SPECIES.to_vec()),
        moves in subsequence(MOVES.to_vec(), 4),
        hp_percent in 1u16..=100,
    ) -> Pokemon {
        let p = Pokemon::new(species, &moves);
        let hp = (p.max_hp() * hp_percent / 100).max(1);
        p.with_hp(hp)
    }
}

prop_compose! {
    fn arb_full_battle()(
        ai in prop::collection::vec(arb_full_pokemon(), 2..=6),
        foe in prop::collection::vec(arb_full_pokemon(), 2..=6),
    ) -> BattleState {
        BattleBuilder::new(ai, foe).build()
    }
}

prop_compose! {
    fn arb_battle()(
        ai in prop::collection::vec(arb_pokemon(), 1..=3),
        foe in prop::collection::vec(arb_pokemon(), 1..=3),
    ) -> BattleState {
        BattleBuilder::new(ai, foe).build()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn state_key_is_a_function_of_the_state(state in arb_battle()) {
        let copy = state.clone();
        prop_assert_eq!(state.state_key(), copy.state_key());
        prop_assert_eq!(state.state_key(), StateKey::of(&state));
    }

    #[test]
    fn foe_hp_only_changes_the_foe_key(state in arb_battle(), damage in 1u16..=50) {
        let mut hurt = state.clone();
        let foe = hurt.active_mut(Side::Foe);
        foe.hp = foe.hp.saturating_sub(damage).max(1);
        let hp_changed = foe.hp != state.active(Side::Foe).hp;
        let (a, b) = (state.state_key(), hurt.state_key());
        prop_assert_eq!(a.ai, b.ai);
        prop_assert_eq!(a.field, b.field);
        prop_assert_eq!(hp_changed, a.foe != b.foe);
    }

    #[test]
    fn every_roster_member_changes_its_team_key(
        state in arb_full_battle(),
        member in any::<Index>(),
        ai_side in any::<bool>(),
    ) {
        let side = if ai_side { Side::Ai } else { Side::Foe };
        let i = member.index(state.team(side).roster.len());
        let mut changed = state.clone();
        let p = &mut changed.team_mut(side).roster[i];
        p.hp = if p.hp == 1 { 2 } else { 1 };
        let (a, b) = (state.state_key(), changed.state_key());
        let (before, after) = match side {
            Side::Ai => ((a.ai, a.foe), (b.ai, b.foe)),
            Side::Foe => ((a.foe, a.ai), (b.foe, b.ai)),
        };
        prop_assert_ne!(before.0, after.0);
        prop_assert_eq!(before.1, after.1);
    }

    #[test]
    fn apply_turn_is_deterministic(state in arb_battle(), ai in any::<Index>(), foe in any::<Index>(), ai_first in any::<bool>()) {
        let ai_actions = legal_actions(&state, Side::Ai);
        let foe_actions = legal_actions(&state, Side::Foe);
        let ai = *ai.get(&ai_actions);
        let foe = *foe.get(&foe_actions);
        let first = if ai_first { Side::Ai } else { Side::Foe };
        let outcome = ResolvedOutcome::new(first)
            .with_roll(Side::Ai, ActionRoll::default())
            .with_roll(Side::Foe, ActionRoll::default());
        let before = state.clone();
        let a = apply_turn(&state, ai, foe, &outcome);
        let b = apply_turn(&state, ai, foe, &outcome);
        prop_assert_eq!(&before, &state);
        prop_assert_eq!(a, b);
    }
}
