use crate::state_key::{RadixHash, StateKey};

use super::*;

#[test]
fn state_key_ignores_the_log() {
    let a = sample_battle();
    let mut b = a.clone();
    b.log.enabled = true;
    b.log.log(Event::Missed(Side::Ai));
    assert_eq!(a, b);
    assert_eq!(StateKey::of(&a), StateKey::of(&b));
}

#[test]
fn state_key_components_are_separate() {
    let a = sample_battle();
    let mut b = a.clone();
    b.field.weather = WeatherKind::Rain;
    b.field.weather_turns = 5;
    let (ka, kb) = (a.state_key(), b.state_key());
    assert_eq!(ka.ai, kb.ai);
    assert_eq!(ka.foe, kb.foe);
    assert_ne!(ka.field, kb.field);
    assert_ne!(ka.combined(), kb.combined());

    let mut c = a.clone();
    c.team_mut(Side::Foe).hazards.spikes = 1;
    let kc = c.state_key();
    assert_eq!(ka.ai, kc.ai);
    assert_ne!(ka.foe, kc.foe);
}

#[test]
fn single_pokemon_team_hash_is_exact() {
    let state = BattleBuilder::single(
        Pokemon::new(Species::Pikachu, &[MoveId::Thunderbolt]),
        Pokemon::new(Species::Snorlax, &[MoveId::BodySlam]),
    )
    .build();
    let h = state.team(Side::Ai).radix_hasher();
    assert!(h.is_exact());
    assert!((h.finish() as u128) < h.max_hash());
}

#[test]
fn max_hash_multiplies_feature_ranges() {
    let p = Pokemon::new(Species::Pikachu, &[MoveId::Thunderbolt]);
    let h = p.radix_hasher();
    // HP, status, one PP counter.
    let expected = (p.max_hp() as u128 + 1) * 10 * (MoveId::Thunderbolt.get_move().max_pp as u128 + 1);
    assert_eq!(expected, h.max_hash());
}

#[test]
fn bench_hp_changes_key_of_full_teams() {
    let team = || {
        (0..6).map(|_| {
            Pokemon::new(
                Species::Jolteon,
                &[MoveId::Thunderbolt, MoveId::ShadowBall, MoveId::ThunderWave, MoveId::Toxic],
            )
        })
    };
    let a = BattleBuilder::new(team(), team()).build();
    let mut b = a.clone();
    b.team_mut(Side::Ai).roster[1].hp = 1;
    let (ka, kb) = (a.state_key(), b.state_key());
    assert!(!ka.exact);
    assert!(!a.team(Side::Ai).radix_hasher().is_exact());
    assert_ne!(ka.ai, kb.ai);
    assert_eq!(ka.foe, kb.foe);

    // Roster order matters too.
    let mut c = a.clone();
    c.team_mut(Side::Foe).roster[5].hp = 1;
    let mut d = a.clone();
    d.team_mut(Side::Foe).roster[4].hp = 1;
    assert_ne!(c.state_key().foe, d.state_key().foe);
}
