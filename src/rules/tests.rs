use crate::prelude::*;
use crate::{action_list, vector};

use super::chance;
use super::damage;

fn hit() -> ActionRoll {
    ActionRoll::default()
}

fn miss() -> ActionRoll {
    ActionRoll {
        hit: false,
        ..ActionRoll::default()
    }
}

fn both_act(first: Side) -> ResolvedOutcome {
    ResolvedOutcome::new(first)
        .with_roll(Side::Ai, hit())
        .with_roll(Side::Foe, hit())
}

fn jolteon() -> Pokemon {
    Pokemon::new(Species::Jolteon, &[MoveId::Thunderbolt, MoveId::ShadowBall])
}

fn gyarados() -> Pokemon {
    Pokemon::new(Species::Gyarados, &[MoveId::Earthquake, MoveId::DragonDance])
}

fn two_on_two() -> BattleState {
    BattleBuilder::new(
        vector![jolteon(), Pokemon::new(Species::Snorlax, &[MoveId::BodySlam])],
        vector![gyarados(), Pokemon::new(Species::Charizard, &[MoveId::Flamethrower])],
    )
    .build()
}

#[test]
fn legal_actions_list_moves_then_switches() {
    let state = two_on_two();
    let expected: ActionList<Action> = action_list![Action::UseMove(0), Action::UseMove(1), Action::Switch(1)];
    assert_eq!(expected, legal_actions(&state, Side::Ai));
}

#[test]
fn legal_actions_fall_back_to_struggle() {
    let state = BattleBuilder::single(jolteon().with_pp(0, 0).with_pp(1, 0), gyarados()).build();
    let expected: ActionList<Action> = action_list![Action::Struggle];
    assert_eq!(expected, legal_actions(&state, Side::Ai));
}

#[test]
fn trapped_side_cannot_switch() {
    let mut state = two_on_two();
    state.team_mut(Side::Ai).volatile.flags |= VolatileFlag::Trapped;
    assert!(legal_actions(&state, Side::Ai).iter().all(|a| !a.is_switch()));
    let err = apply_turn(&state, Action::Switch(1), Action::UseMove(1), &both_act(Side::Ai));
    assert_eq!(Err(RulesError::Trapped(Side::Ai)), err);
}

#[test]
fn fainted_side_has_replacements_only() {
    let mut state = two_on_two();
    state.active_mut(Side::Foe).hp = 0;
    assert!(legal_actions(&state, Side::Foe).is_empty());
    let expected: ActionList<Action> = action_list![Action::Switch(1)];
    assert_eq!(expected, legal_replacements(&state, Side::Foe));
    assert!(legal_replacements(&state, Side::Ai).is_empty());
}

#[test]
fn invalid_actions_are_rejected() {
    let state = BattleBuilder::single(jolteon().with_pp(1, 0), gyarados()).build();
    let outcome = both_act(Side::Ai);
    assert_eq!(
        Err(RulesError::InvalidMoveSlot(Side::Ai, 3)),
        apply_turn(&state, Action::UseMove(3), Action::UseMove(1), &outcome)
    );
    assert_eq!(
        Err(RulesError::NoPp(Side::Ai, 1)),
        apply_turn(&state, Action::UseMove(1), Action::UseMove(1), &outcome)
    );
    assert_eq!(
        Err(RulesError::CannotStruggle(Side::Ai)),
        apply_turn(&state, Action::Struggle, Action::UseMove(1), &outcome)
    );
    assert_eq!(
        Err(RulesError::InvalidSwitchTarget(Side::Ai, 0)),
        apply_turn(&state, Action::Switch(0), Action::UseMove(1), &outcome)
    );
}

#[test]
fn missing_roll_is_rejected() {
    let state = BattleBuilder::single(jolteon(), gyarados()).build();
    let outcome = ResolvedOutcome::new(Side::Ai).with_roll(Side::Ai, hit());
    assert_eq!(
        Err(RulesError::MissingRoll(Side::Foe)),
        apply_turn(&state, Action::UseMove(1), Action::UseMove(1), &outcome)
    );
}

#[test]
fn turn_order_by_priority_then_speed() {
    let state = BattleBuilder::single(
        jolteon(),
        Pokemon::new(Species::Snorlax, &[MoveId::BodySlam, MoveId::QuickAttack]),
    )
    .build();
    assert_eq!(
        TurnOrder::First(Side::Ai),
        StandardRules.turn_order(&state, Action::UseMove(0), Action::UseMove(0))
    );
    assert_eq!(
        TurnOrder::First(Side::Foe),
        StandardRules.turn_order(&state, Action::UseMove(0), Action::UseMove(1))
    );
    let tie = BattleBuilder::single(jolteon(), jolteon()).build();
    assert_eq!(
        TurnOrder::SpeedTie,
        StandardRules.turn_order(&tie, Action::UseMove(0), Action::UseMove(1))
    );
}

#[test]
fn paralysis_quarters_speed() {
    let state = BattleBuilder::single(jolteon().with_status(Status::Paralysis), jolteon()).build();
    let full = super::order::effective_speed(&state, Side::Foe);
    assert_eq!(full / 4, super::order::effective_speed(&state, Side::Ai));
    assert_eq!(
        TurnOrder::First(Side::Foe),
        StandardRules.turn_order(&state, Action::UseMove(0), Action::UseMove(0))
    );
}

#[test]
fn switching_goes_before_moves() {
    let state = two_on_two();
    assert_eq!(
        TurnOrder::First(Side::Ai),
        StandardRules.turn_order(&state, Action::Switch(1), Action::UseMove(0))
    );
}

#[test]
fn damage_follows_type_chart() {
    let state = BattleBuilder::single(
        Pokemon::new(Species::Jolteon, &[MoveId::Thunderbolt]),
        Pokemon::new(Species::Gyarados, &[MoveId::Earthquake]),
    )
    .build();
    let tbolt = MoveId::Thunderbolt.get_move();
    let quad = damage::calculate(&state, Side::Ai, tbolt, false, false);
    assert_eq!(64, quad.effectiveness);
    let crit = damage::calculate(&state, Side::Ai, tbolt, true, false);
    assert!(crit.damage > quad.damage);
    let super_effective = damage::calculate(&state, Side::Foe, MoveId::Earthquake.get_move(), false, false);
    assert_eq!(32, super_effective.effectiveness);
    let grounded_target = BattleBuilder::single(
        Pokemon::new(Species::Gyarados, &[MoveId::Earthquake]),
        Pokemon::new(Species::Gengar, &[MoveId::ShadowBall]),
    )
    .build();
    let levitate = damage::calculate(&grounded_target, Side::Ai, MoveId::Earthquake.get_move(), false, false);
    assert!(levitate.is_immune());
    assert_eq!(0, levitate.damage);
}

#[test]
fn burn_and_screens_halve_damage() {
    let base = BattleBuilder::single(
        Pokemon::new(Species::Machamp, &[MoveId::CrossChop]),
        Pokemon::new(Species::Snorlax, &[MoveId::BodySlam]),
    )
    .build();
    let md = MoveId::CrossChop.get_move();
    let normal = damage::calculate(&base, Side::Ai, md, false, false).damage;
    let mut burned = base.clone();
    burned.active_mut(Side::Ai).status = Status::Burn;
    let halved = damage::calculate(&burned, Side::Ai, md, false, false).damage;
    assert!(halved < normal * 2 / 3);
    let mut screened = base.clone();
    screened.team_mut(Side::Foe).screens.reflect = 3;
    assert_eq!(halved, damage::calculate(&screened, Side::Ai, md, false, false).damage);
    let crit_through_screen = damage::calculate(&screened, Side::Ai, md, true, false).damage;
    assert_eq!(damage::calculate(&base, Side::Ai, md, true, false).damage, crit_through_screen);
}

#[test]
fn lethal_hit_ends_the_battle_before_the_foe_moves() {
    let state = BattleBuilder::single(jolteon(), gyarados()).build();
    let outcome = ResolvedOutcome::new(Side::Ai).with_roll(Side::Ai, hit());
    let next = apply_turn(&state, Action::UseMove(0), Action::UseMove(0), &outcome).unwrap();
    assert_eq!(Some(BattleResult::Won(Side::Ai)), next.result());
    assert_eq!(state.active(Side::Ai).hp, next.active(Side::Ai).hp);
}

#[test]
fn missed_move_uses_pp_and_deals_no_damage() {
    let state = BattleBuilder::single(jolteon(), gyarados()).build();
    let outcome = ResolvedOutcome::new(Side::Ai)
        .with_roll(Side::Ai, miss())
        .with_roll(Side::Foe, miss());
    let next = apply_turn(&state, Action::UseMove(0), Action::UseMove(0), &outcome).unwrap();
    assert_eq!(state.active(Side::Foe).hp, next.active(Side::Foe).hp);
    assert_eq!(state.active(Side::Ai).moves[0].pp - 1, next.active(Side::Ai).moves[0].pp);
}

#[test]
fn apply_turn_leaves_input_untouched() {
    let state = BattleBuilder::single(jolteon(), gyarados()).build();
    let snapshot = state.clone();
    let _ = apply_turn(&state, Action::UseMove(1), Action::UseMove(1), &both_act(Side::Ai)).unwrap();
    assert_eq!(snapshot, state);
}

#[test]
fn sleeping_pokemon_advances_counter_or_wakes() {
    let sleeper = Pokemon::new(Species::Snorlax, &[MoveId::BodySlam]).with_status(Status::Sleep { turns_slept: 1 });
    let state = BattleBuilder::single(sleeper, jolteon()).build();
    let stay = ResolvedOutcome::new(Side::Foe)
        .with_roll(Side::Foe, miss())
        .with_roll(Side::Ai, hit());
    let next = apply_turn(&state, Action::UseMove(0), Action::UseMove(0), &stay).unwrap();
    assert_eq!(Status::Sleep { turns_slept: 2 }, next.active(Side::Ai).status);
    assert_eq!(state.active(Side::Ai).moves[0].pp, next.active(Side::Ai).moves[0].pp);

    let wake = stay.with_roll(
        Side::Ai,
        ActionRoll {
            awaken: true,
            ..hit()
        },
    );
    let next = apply_turn(&state, Action::UseMove(0), Action::UseMove(0), &wake).unwrap();
    assert_eq!(Status::Healthy, next.active(Side::Ai).status);
    assert!(next.active(Side::Foe).hp < state.active(Side::Foe).hp);
}

#[test]
fn wake_chances_follow_sleep_counter() {
    let mut p = Pokemon::new(Species::Snorlax, &[MoveId::BodySlam]);
    let expected = [0, 3, 4, 6, 12];
    for (t, n) in expected.into_iter().enumerate() {
        p.status = Status::Sleep { turns_slept: t as u8 };
        assert_eq!(Some(n), chance::awaken_chance(&p));
    }
    let early_bird = [3, 6, 8, 12, 12];
    let mut p = p.with_ability(Ability::EarlyBird);
    for (t, n) in early_bird.into_iter().enumerate() {
        p.status = Status::Sleep { turns_slept: t as u8 };
        assert_eq!(Some(n), chance::awaken_chance(&p));
    }
    p.status = Status::Healthy;
    assert_eq!(None, chance::awaken_chance(&p));
}

#[test]
fn critical_chance_stacks_super_luck_and_high_crit_moves() {
    let absol = Pokemon::new(Species::Absol, &[MoveId::NightSlash, MoveId::Crunch]);
    assert_eq!(Some(4), chance::critical_chance(&absol, MoveId::NightSlash.get_move()));
    assert_eq!(Some(2), chance::critical_chance(&absol, MoveId::Crunch.get_move()));
    let plain = absol.with_ability(Ability::Plain);
    assert_eq!(Some(1), chance::critical_chance(&plain, MoveId::Crunch.get_move()));
    assert_eq!(None, chance::critical_chance(&plain, MoveId::SwordsDance.get_move()));
}

#[test]
fn no_guard_and_stages_change_accuracy() {
    let state = BattleBuilder::single(
        Pokemon::new(Species::Machamp, &[MoveId::DynamicPunch]),
        Pokemon::new(Species::Snorlax, &[MoveId::Hypnosis]),
    )
    .build();
    assert_eq!(None, chance::hit_chance(&state, Side::Ai, MoveId::DynamicPunch.get_move()));
    assert_eq!(None, chance::hit_chance(&state, Side::Foe, MoveId::Hypnosis.get_move()));
    let mut state = state;
    state.active_mut(Side::Ai).ability = Ability::Plain;
    assert_eq!(Some(50), chance::hit_chance(&state, Side::Ai, MoveId::DynamicPunch.get_move()));
    state.team_mut(Side::Foe).volatile.stages[BoostStat::Evasion] = 1;
    assert_eq!(Some(37), chance::hit_chance(&state, Side::Ai, MoveId::DynamicPunch.get_move()));
    assert_eq!(Some(60), chance::hit_chance(&state, Side::Foe, MoveId::Hypnosis.get_move()));
}

#[test]
fn variants_cover_the_whole_denominator() {
    let state = two_on_two();
    let tbolt = chance::variants(&state, Side::Ai, MoveId::Thunderbolt.get_move());
    assert_eq!(vec![(6, Variant::Secondary), (54, Variant::Plain)], tbolt.to_vec());
    let surf = chance::variants(&state, Side::Ai, MoveId::Surf.get_move());
    assert!(surf.is_empty());
    let roar = chance::variants(&state, Side::Ai, MoveId::Roar.get_move());
    assert_eq!(vec![(60, Variant::Phaze(1))], roar.to_vec());
    let mut statused = state.clone();
    statused.active_mut(Side::Foe).status = Status::Burn;
    assert!(chance::variants(&statused, Side::Ai, MoveId::Thunderbolt.get_move()).is_empty());
}

#[test]
fn u_turn_sets_a_pending_switch() {
    let state = BattleBuilder::new(
        vector![
            Pokemon::new(Species::Breloom, &[MoveId::UTurn]),
            Pokemon::new(Species::Snorlax, &[MoveId::BodySlam])
        ],
        vector![Pokemon::new(Species::Blissey, &[MoveId::Toxic])],
    )
    .build();
    let outcome = ResolvedOutcome::new(Side::Ai)
        .with_roll(Side::Ai, hit())
        .with_roll(Side::Foe, miss());
    let next = apply_turn(&state, Action::UseMove(0), Action::UseMove(0), &outcome).unwrap();
    assert!(next.team(Side::Ai).flags.contains(TeamFlag::PendingSwitch));
    let expected: ActionList<Action> = action_list![Action::Switch(1)];
    assert_eq!(expected, legal_replacements(&next, Side::Ai));
    let mut replaced = next.clone();
    StandardRules.replace(&mut replaced, Side::Ai, Action::Switch(1)).unwrap();
    assert_eq!(1, replaced.team(Side::Ai).active);
    assert!(replaced.team(Side::Ai).flags.is_empty());
}

#[test]
fn baton_pass_keeps_stat_stages() {
    let state = BattleBuilder::new(
        vector![
            Pokemon::new(Species::Jolteon, &[MoveId::BatonPass]),
            Pokemon::new(Species::Snorlax, &[MoveId::BodySlam])
        ],
        vector![Pokemon::new(Species::Blissey, &[MoveId::Toxic])],
    )
    .build();
    let mut state = state;
    state.team_mut(Side::Ai).volatile.stages[BoostStat::SpA] = 2;
    let outcome = ResolvedOutcome::new(Side::Ai)
        .with_roll(Side::Ai, hit())
        .with_roll(Side::Foe, miss());
    let mut next = apply_turn(&state, Action::UseMove(0), Action::UseMove(0), &outcome).unwrap();
    assert!(next.team(Side::Ai).flags.contains(TeamFlag::BatonPassing));
    StandardRules.replace(&mut next, Side::Ai, Action::Switch(1)).unwrap();
    assert_eq!(2, next.team(Side::Ai).volatile.stages[BoostStat::SpA]);
}

#[test]
fn phazing_drags_out_the_rolled_member() {
    let state = BattleBuilder::new(
        vector![Pokemon::new(Species::Skarmory, &[MoveId::Whirlwind])],
        vector![
            Pokemon::new(Species::Snorlax, &[MoveId::BodySlam]),
            Pokemon::new(Species::Charizard, &[MoveId::Flamethrower]),
            Pokemon::new(Species::Gengar, &[MoveId::ShadowBall])
        ],
    )
    .with_hazards(
        Side::Foe,
        EntryHazards {
            stealth_rock: true,
            ..Default::default()
        },
    )
    .build();
    let outcome = ResolvedOutcome::new(Side::Foe)
        .with_roll(Side::Foe, miss())
        .with_roll(
            Side::Ai,
            ActionRoll {
                variant: Variant::Phaze(1),
                ..hit()
            },
        );
    let next = apply_turn(&state, Action::UseMove(0), Action::UseMove(0), &outcome).unwrap();
    let team = next.team(Side::Foe);
    assert_eq!(1, team.active);
    let charizard = team.active_pokemon();
    assert_eq!(charizard.max_hp() / 2, charizard.max_hp() - charizard.hp);
    assert!(!team.volatile.flags.contains(VolatileFlag::SwitchedIn));
}

#[test]
fn phazed_in_pokemon_does_not_act() {
    let state = BattleBuilder::new(
        vector![Pokemon::new(Species::Tyranitar, &[MoveId::Roar])],
        vector![
            Pokemon::new(Species::Snorlax, &[MoveId::BodySlam]),
            Pokemon::new(Species::Jolteon, &[MoveId::Thunderbolt])
        ],
    )
    .build();
    let mut mid_turn = state.clone();
    let roll = ActionRoll {
        variant: Variant::Phaze(1),
        ..hit()
    };
    StandardRules
        .act(&mut mid_turn, Side::Ai, Action::UseMove(0), &roll)
        .unwrap();
    assert!(mid_turn.team(Side::Foe).volatile.flags.contains(VolatileFlag::SwitchedIn));
    assert_eq!(None, StandardRules.roll_profile(&mid_turn, Side::Foe, Action::UseMove(0)));
}

#[test]
fn entry_hazards_and_toxic_spikes_on_switch_in() {
    let state = BattleBuilder::new(
        vector![
            Pokemon::new(Species::Snorlax, &[MoveId::BodySlam]),
            Pokemon::new(Species::Machamp, &[MoveId::CrossChop])
        ],
        vector![Pokemon::new(Species::Blissey, &[MoveId::Toxic])],
    )
    .with_hazards(
        Side::Ai,
        EntryHazards {
            spikes: 1,
            toxic_spikes: 2,
            stealth_rock: false,
        },
    )
    .build();
    let outcome = ResolvedOutcome::new(Side::Ai)
        .with_roll(Side::Ai, hit())
        .with_roll(Side::Foe, miss());
    let next = apply_turn(&state, Action::Switch(1), Action::UseMove(0), &outcome).unwrap();
    let machamp = next.active(Side::Ai);
    assert_eq!(Status::Toxic, machamp.status);
    // Spikes (1/8) and the first toxic tick (1/16).
    let expected = machamp.max_hp() / 8 + machamp.max_hp() / 16;
    assert_eq!(expected, machamp.max_hp() - machamp.hp);
}

#[test]
fn intimidate_lowers_opposing_attack() {
    let state = BattleBuilder::new(
        vector![
            Pokemon::new(Species::Snorlax, &[MoveId::BodySlam]),
            Pokemon::new(Species::Gyarados, &[MoveId::Earthquake])
        ],
        vector![Pokemon::new(Species::Machamp, &[MoveId::CrossChop])],
    )
    .build();
    let outcome = ResolvedOutcome::new(Side::Ai)
        .with_roll(Side::Ai, hit())
        .with_roll(Side::Foe, miss());
    let next = apply_turn(&state, Action::Switch(1), Action::UseMove(0), &outcome).unwrap();
    assert_eq!(-1, next.team(Side::Foe).volatile.stages[BoostStat::Atk]);
}

#[test]
fn end_of_turn_residuals() {
    let state = BattleBuilder::single(
        Pokemon::new(Species::Snorlax, &[MoveId::SwordsDance]).with_status(Status::Burn),
        Pokemon::new(Species::Blissey, &[MoveId::Reflect]).with_status(Status::Toxic),
    )
    .with_weather(WeatherKind::Sand)
    .build();
    let outcome = both_act(Side::Ai);
    let next = apply_turn(&state, Action::UseMove(0), Action::UseMove(0), &outcome).unwrap();
    let snorlax = next.active(Side::Ai);
    assert_eq!(snorlax.max_hp() / 16 + snorlax.max_hp() / 8, snorlax.max_hp() - snorlax.hp);
    let blissey = next.active(Side::Foe);
    assert_eq!(blissey.max_hp() / 16 + blissey.max_hp() / 16, blissey.max_hp() - blissey.hp);
    assert_eq!(1, next.team(Side::Foe).volatile.toxic_counter);
    assert_eq!(4, next.team(Side::Foe).screens.reflect);
    assert_eq!(4, next.field.weather_turns);
}

#[test]
fn shed_skin_cures_only_when_rolled() {
    let state = BattleBuilder::single(
        Pokemon::new(Species::Dragonair, &[MoveId::DragonDance]).with_status(Status::Paralysis),
        Pokemon::new(Species::Blissey, &[MoveId::Recover]),
    )
    .build();
    assert_eq!(Some(3), StandardRules.shed_skin_chance(&state, Side::Ai));
    assert_eq!(None, StandardRules.shed_skin_chance(&state, Side::Foe));
    let kept = apply_turn(&state, Action::UseMove(0), Action::UseMove(0), &both_act(Side::Foe)).unwrap();
    assert_eq!(Status::Paralysis, kept.active(Side::Ai).status);
    let cured = apply_turn(
        &state,
        Action::UseMove(0),
        Action::UseMove(0),
        &both_act(Side::Foe).with_shed_skin(Side::Ai, true),
    )
    .unwrap();
    assert_eq!(Status::Healthy, cured.active(Side::Ai).status);
}

#[test]
fn struggle_recoil_can_end_in_a_draw() {
    let state = BattleBuilder::single(
        Pokemon::new(Species::Snorlax, &[MoveId::BodySlam]).with_pp(0, 0).with_hp(1),
        Pokemon::new(Species::Pikachu, &[MoveId::Thunderbolt]).with_hp(1),
    )
    .build();
    let outcome = ResolvedOutcome::new(Side::Foe)
        .with_roll(Side::Foe, miss())
        .with_roll(Side::Ai, hit());
    let next = apply_turn(&state, Action::Struggle, Action::UseMove(0), &outcome).unwrap();
    assert_eq!(Some(BattleResult::Draw), next.result());
}

#[test]
fn declared_axes_cover_the_action() {
    let state = two_on_two();
    let axes = StandardRules.declared_axes(&state, Side::Ai, Action::UseMove(0));
    assert_eq!(ChanceAxis::Accuracy | ChanceAxis::Critical | ChanceAxis::Variant, axes);
    assert!(StandardRules.declared_axes(&state, Side::Ai, Action::Switch(1)).is_empty());
    let dd = StandardRules.declared_axes(&state, Side::Foe, Action::UseMove(1));
    assert!(dd.is_empty());
}

#[test]
fn event_log_records_when_enabled() {
    let state = BattleBuilder::single(jolteon(), gyarados()).with_enable_log(true).build();
    let outcome = ResolvedOutcome::new(Side::Ai).with_roll(
        Side::Ai,
        ActionRoll {
            critical: true,
            ..hit()
        },
    );
    let next = apply_turn(&state, Action::UseMove(0), Action::UseMove(0), &outcome).unwrap();
    let events = next.log.filter(|e| Some(*e));
    assert_eq!(Event::UseMove(Side::Ai, MoveId::Thunderbolt), events[0]);
    assert!(events.contains(&Event::CriticalHit(Side::Ai)));
    assert!(events.contains(&Event::Fainted(Side::Foe, Species::Gyarados)));
}
