//! Enumeration of the random outcomes of one turn.
//!
//! The axes a turn may branch on are declared up front by the rules, and the
//! denominator of the expansion is the product of their denominators (times 2 for a
//! speed tie). A path that never reaches a declared axis (the mover fainted, missed,
//! stayed asleep or switched) carries that axis' full denominator instead, so the
//! weights of all outcomes always add up to the denominator. Branching on an axis
//! that was not declared is reported as `RulesError::UndeclaredChance`.
use pokesim::enumset::EnumSet;
use pokesim::prelude::*;
use pokesim::smallvec::{smallvec, SmallVec};

pub type Branches<T> = SmallVec<[(u64, T); 6]>;

/// Where a resolved turn leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    Decided(BattleResult),
    Ongoing(BattleState),
}

impl Continuation {
    fn of(state: BattleState) -> Self {
        match state.result() {
            Some(result) => Continuation::Decided(result),
            None => Continuation::Ongoing(state),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChanceOutcome {
    /// Numerator over `ChanceExpansion::denominator`.
    pub weight: u64,
    /// A representative of the merged paths. Replaying it with `apply_turn` yields `continuation`.
    pub resolved: ResolvedOutcome,
    pub continuation: Continuation,
}

#[derive(Debug, Clone)]
pub struct ChanceExpansion {
    pub denominator: u64,
    pub outcomes: Vec<ChanceOutcome>,
}

impl ChanceExpansion {
    pub fn weight_sum(&self) -> u64 {
        self.outcomes.iter().map(|o| o.weight).sum()
    }
}

/// A partially resolved turn.
#[derive(Clone)]
struct Path {
    weight: u64,
    used: BySide<EnumSet<ChanceAxis>>,
    resolved: ResolvedOutcome,
    state: BattleState,
}

/// Two-way split of a binary axis. `None` means the event never branches and takes `default`.
fn split(axis: ChanceAxis, chance: Option<u64>, default: bool) -> Branches<bool> {
    let denominator = axis.denominator();
    let Some(chance) = chance else {
        return smallvec![(denominator, default)];
    };
    let chance = chance.min(denominator);
    [(chance, true), (denominator - chance, false)]
        .into_iter()
        .filter(|(w, _)| *w > 0)
        .collect()
}

/// Keeps `branches` and reports whether the axis genuinely branches. A single branch
/// does not contribute to the weight, and branching on an axis that was not declared
/// is a rules error.
fn settle<T>(
    side: Side,
    axis: ChanceAxis,
    branches: Branches<T>,
    declared: EnumSet<ChanceAxis>,
) -> Result<(Branches<T>, bool), RulesError> {
    if branches.len() <= 1 {
        Ok((branches, false))
    } else if declared.contains(axis) {
        Ok((branches, true))
    } else {
        Err(RulesError::UndeclaredChance(side, axis))
    }
}

type Rolls = SmallVec<[(u64, EnumSet<ChanceAxis>, ActionRoll); 8]>;

/// Weighted rolls for one side's action, each with the axes it used.
fn rolls(side: Side, profile: &RollProfile, declared: EnumSet<ChanceAxis>) -> Result<Rolls, RulesError> {
    let mut res = Rolls::new();
    let weigh = |weight: u64, used: EnumSet<ChanceAxis>, axis: ChanceAxis, is_used: bool| {
        if is_used {
            (weight, used | axis)
        } else {
            (1, used)
        }
    };

    let (awaken, awaken_used) = settle(
        side,
        ChanceAxis::Awaken,
        split(ChanceAxis::Awaken, profile.awaken, false),
        declared,
    )?;
    for (w_awaken, awake) in awaken {
        let (w0, used0) = weigh(w_awaken, EnumSet::empty(), ChanceAxis::Awaken, awaken_used);
        if profile.awaken.is_some() && !awake {
            res.push((w0, used0, ActionRoll { awaken: false, ..Default::default() }));
            continue;
        }
        let (hits, hit_used) = settle(
            side,
            ChanceAxis::Accuracy,
            split(ChanceAxis::Accuracy, profile.hit, true),
            declared,
        )?;
        for (w_hit, hit) in hits {
            let (w_hit, used1) = weigh(w_hit, used0, ChanceAxis::Accuracy, hit_used);
            let w1 = w0 * w_hit;
            if !hit {
                let roll = ActionRoll {
                    awaken: awake,
                    hit: false,
                    ..Default::default()
                };
                res.push((w1, used1, roll));
                continue;
            }
            let (crits, crit_used) = settle(
                side,
                ChanceAxis::Critical,
                split(ChanceAxis::Critical, profile.critical, false),
                declared,
            )?;
            for (w_crit, critical) in crits {
                let (w_crit, used2) = weigh(w_crit, used1, ChanceAxis::Critical, crit_used);
                let w2 = w1 * w_crit;
                let variants: Branches<Variant> = if profile.variants.is_empty() {
                    smallvec![(ChanceAxis::Variant.denominator(), Variant::Plain)]
                } else {
                    profile.variants.iter().copied().filter(|(w, _)| *w > 0).collect()
                };
                let (variants, variant_used) = settle(side, ChanceAxis::Variant, variants, declared)?;
                for (w_variant, variant) in variants {
                    let (w_variant, used3) = weigh(w_variant, used2, ChanceAxis::Variant, variant_used);
                    res.push((
                        w2 * w_variant,
                        used3,
                        ActionRoll {
                            awaken: awake,
                            hit,
                            critical,
                            variant,
                        },
                    ));
                }
            }
        }
    }
    Ok(res)
}

/// Plays `side`'s half of the turn on every path.
fn expand_side<R: BattleRules + ?Sized>(
    rules: &R,
    paths: Vec<Path>,
    side: Side,
    action: Action,
    declared: EnumSet<ChanceAxis>,
) -> Result<Vec<Path>, RulesError> {
    let mut res = Vec::with_capacity(paths.len());
    for path in paths {
        if path.state.is_decided() {
            res.push(path);
            continue;
        }
        let Some(profile) = rules.roll_profile(&path.state, side, action) else {
            res.push(path);
            continue;
        };
        for (weight, used, roll) in rolls(side, &profile, declared)? {
            let mut state = path.state.clone();
            rules.act(&mut state, side, action, &roll)?;
            let mut path_used = path.used;
            path_used[side] |= used;
            res.push(Path {
                weight: path.weight * weight,
                used: path_used,
                resolved: path.resolved.with_roll(side, roll),
                state,
            });
        }
    }
    Ok(res)
}

/// Shed Skin rolls and the end of the turn.
fn expand_end_of_turn<R: BattleRules + ?Sized>(
    rules: &R,
    paths: Vec<Path>,
    declared: &BySide<EnumSet<ChanceAxis>>,
) -> Result<Vec<Path>, RulesError> {
    let mut res = Vec::with_capacity(paths.len());
    for path in paths {
        if path.state.is_decided() {
            res.push(path);
            continue;
        }
        let mut rolled: SmallVec<[Path; 4]> = smallvec![path];
        for side in Side::VALUES {
            let chance = rolled
                .first()
                .and_then(|p| rules.shed_skin_chance(&p.state, side));
            let (branches, used) = settle(
                side,
                ChanceAxis::ShedSkin,
                split(ChanceAxis::ShedSkin, chance, false),
                declared[side],
            )?;
            rolled = rolled
                .into_iter()
                .flat_map(|p| {
                    branches.iter().map(move |&(w, cured)| {
                        let mut p = p.clone();
                        if used {
                            p.weight *= w;
                            p.used[side] |= ChanceAxis::ShedSkin;
                        }
                        p.resolved = p.resolved.with_shed_skin(side, cured);
                        p
                    })
                })
                .collect();
        }
        for mut p in rolled {
            rules.end_of_turn(&mut p.state, p.resolved.shed_skin);
            res.push(p);
        }
    }
    Ok(res)
}

/// Adds `outcome` to `group`, merging it with an outcome of the same continuation.
fn merge_into(group: &mut Vec<ChanceOutcome>, outcome: ChanceOutcome) {
    match group.iter_mut().find(|o| o.continuation == outcome.continuation) {
        Some(o) => o.weight += outcome.weight,
        None => group.push(outcome),
    }
}

/// Enumerates the weighted outcomes of the turn in which the AI plays `ai` and the foe plays `foe`.
pub fn expand<R: BattleRules + ?Sized>(
    rules: &R,
    state: &BattleState,
    ai: Action,
    foe: Action,
) -> Result<ChanceExpansion, RulesError> {
    let actions = BySide::new(ai, foe);
    let declared = BySide::new(
        rules.declared_axes(state, Side::Ai, ai),
        rules.declared_axes(state, Side::Foe, foe),
    );
    let orders: SmallVec<[Side; 2]> = match rules.turn_order(state, ai, foe) {
        TurnOrder::First(side) => smallvec![side],
        TurnOrder::SpeedTie => smallvec![Side::Ai, Side::Foe],
    };
    let order_denominator = if orders.len() > 1 { ChanceAxis::Order.denominator() } else { 1 };
    let denominator = order_denominator * ChanceAxis::total(declared.0) * ChanceAxis::total(declared.1);

    let mut outcomes = Vec::new();
    for first in orders {
        let start = Path {
            weight: 1,
            used: Default::default(),
            resolved: ResolvedOutcome::new(first),
            state: state.clone(),
        };
        let mut paths = vec![start];
        for side in [first, first.opposite()] {
            paths = expand_side(rules, paths, side, actions[side], declared[side])?;
        }
        let paths = expand_end_of_turn(rules, paths, &declared)?;

        let mut group = Vec::new();
        for path in paths {
            let padding: u64 = Side::VALUES
                .iter()
                .map(|&side| ChanceAxis::total(declared[side] - path.used[side]))
                .product();
            merge_into(
                &mut group,
                ChanceOutcome {
                    weight: path.weight * padding,
                    resolved: path.resolved,
                    continuation: Continuation::of(path.state),
                },
            );
        }
        outcomes.extend(group);
    }

    debug_assert_eq!(
        denominator,
        outcomes.iter().map(|o| o.weight).sum::<u64>(),
        "weights of {ai} vs {foe} do not add up"
    );
    Ok(ChanceExpansion { denominator, outcomes })
}
