use enum_map::Enum;

use crate::types::battle_state::{Hazard, Screen, WeatherKind};
use crate::types::pokemon::{BoostStat, StatusKind};

use super::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    /// Hit chance in percent before accuracy and evasion stages.
    Percent(u8),
    /// Bypasses the accuracy check entirely.
    CannotMiss,
}

/// Effect that happens every time the move connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    None,
    /// Inflicts a status on the target. Fails on immune or already statused targets.
    Status(StatusKind),
    UserBoosts(&'static [(BoostStat, i8)]),
    /// Restores half of the user's maximum HP.
    HealHalf,
    /// Forces the target out for a random healthy team member.
    Phaze,
    /// The user switches out after the turn.
    SwitchOut,
    /// The user switches out after the turn, passing its stat stages.
    BatonPass,
    Hazard(Hazard),
    Screen(Screen),
    Weather(WeatherKind),
    /// The target cannot switch out while it stays active.
    Trap,
    LeechSeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryEffect {
    Status(StatusKind),
    Flinch,
    TargetBoost(BoostStat, i8),
    UserBoost(BoostStat, i8),
}

/// A chance-based extra effect. `chance` is in percent and must be a multiple of 5
/// so that it is exact over the variant denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secondary {
    pub chance: u8,
    pub effect: SecondaryEffect,
}

#[derive(Debug, Clone, Copy)]
pub struct MoveData {
    pub name: &'static str,
    pub move_type: Type,
    pub category: MoveCategory,
    pub power: u16,
    pub accuracy: Accuracy,
    pub priority: i8,
    pub max_pp: u8,
    pub high_critical: bool,
    pub effect: MoveEffect,
    pub secondary: Option<Secondary>,
}

impl MoveData {
    pub const fn new() -> Self {
        Self {
            name: "",
            move_type: Type::Normal,
            category: MoveCategory::Status,
            power: 0,
            accuracy: Accuracy::CannotMiss,
            priority: 0,
            max_pp: 0,
            high_critical: false,
            effect: MoveEffect::None,
            secondary: None,
        }
    }

    #[inline]
    pub const fn is_damaging(&self) -> bool {
        !matches!(self.category, MoveCategory::Status)
    }
}

impl Default for MoveData {
    fn default() -> Self {
        Self::new()
    }
}

const fn attack(
    name: &'static str,
    move_type: Type,
    category: MoveCategory,
    power: u16,
    accuracy: u8,
    max_pp: u8,
) -> MoveData {
    MoveData {
        name,
        move_type,
        category,
        power,
        accuracy: Accuracy::Percent(accuracy),
        max_pp,
        ..MoveData::new()
    }
}

const fn status_move(name: &'static str, move_type: Type, accuracy: Accuracy, max_pp: u8, effect: MoveEffect) -> MoveData {
    MoveData {
        name,
        move_type,
        accuracy,
        max_pp,
        effect,
        ..MoveData::new()
    }
}

const fn secondary(chance: u8, effect: SecondaryEffect) -> Option<Secondary> {
    Some(Secondary { chance, effect })
}

use MoveCategory::{Physical, Special};

pub const THUNDERBOLT: MoveData = MoveData {
    secondary: secondary(10, SecondaryEffect::Status(StatusKind::Paralysis)),
    ..attack("Thunderbolt", Type::Electric, Special, 95, 100, 15)
};
pub const THUNDER: MoveData = MoveData {
    secondary: secondary(30, SecondaryEffect::Status(StatusKind::Paralysis)),
    ..attack("Thunder", Type::Electric, Special, 120, 70, 10)
};
pub const THUNDER_WAVE: MoveData = status_move(
    "Thunder Wave",
    Type::Electric,
    Accuracy::Percent(100),
    20,
    MoveEffect::Status(StatusKind::Paralysis),
);
pub const FLAMETHROWER: MoveData = MoveData {
    secondary: secondary(10, SecondaryEffect::Status(StatusKind::Burn)),
    ..attack("Flamethrower", Type::Fire, Special, 95, 100, 15)
};
pub const FIRE_BLAST: MoveData = MoveData {
    secondary: secondary(10, SecondaryEffect::Status(StatusKind::Burn)),
    ..attack("Fire Blast", Type::Fire, Special, 120, 85, 5)
};
pub const WILL_O_WISP: MoveData = status_move(
    "Will-O-Wisp",
    Type::Fire,
    Accuracy::Percent(75),
    15,
    MoveEffect::Status(StatusKind::Burn),
);
pub const SURF: MoveData = attack("Surf", Type::Water, Special, 95, 100, 15);
pub const HYDRO_PUMP: MoveData = attack("Hydro Pump", Type::Water, Special, 120, 80, 5);
pub const ICE_BEAM: MoveData = attack("Ice Beam", Type::Ice, Special, 95, 100, 10);
pub const PSYCHIC: MoveData = MoveData {
    secondary: secondary(10, SecondaryEffect::TargetBoost(BoostStat::SpD, -1)),
    ..attack("Psychic", Type::Psychic, Special, 90, 100, 10)
};
pub const SHADOW_BALL: MoveData = MoveData {
    secondary: secondary(20, SecondaryEffect::TargetBoost(BoostStat::SpD, -1)),
    ..attack("Shadow Ball", Type::Ghost, Special, 80, 100, 15)
};
pub const SLUDGE_BOMB: MoveData = MoveData {
    secondary: secondary(30, SecondaryEffect::Status(StatusKind::Poison)),
    ..attack("Sludge Bomb", Type::Poison, Special, 90, 100, 10)
};
pub const ENERGY_BALL: MoveData = MoveData {
    secondary: secondary(10, SecondaryEffect::TargetBoost(BoostStat::SpD, -1)),
    ..attack("Energy Ball", Type::Grass, Special, 80, 100, 10)
};
pub const DRAGON_PULSE: MoveData = attack("Dragon Pulse", Type::Dragon, Special, 90, 100, 10);
pub const EARTHQUAKE: MoveData = attack("Earthquake", Type::Ground, Physical, 100, 100, 10);
pub const STONE_EDGE: MoveData = MoveData {
    high_critical: true,
    ..attack("Stone Edge", Type::Rock, Physical, 100, 80, 5)
};
pub const ROCK_SLIDE: MoveData = MoveData {
    secondary: secondary(30, SecondaryEffect::Flinch),
    ..attack("Rock Slide", Type::Rock, Physical, 75, 90, 10)
};
pub const CROSS_CHOP: MoveData = MoveData {
    high_critical: true,
    ..attack("Cross Chop", Type::Fighting, Physical, 100, 80, 5)
};
pub const CLOSE_COMBAT: MoveData = MoveData {
    effect: MoveEffect::UserBoosts(&[(BoostStat::Def, -1), (BoostStat::SpD, -1)]),
    ..attack("Close Combat", Type::Fighting, Physical, 120, 100, 5)
};
pub const DYNAMIC_PUNCH: MoveData = attack("Dynamic Punch", Type::Fighting, Physical, 100, 50, 5);
pub const DRAGON_CLAW: MoveData = attack("Dragon Claw", Type::Dragon, Physical, 80, 100, 15);
pub const BODY_SLAM: MoveData = MoveData {
    secondary: secondary(30, SecondaryEffect::Status(StatusKind::Paralysis)),
    ..attack("Body Slam", Type::Normal, Physical, 85, 100, 15)
};
pub const EXTREME_SPEED: MoveData = MoveData {
    priority: 1,
    ..attack("Extreme Speed", Type::Normal, Physical, 80, 100, 5)
};
pub const QUICK_ATTACK: MoveData = MoveData {
    priority: 1,
    ..attack("Quick Attack", Type::Normal, Physical, 40, 100, 30)
};
pub const CRUNCH: MoveData = MoveData {
    secondary: secondary(20, SecondaryEffect::TargetBoost(BoostStat::Def, -1)),
    ..attack("Crunch", Type::Dark, Physical, 80, 100, 15)
};
pub const NIGHT_SLASH: MoveData = MoveData {
    high_critical: true,
    ..attack("Night Slash", Type::Dark, Physical, 70, 100, 15)
};
pub const LEAF_BLADE: MoveData = MoveData {
    high_critical: true,
    ..attack("Leaf Blade", Type::Grass, Physical, 90, 100, 15)
};
pub const METEOR_MASH: MoveData = MoveData {
    secondary: secondary(20, SecondaryEffect::UserBoost(BoostStat::Atk, 1)),
    ..attack("Meteor Mash", Type::Steel, Physical, 100, 85, 10)
};
pub const U_TURN: MoveData = MoveData {
    effect: MoveEffect::SwitchOut,
    ..attack("U-turn", Type::Bug, Physical, 70, 100, 20)
};
pub const SWORDS_DANCE: MoveData = status_move(
    "Swords Dance",
    Type::Normal,
    Accuracy::CannotMiss,
    30,
    MoveEffect::UserBoosts(&[(BoostStat::Atk, 2)]),
);
pub const DRAGON_DANCE: MoveData = status_move(
    "Dragon Dance",
    Type::Dragon,
    Accuracy::CannotMiss,
    20,
    MoveEffect::UserBoosts(&[(BoostStat::Atk, 1), (BoostStat::Spe, 1)]),
);
pub const CALM_MIND: MoveData = status_move(
    "Calm Mind",
    Type::Psychic,
    Accuracy::CannotMiss,
    20,
    MoveEffect::UserBoosts(&[(BoostStat::SpA, 1), (BoostStat::SpD, 1)]),
);
pub const RECOVER: MoveData = status_move("Recover", Type::Normal, Accuracy::CannotMiss, 10, MoveEffect::HealHalf);
pub const TOXIC: MoveData = status_move(
    "Toxic",
    Type::Poison,
    Accuracy::Percent(90),
    10,
    MoveEffect::Status(StatusKind::Toxic),
);
pub const SPORE: MoveData = status_move(
    "Spore",
    Type::Grass,
    Accuracy::Percent(100),
    15,
    MoveEffect::Status(StatusKind::Sleep),
);
pub const HYPNOSIS: MoveData = status_move(
    "Hypnosis",
    Type::Psychic,
    Accuracy::Percent(60),
    20,
    MoveEffect::Status(StatusKind::Sleep),
);
pub const ROAR: MoveData = MoveData {
    priority: -6,
    ..status_move("Roar", Type::Normal, Accuracy::CannotMiss, 20, MoveEffect::Phaze)
};
pub const WHIRLWIND: MoveData = MoveData {
    priority: -6,
    ..status_move("Whirlwind", Type::Normal, Accuracy::Percent(100), 20, MoveEffect::Phaze)
};
pub const BATON_PASS: MoveData = status_move("Baton Pass", Type::Normal, Accuracy::CannotMiss, 40, MoveEffect::BatonPass);
pub const STEALTH_ROCK: MoveData = status_move(
    "Stealth Rock",
    Type::Rock,
    Accuracy::CannotMiss,
    20,
    MoveEffect::Hazard(Hazard::StealthRock),
);
pub const SPIKES: MoveData = status_move(
    "Spikes",
    Type::Ground,
    Accuracy::CannotMiss,
    20,
    MoveEffect::Hazard(Hazard::Spikes),
);
pub const TOXIC_SPIKES: MoveData = status_move(
    "Toxic Spikes",
    Type::Poison,
    Accuracy::CannotMiss,
    20,
    MoveEffect::Hazard(Hazard::ToxicSpikes),
);
pub const REFLECT: MoveData = status_move(
    "Reflect",
    Type::Psychic,
    Accuracy::CannotMiss,
    20,
    MoveEffect::Screen(Screen::Reflect),
);
pub const LIGHT_SCREEN: MoveData = status_move(
    "Light Screen",
    Type::Psychic,
    Accuracy::CannotMiss,
    30,
    MoveEffect::Screen(Screen::LightScreen),
);
pub const RAIN_DANCE: MoveData = status_move(
    "Rain Dance",
    Type::Water,
    Accuracy::CannotMiss,
    5,
    MoveEffect::Weather(WeatherKind::Rain),
);
pub const SUNNY_DAY: MoveData = status_move(
    "Sunny Day",
    Type::Fire,
    Accuracy::CannotMiss,
    5,
    MoveEffect::Weather(WeatherKind::Sun),
);
pub const SANDSTORM: MoveData = status_move(
    "Sandstorm",
    Type::Rock,
    Accuracy::CannotMiss,
    10,
    MoveEffect::Weather(WeatherKind::Sand),
);
pub const HAIL: MoveData = status_move("Hail", Type::Ice, Accuracy::CannotMiss, 10, MoveEffect::Weather(WeatherKind::Hail));
pub const MEAN_LOOK: MoveData = status_move("Mean Look", Type::Normal, Accuracy::CannotMiss, 5, MoveEffect::Trap);
pub const LEECH_SEED: MoveData = status_move("Leech Seed", Type::Grass, Accuracy::Percent(90), 10, MoveEffect::LeechSeed);

/// Used when no move has PP left. Typeless, and the user loses a quarter of its maximum HP.
pub const STRUGGLE: MoveData = MoveData {
    accuracy: Accuracy::CannotMiss,
    max_pp: 1,
    ..attack("Struggle", Type::Normal, Physical, 50, 100, 1)
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Enum)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveId {
    Thunderbolt,
    Thunder,
    ThunderWave,
    Flamethrower,
    FireBlast,
    WillOWisp,
    Surf,
    HydroPump,
    IceBeam,
    Psychic,
    ShadowBall,
    SludgeBomb,
    EnergyBall,
    DragonPulse,
    Earthquake,
    StoneEdge,
    RockSlide,
    CrossChop,
    CloseCombat,
    DynamicPunch,
    DragonClaw,
    BodySlam,
    ExtremeSpeed,
    QuickAttack,
    Crunch,
    NightSlash,
    LeafBlade,
    MeteorMash,
    UTurn,
    SwordsDance,
    DragonDance,
    CalmMind,
    Recover,
    Toxic,
    Spore,
    Hypnosis,
    Roar,
    Whirlwind,
    BatonPass,
    StealthRock,
    Spikes,
    ToxicSpikes,
    Reflect,
    LightScreen,
    RainDance,
    SunnyDay,
    Sandstorm,
    Hail,
    MeanLook,
    LeechSeed,
}

impl MoveId {
    pub const fn get_move(self) -> &'static MoveData {
        match self {
            MoveId::Thunderbolt => &THUNDERBOLT,
            MoveId::Thunder => &THUNDER,
            MoveId::ThunderWave => &THUNDER_WAVE,
            MoveId::Flamethrower => &FLAMETHROWER,
            MoveId::FireBlast => &FIRE_BLAST,
            MoveId::WillOWisp => &WILL_O_WISP,
            MoveId::Surf => &SURF,
            MoveId::HydroPump => &HYDRO_PUMP,
            MoveId::IceBeam => &ICE_BEAM,
            MoveId::Psychic => &PSYCHIC,
            MoveId::ShadowBall => &SHADOW_BALL,
            MoveId::SludgeBomb => &SLUDGE_BOMB,
            MoveId::EnergyBall => &ENERGY_BALL,
            MoveId::DragonPulse => &DRAGON_PULSE,
            MoveId::Earthquake => &EARTHQUAKE,
            MoveId::StoneEdge => &STONE_EDGE,
            MoveId::RockSlide => &ROCK_SLIDE,
            MoveId::CrossChop => &CROSS_CHOP,
            MoveId::CloseCombat => &CLOSE_COMBAT,
            MoveId::DynamicPunch => &DYNAMIC_PUNCH,
            MoveId::DragonClaw => &DRAGON_CLAW,
            MoveId::BodySlam => &BODY_SLAM,
            MoveId::ExtremeSpeed => &EXTREME_SPEED,
            MoveId::QuickAttack => &QUICK_ATTACK,
            MoveId::Crunch => &CRUNCH,
            MoveId::NightSlash => &NIGHT_SLASH,
            MoveId::LeafBlade => &LEAF_BLADE,
            MoveId::MeteorMash => &METEOR_MASH,
            MoveId::UTurn => &U_TURN,
            MoveId::SwordsDance => &SWORDS_DANCE,
            MoveId::DragonDance => &DRAGON_DANCE,
            MoveId::CalmMind => &CALM_MIND,
            MoveId::Recover => &RECOVER,
            MoveId::Toxic => &TOXIC,
            MoveId::Spore => &SPORE,
            MoveId::Hypnosis => &HYPNOSIS,
            MoveId::Roar => &ROAR,
            MoveId::Whirlwind => &WHIRLWIND,
            MoveId::BatonPass => &BATON_PASS,
            MoveId::StealthRock => &STEALTH_ROCK,
            MoveId::Spikes => &SPIKES,
            MoveId::ToxicSpikes => &TOXIC_SPIKES,
            MoveId::Reflect => &REFLECT,
            MoveId::LightScreen => &LIGHT_SCREEN,
            MoveId::RainDance => &RAIN_DANCE,
            MoveId::SunnyDay => &SUNNY_DAY,
            MoveId::Sandstorm => &SANDSTORM,
            MoveId::Hail => &HAIL,
            MoveId::MeanLook => &MEAN_LOOK,
            MoveId::LeechSeed => &LEECH_SEED,
        }
    }
}
