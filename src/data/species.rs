use enum_map::Enum;
use enumset::{enum_set, EnumSet};

use super::{abilities::Ability, types::Type};

/// Base stats of a species, in the order HP, Atk, Def, SpA, SpD, Spe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats(pub u8, pub u8, pub u8, pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy)]
pub struct SpeciesData {
    pub name: &'static str,
    pub types: EnumSet<Type>,
    pub base: BaseStats,
    pub ability: Ability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Enum)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Absol,
    Alakazam,
    Arcanine,
    Blissey,
    Breloom,
    Charizard,
    Dodrio,
    Dragonair,
    Dragonite,
    Garchomp,
    Gengar,
    Gyarados,
    Jolteon,
    Machamp,
    Metagross,
    Pikachu,
    Skarmory,
    Snorlax,
    Starmie,
    Tyranitar,
}

macro_rules! species {
    ($name: expr, $types: expr, ($($stat: expr),+), $ability: expr) => {
        SpeciesData {
            name: $name,
            types: $types,
            base: BaseStats($($stat),+),
            ability: $ability,
        }
    };
}

pub const ABSOL: SpeciesData = species!("Absol", enum_set!(Type::Dark), (65, 130, 60, 75, 60, 75), Ability::SuperLuck);
pub const ALAKAZAM: SpeciesData = species!(
    "Alakazam",
    enum_set!(Type::Psychic),
    (55, 50, 45, 135, 85, 120),
    Ability::Plain
);
pub const ARCANINE: SpeciesData = species!(
    "Arcanine",
    enum_set!(Type::Fire),
    (90, 110, 80, 100, 80, 95),
    Ability::Intimidate
);
pub const BLISSEY: SpeciesData = species!("Blissey", enum_set!(Type::Normal), (255, 10, 10, 75, 135, 55), Ability::Plain);
pub const BRELOOM: SpeciesData = species!(
    "Breloom",
    enum_set!(Type::Grass | Type::Fighting),
    (60, 130, 80, 60, 60, 70),
    Ability::Plain
);
pub const CHARIZARD: SpeciesData = species!(
    "Charizard",
    enum_set!(Type::Fire | Type::Flying),
    (78, 84, 78, 109, 85, 100),
    Ability::Plain
);
pub const DODRIO: SpeciesData = species!(
    "Dodrio",
    enum_set!(Type::Normal | Type::Flying),
    (60, 110, 70, 60, 60, 100),
    Ability::EarlyBird
);
pub const DRAGONAIR: SpeciesData = species!(
    "Dragonair",
    enum_set!(Type::Dragon),
    (61, 84, 65, 70, 70, 70),
    Ability::ShedSkin
);
pub const DRAGONITE: SpeciesData = species!(
    "Dragonite",
    enum_set!(Type::Dragon | Type::Flying),
    (91, 134, 95, 100, 100, 80),
    Ability::Plain
);
pub const GARCHOMP: SpeciesData = species!(
    "Garchomp",
    enum_set!(Type::Dragon | Type::Ground),
    (108, 130, 95, 80, 85, 102),
    Ability::Plain
);
pub const GENGAR: SpeciesData = species!(
    "Gengar",
    enum_set!(Type::Ghost | Type::Poison),
    (60, 65, 60, 130, 75, 110),
    Ability::Levitate
);
pub const GYARADOS: SpeciesData = species!(
    "Gyarados",
    enum_set!(Type::Water | Type::Flying),
    (95, 125, 79, 60, 100, 81),
    Ability::Intimidate
);
pub const JOLTEON: SpeciesData = species!(
    "Jolteon",
    enum_set!(Type::Electric),
    (65, 65, 60, 110, 95, 130),
    Ability::Plain
);
pub const MACHAMP: SpeciesData = species!(
    "Machamp",
    enum_set!(Type::Fighting),
    (90, 130, 80, 65, 85, 55),
    Ability::NoGuard
);
pub const METAGROSS: SpeciesData = species!(
    "Metagross",
    enum_set!(Type::Steel | Type::Psychic),
    (80, 135, 130, 95, 90, 70),
    Ability::Plain
);
pub const PIKACHU: SpeciesData = species!("Pikachu", enum_set!(Type::Electric), (35, 55, 30, 50, 40, 90), Ability::Plain);
pub const SKARMORY: SpeciesData = species!(
    "Skarmory",
    enum_set!(Type::Steel | Type::Flying),
    (65, 80, 140, 40, 70, 70),
    Ability::Pressure
);
pub const SNORLAX: SpeciesData = species!(
    "Snorlax",
    enum_set!(Type::Normal),
    (160, 110, 65, 65, 110, 30),
    Ability::Plain
);
pub const STARMIE: SpeciesData = species!(
    "Starmie",
    enum_set!(Type::Water | Type::Psychic),
    (60, 75, 85, 100, 85, 115),
    Ability::Plain
);
pub const TYRANITAR: SpeciesData = species!(
    "Tyranitar",
    enum_set!(Type::Rock | Type::Dark),
    (100, 134, 110, 95, 100, 61),
    Ability::SandStream
);

impl Species {
    pub const fn get_species(self) -> &'static SpeciesData {
        match self {
            Species::Absol => &ABSOL,
            Species::Alakazam => &ALAKAZAM,
            Species::Arcanine => &ARCANINE,
            Species::Blissey => &BLISSEY,
            Species::Breloom => &BRELOOM,
            Species::Charizard => &CHARIZARD,
            Species::Dodrio => &DODRIO,
            Species::Dragonair => &DRAGONAIR,
            Species::Dragonite => &DRAGONITE,
            Species::Garchomp => &GARCHOMP,
            Species::Gengar => &GENGAR,
            Species::Gyarados => &GYARADOS,
            Species::Jolteon => &JOLTEON,
            Species::Machamp => &MACHAMP,
            Species::Metagross => &METAGROSS,
            Species::Pikachu => &PIKACHU,
            Species::Skarmory => &SKARMORY,
            Species::Snorlax => &SNORLAX,
            Species::Starmie => &STARMIE,
            Species::Tyranitar => &TYRANITAR,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.get_species().name
    }
}
