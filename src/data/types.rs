use enumset::{EnumSet, EnumSetType};
use lazy_static::lazy_static;

#[allow(clippy::derive_hash_xor_eq)]
#[derive(Debug, Ord, PartialOrd, EnumSetType, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
}

pub const TYPE_COUNT: usize = 17;

/// Effectiveness of a single attacking type against a single defending type, in quarters.
pub const IMMUNE: u8 = 0;
pub const RESISTED: u8 = 2;
pub const NEUTRAL: u8 = 4;
pub const SUPER_EFFECTIVE: u8 = 8;

/// Combined effectiveness against a (possibly dual-typed) defender is a numerator over this value.
pub const EFFECTIVENESS_DENOMINATOR: u32 = 16;

impl Type {
    pub const VALUES: [Type; TYPE_COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
    ];

    pub fn get_name(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
        }
    }

    /// Effectiveness of `self` attacking a defender of `defender` types, as a numerator over
    /// `EFFECTIVENESS_DENOMINATOR`.
    pub fn effectiveness(self, defender: EnumSet<Type>) -> u32 {
        let mut eff = EFFECTIVENESS_DENOMINATOR;
        for t in defender {
            eff = eff * TYPE_CHART[self as usize][t as usize] as u32 / NEUTRAL as u32;
        }
        eff
    }
}

type Matchups = &'static [Type];

/// (attacker, super effective against, resisted by, no effect on)
const MATCHUPS: [(Type, Matchups, Matchups, Matchups); TYPE_COUNT] = {
    use Type::*;
    [
        (Normal, &[], &[Rock, Steel], &[Ghost]),
        (Fire, &[Grass, Ice, Bug, Steel], &[Fire, Water, Rock, Dragon], &[]),
        (Water, &[Fire, Ground, Rock], &[Water, Grass, Dragon], &[]),
        (Electric, &[Water, Flying], &[Electric, Grass, Dragon], &[Ground]),
        (
            Grass,
            &[Water, Ground, Rock],
            &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],
            &[],
        ),
        (Ice, &[Grass, Ground, Flying, Dragon], &[Fire, Water, Ice, Steel], &[]),
        (
            Fighting,
            &[Normal, Ice, Rock, Dark, Steel],
            &[Poison, Flying, Psychic, Bug],
            &[Ghost],
        ),
        (Poison, &[Grass], &[Poison, Ground, Rock, Ghost], &[Steel]),
        (Ground, &[Fire, Electric, Poison, Rock, Steel], &[Grass, Bug], &[Flying]),
        (Flying, &[Grass, Fighting, Bug], &[Electric, Rock, Steel], &[]),
        (Psychic, &[Fighting, Poison], &[Psychic, Steel], &[Dark]),
        (
            Bug,
            &[Grass, Psychic, Dark],
            &[Fire, Fighting, Poison, Flying, Ghost, Steel],
            &[],
        ),
        (Rock, &[Fire, Ice, Flying, Bug], &[Fighting, Ground, Steel], &[]),
        (Ghost, &[Psychic, Ghost], &[Dark, Steel], &[Normal]),
        (Dragon, &[Dragon], &[Steel], &[]),
        (Dark, &[Psychic, Ghost], &[Fighting, Dark, Steel], &[]),
        (Steel, &[Ice, Rock], &[Fire, Water, Electric, Steel], &[]),
    ]
};

lazy_static! {
    /// `TYPE_CHART[attacker][defender]` in quarters.
    pub static ref TYPE_CHART: [[u8; TYPE_COUNT]; TYPE_COUNT] = {
        let mut chart = [[NEUTRAL; TYPE_COUNT]; TYPE_COUNT];
        for (attacker, strong, weak, immune) in MATCHUPS {
            let row = &mut chart[attacker as usize];
            for t in strong {
                row[*t as usize] = SUPER_EFFECTIVE;
            }
            for t in weak {
                row[*t as usize] = RESISTED;
            }
            for t in immune {
                row[*t as usize] = IMMUNE;
            }
        }
        chart
    };
}

#[cfg(test)]
mod tests {
    use enumset::enum_set;

    use super::*;

    #[test]
    fn single_type_effectiveness() {
        assert_eq!(16, Type::Normal.effectiveness(enum_set!(Type::Normal)));
        assert_eq!(32, Type::Water.effectiveness(enum_set!(Type::Fire)));
        assert_eq!(8, Type::Fire.effectiveness(enum_set!(Type::Water)));
        assert_eq!(0, Type::Electric.effectiveness(enum_set!(Type::Ground)));
        assert_eq!(0, Type::Normal.effectiveness(enum_set!(Type::Ghost)));
    }

    #[test]
    fn dual_type_effectiveness_multiplies() {
        assert_eq!(64, Type::Ice.effectiveness(Type::Dragon | Type::Ground));
        assert_eq!(4, Type::Fire.effectiveness(Type::Water | Type::Dragon));
        assert_eq!(0, Type::Ground.effectiveness(Type::Steel | Type::Flying));
        assert_eq!(16, Type::Rock.effectiveness(Type::Fire | Type::Fighting));
    }
}
