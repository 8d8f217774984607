use enum_map::Enum;
use enumset::EnumSet;
use smallvec::SmallVec;

use crate::data::{
    abilities::Ability,
    moves::MoveId,
    species::{BaseStats, Species},
    types::Type,
};

/// Stat stages are clamped to this range.
pub const STAGE_MIN: i8 = -6;
pub const STAGE_MAX: i8 = 6;

/// The sleep counter saturates here; at this point waking up is certain.
pub const SLEEP_MAX_TURNS: u8 = 4;

pub const DEFAULT_LEVEL: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Enum)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoostStat {
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
    Accuracy,
    Evasion,
}

impl BoostStat {
    pub const VALUES: [BoostStat; 7] = [
        BoostStat::Atk,
        BoostStat::Def,
        BoostStat::SpA,
        BoostStat::SpD,
        BoostStat::Spe,
        BoostStat::Accuracy,
        BoostStat::Evasion,
    ];

    /// Multiplier of a stage as `(numerator, denominator)`.
    #[inline]
    pub fn stage_multiplier(self, stage: i8) -> (u32, u32) {
        let base = match self {
            BoostStat::Accuracy | BoostStat::Evasion => 3,
            _ => 2,
        };
        let stage = stage.clamp(STAGE_MIN, STAGE_MAX);
        if stage >= 0 {
            (base + stage as u32, base)
        } else {
            (base, base + stage.unsigned_abs() as u32)
        }
    }
}

/// Major status of a Pokémon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Healthy,
    Burn,
    Paralysis,
    Poison,
    Toxic,
    Sleep {
        turns_slept: u8,
    },
}

/// Status that a move or hazard can inflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    Burn,
    Paralysis,
    Poison,
    Toxic,
    Sleep,
}

impl StatusKind {
    #[inline]
    pub fn to_status(self) -> Status {
        match self {
            StatusKind::Burn => Status::Burn,
            StatusKind::Paralysis => Status::Paralysis,
            StatusKind::Poison => Status::Poison,
            StatusKind::Toxic => Status::Toxic,
            StatusKind::Sleep => Status::Sleep { turns_slept: 0 },
        }
    }
}

impl Status {
    #[inline]
    pub fn is_healthy(&self) -> bool {
        matches!(self, Status::Healthy)
    }

    #[inline]
    pub fn is_asleep(&self) -> bool {
        matches!(self, Status::Sleep { .. })
    }

    pub fn kind(&self) -> Option<StatusKind> {
        match self {
            Status::Healthy => None,
            Status::Burn => Some(StatusKind::Burn),
            Status::Paralysis => Some(StatusKind::Paralysis),
            Status::Poison => Some(StatusKind::Poison),
            Status::Toxic => Some(StatusKind::Toxic),
            Status::Sleep { .. } => Some(StatusKind::Sleep),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl Stats {
    /// Stats at `level` with maximum IVs, 85 EVs in every stat and a neutral nature.
    pub fn compute(base: BaseStats, level: u8) -> Stats {
        const IV: u32 = 31;
        const EV_QUARTER: u32 = 21;
        let level = level as u32;
        let scaled = |b: u8| (2 * b as u32 + IV + EV_QUARTER) * level / 100;
        let other = |b: u8| (scaled(b) + 5) as u16;
        let BaseStats(hp, atk, def, spa, spd, spe) = base;
        Stats {
            hp: (scaled(hp) + level + 10) as u16,
            atk: other(atk),
            def: other(def),
            spa: other(spa),
            spd: other(spd),
            spe: other(spe),
        }
    }

    /// Unmodified value of a stat. Accuracy and evasion have no base value.
    pub fn get(&self, stat: BoostStat) -> u16 {
        match stat {
            BoostStat::Atk => self.atk,
            BoostStat::Def => self.def,
            BoostStat::SpA => self.spa,
            BoostStat::SpD => self.spd,
            BoostStat::Spe => self.spe,
            BoostStat::Accuracy | BoostStat::Evasion => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSlot {
    pub id: MoveId,
    pub pp: u8,
}

impl MoveSlot {
    #[inline]
    pub fn new(id: MoveId) -> Self {
        Self {
            id,
            pp: id.get_move().max_pp,
        }
    }
}

pub type MoveSlots = SmallVec<[MoveSlot; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pokemon {
    pub species: Species,
    pub types: EnumSet<Type>,
    pub ability: Ability,
    pub level: u8,
    pub stats: Stats,
    pub hp: u16,
    pub status: Status,
    pub moves: MoveSlots,
}

impl Pokemon {
    /// A level 100 Pokémon at full health with its species' default ability and full PP.
    pub fn new(species: Species, moves: &[MoveId]) -> Self {
        let data = species.get_species();
        let stats = Stats::compute(data.base, DEFAULT_LEVEL);
        Self {
            species,
            types: data.types,
            ability: data.ability,
            level: DEFAULT_LEVEL,
            stats,
            hp: stats.hp,
            status: Status::Healthy,
            moves: moves.iter().copied().map(MoveSlot::new).collect(),
        }
    }

    pub fn with_ability(self, ability: Ability) -> Self {
        Self { ability, ..self }
    }

    pub fn with_level(self, level: u8) -> Self {
        let stats = Stats::compute(self.species.get_species().base, level);
        Self {
            level,
            stats,
            hp: stats.hp,
            ..self
        }
    }

    pub fn with_hp(self, hp: u16) -> Self {
        Self {
            hp: hp.min(self.stats.hp),
            ..self
        }
    }

    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    pub fn with_pp(mut self, slot: usize, pp: u8) -> Self {
        if let Some(s) = self.moves.get_mut(slot) {
            s.pp = pp.min(s.id.get_move().max_pp);
        }
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.species.name()
    }

    #[inline]
    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    #[inline]
    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Affected by Spikes, Toxic Spikes and Ground-type moves.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        !self.types.contains(Type::Flying) && self.ability != Ability::Levitate
    }

    #[inline]
    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(t)
    }

    /// Lose HP, returning the amount actually lost.
    pub fn take_damage(&mut self, amount: u16) -> u16 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        dealt
    }

    /// Restore HP, returning the amount actually restored.
    pub fn restore(&mut self, amount: u16) -> u16 {
        let healed = amount.min(self.stats.hp - self.hp);
        self.hp += healed;
        healed
    }

    /// Whether `kind` may be inflicted, ignoring the current status.
    pub fn is_immune_to(&self, kind: StatusKind) -> bool {
        match kind {
            StatusKind::Burn => self.has_type(Type::Fire),
            StatusKind::Poison | StatusKind::Toxic => self.has_type(Type::Poison) || self.has_type(Type::Steel),
            StatusKind::Paralysis | StatusKind::Sleep => false,
        }
    }

    /// Fraction of the maximum HP, at least 1.
    #[inline]
    pub fn fraction_of_max_hp(&self, numerator: u32, denominator: u32) -> u16 {
        ((self.stats.hp as u32 * numerator / denominator).max(1)) as u16
    }
}
