use enum_map::EnumMap;
use enumset::{EnumSet, EnumSetType};
use smallvec::SmallVec;

use super::by_side::{BySide, Side};
use super::logging::EventLog;
use super::pokemon::{BoostStat, Pokemon, STAGE_MAX, STAGE_MIN};

/// A team holds at most six Pokémon.
pub const ROSTER_CAPACITY: usize = 6;

pub const SCREEN_TURNS: u8 = 5;
pub const WEATHER_TURNS: u8 = 5;
pub const MAX_SPIKES: u8 = 3;
pub const MAX_TOXIC_SPIKES: u8 = 2;

pub type Roster = SmallVec<[Pokemon; ROSTER_CAPACITY]>;

/// Flags that only last while the Pokémon stays active.
#[allow(clippy::derive_hash_xor_eq)]
#[derive(Debug, EnumSetType, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolatileFlag {
    /// Loses its action this turn.
    Flinched,
    LeechSeeded,
    /// Cannot switch out voluntarily.
    Trapped,
    /// Entered mid-turn and does not act until the next turn.
    SwitchedIn,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volatile {
    pub stages: EnumMap<BoostStat, i8>,
    pub toxic_counter: u8,
    pub flags: EnumSet<VolatileFlag>,
}

impl Volatile {
    /// Applies a stage change, returning the change that actually happened.
    pub fn boost(&mut self, stat: BoostStat, delta: i8) -> i8 {
        let before = self.stages[stat];
        let after = before.saturating_add(delta).clamp(STAGE_MIN, STAGE_MAX);
        self.stages[stat] = after;
        after - before
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hazard {
    Spikes,
    ToxicSpikes,
    StealthRock,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryHazards {
    pub spikes: u8,
    pub toxic_spikes: u8,
    pub stealth_rock: bool,
}

impl EntryHazards {
    /// Adds one layer, returning false if already at maximum.
    pub fn add(&mut self, hazard: Hazard) -> bool {
        match hazard {
            Hazard::Spikes if self.spikes < MAX_SPIKES => self.spikes += 1,
            Hazard::ToxicSpikes if self.toxic_spikes < MAX_TOXIC_SPIKES => self.toxic_spikes += 1,
            Hazard::StealthRock if !self.stealth_rock => self.stealth_rock = true,
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Screen {
    Reflect,
    LightScreen,
}

/// Turns remaining for each screen, 0 when not up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Screens {
    pub reflect: u8,
    pub light_screen: u8,
}

impl Screens {
    #[inline]
    pub fn get_mut(&mut self, screen: Screen) -> &mut u8 {
        match screen {
            Screen::Reflect => &mut self.reflect,
            Screen::LightScreen => &mut self.light_screen,
        }
    }

    pub fn tick(&mut self) {
        self.reflect = self.reflect.saturating_sub(1);
        self.light_screen = self.light_screen.saturating_sub(1);
    }
}

#[allow(clippy::derive_hash_xor_eq)]
#[derive(Debug, EnumSetType, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TeamFlag {
    /// The active Pokémon used U-turn or Baton Pass and must be replaced before the next turn.
    PendingSwitch,
    /// The pending switch passes stat stages and volatile flags to the replacement.
    BatonPassing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub roster: Roster,
    pub active: u8,
    pub volatile: Volatile,
    pub hazards: EntryHazards,
    pub screens: Screens,
    pub flags: EnumSet<TeamFlag>,
}

impl Team {
    pub fn new<T: Into<Roster>>(roster: T) -> Self {
        Self {
            roster: roster.into(),
            active: 0,
            volatile: Default::default(),
            hazards: Default::default(),
            screens: Default::default(),
            flags: Default::default(),
        }
    }

    /// Panics: If the roster is empty.
    #[inline]
    pub fn active_pokemon(&self) -> &Pokemon {
        &self.roster[self.active as usize]
    }

    /// Panics: If the roster is empty.
    #[inline]
    pub fn active_pokemon_mut(&mut self) -> &mut Pokemon {
        &mut self.roster[self.active as usize]
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.roster.iter().filter(|p| p.is_alive()).count()
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.roster.iter().all(|p| p.is_fainted())
    }

    /// Roster indices that may be switched in.
    pub fn replacement_candidates(&self) -> impl Iterator<Item = u8> + '_ {
        self.roster
            .iter()
            .enumerate()
            .filter(|(i, p)| *i != self.active as usize && p.is_alive())
            .map(|(i, _)| i as u8)
    }

    #[inline]
    pub fn has_replacement(&self) -> bool {
        self.replacement_candidates().next().is_some()
    }

    /// The active Pokémon fainted or left with a pending switch, and someone can come in.
    pub fn needs_replacement(&self) -> bool {
        (self.active_pokemon().is_fainted() || self.flags.contains(TeamFlag::PendingSwitch)) && self.has_replacement()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherKind {
    #[default]
    Clear,
    Rain,
    Sun,
    Sand,
    Hail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub weather: WeatherKind,
    pub weather_turns: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleResult {
    Won(Side),
    /// Both sides lost their last Pokémon in the same turn.
    Draw,
}

/// The full, perfect-information state of a battle between the AI and the foe.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub sides: BySide<Team>,
    pub field: Field,
    /// Not part of the position: ignored by equality and hashing.
    pub log: Box<EventLog>,
}

impl PartialEq for BattleState {
    fn eq(&self, other: &Self) -> bool {
        self.sides == other.sides && self.field == other.field
    }
}

impl Eq for BattleState {}

impl BattleState {
    pub fn new(ai: Team, foe: Team) -> Self {
        Self {
            sides: BySide::new(ai, foe),
            field: Default::default(),
            log: Box::new(EventLog::new(false)),
        }
    }

    #[inline]
    pub fn team(&self, side: Side) -> &Team {
        &self.sides[side]
    }

    #[inline]
    pub fn team_mut(&mut self, side: Side) -> &mut Team {
        &mut self.sides[side]
    }

    #[inline]
    pub fn active(&self, side: Side) -> &Pokemon {
        self.sides[side].active_pokemon()
    }

    #[inline]
    pub fn active_mut(&mut self, side: Side) -> &mut Pokemon {
        self.sides[side].active_pokemon_mut()
    }

    /// `Some` once at least one side has no Pokémon left.
    pub fn result(&self) -> Option<BattleResult> {
        match (self.sides.0.is_defeated(), self.sides.1.is_defeated()) {
            (false, false) => None,
            (true, true) => Some(BattleResult::Draw),
            (false, true) => Some(BattleResult::Won(Side::Ai)),
            (true, false) => Some(BattleResult::Won(Side::Foe)),
        }
    }

    #[inline]
    pub fn is_decided(&self) -> bool {
        self.result().is_some()
    }

    /// Sides that must bring in a replacement before the next turn.
    pub fn pending_replacements(&self) -> BySide<bool> {
        BySide::new(self.sides.0.needs_replacement(), self.sides.1.needs_replacement())
    }

    /// Drops all logged events and stops logging. Used for search working copies.
    pub fn disable_log(&mut self) {
        self.log = Box::new(EventLog::new(false));
    }
}
