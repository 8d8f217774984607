use crate::types::battle_state::{BattleState, EntryHazards, Field, Roster, Screens, Team, Volatile, WeatherKind};
use crate::types::battle_state::{ROSTER_CAPACITY, WEATHER_TURNS};
use crate::types::by_side::{BySide, Side};
use crate::types::logging::EventLog;
use crate::types::pokemon::Pokemon;

#[derive(Clone)]
pub struct BattleBuilder {
    pub rosters: BySide<Roster>,
    pub active: BySide<u8>,
    pub volatile: BySide<Volatile>,
    pub hazards: BySide<EntryHazards>,
    pub screens: BySide<Screens>,
    pub field: Field,
    pub enable_log: bool,
}

impl BattleBuilder {
    pub fn new<A: IntoIterator<Item = Pokemon>, B: IntoIterator<Item = Pokemon>>(ai: A, foe: B) -> Self {
        Self {
            rosters: BySide::new(ai.into_iter().collect(), foe.into_iter().collect()),
            active: Default::default(),
            volatile: Default::default(),
            hazards: Default::default(),
            screens: Default::default(),
            field: Default::default(),
            enable_log: false,
        }
    }

    /// A one-on-one battle.
    pub fn single(ai: Pokemon, foe: Pokemon) -> Self {
        Self::new([ai], [foe])
    }

    pub fn with_enable_log(self, enable_log: bool) -> Self {
        Self { enable_log, ..self }
    }

    pub fn with_active(mut self, side: Side, active: u8) -> Self {
        self.active[side] = active;
        self
    }

    pub fn with_volatile(mut self, side: Side, volatile: Volatile) -> Self {
        self.volatile[side] = volatile;
        self
    }

    pub fn with_hazards(mut self, side: Side, hazards: EntryHazards) -> Self {
        self.hazards[side] = hazards;
        self
    }

    pub fn with_screens(mut self, side: Side, screens: Screens) -> Self {
        self.screens[side] = screens;
        self
    }

    pub fn with_weather(self, weather: WeatherKind) -> Self {
        let weather_turns = if weather == WeatherKind::Clear { 0 } else { WEATHER_TURNS };
        Self {
            field: Field { weather, weather_turns },
            ..self
        }
    }

    /// Panics: If the rosters are invalid. See `try_build`.
    pub fn build(self) -> BattleState {
        self.try_build().expect("Failed to build BattleState.")
    }

    /// `None` if a roster is empty, holds more than six Pokémon, or the active index is out of range.
    pub fn try_build(self) -> Option<BattleState> {
        const RANGE: std::ops::RangeInclusive<usize> = 1..=ROSTER_CAPACITY;
        for side in Side::VALUES {
            let roster = &self.rosters[side];
            if !RANGE.contains(&roster.len()) || self.active[side] as usize >= roster.len() {
                return None;
            }
        }
        let Self {
            rosters,
            active,
            volatile,
            hazards,
            screens,
            field,
            enable_log,
        } = self;
        let make_team = |side: Side, roster: Roster| Team {
            roster,
            active: active[side],
            volatile: volatile[side],
            hazards: hazards[side],
            screens: screens[side],
            flags: Default::default(),
        };
        let (ai, foe): (Roster, Roster) = rosters.into();
        Some(BattleState {
            sides: BySide::new(make_team(Side::Ai, ai), make_team(Side::Foe, foe)),
            field,
            log: Box::new(EventLog::new(enable_log)),
        })
    }
}
