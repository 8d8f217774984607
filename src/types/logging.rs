use std::fmt::{Debug, Display};

use crate::data::{moves::MoveId, species::Species};

use super::battle_state::{Hazard, Screen, WeatherKind};
use super::by_side::Side;
use super::pokemon::{BoostStat, StatusKind};

/// Something observable that happened while a turn was applied.
/// The `Side` is the side the affected Pokémon belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    UseMove(Side, MoveId),
    Struggle(Side),
    SwitchIn(Side, Species),
    Missed(Side),
    MoveFailed(Side),
    CriticalHit(Side),
    Damage(Side, u16),
    Recoil(Side, u16),
    Heal(Side, u16),
    Fainted(Side, Species),
    StatusApplied(Side, StatusKind),
    StatusCured(Side),
    ShedSkin(Side),
    WokeUp(Side),
    FastAsleep(Side),
    Flinched(Side),
    StageChange(Side, BoostStat, i8),
    HazardSet(Side, Hazard),
    HazardDamage(Side, u16),
    ScreenSet(Side, Screen),
    WeatherStarted(WeatherKind),
    WeatherEnded(WeatherKind),
    WeatherDamage(Side, u16),
    ResidualDamage(Side, u16),
}

impl Event {
    pub fn indent_level(&self) -> u8 {
        match self {
            Event::UseMove(..) | Event::Struggle(..) | Event::SwitchIn(..) => 0,
            _ => 1,
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::UseMove(s, m) => write!(f, "{s} used {}", m.get_move().name),
            Event::Struggle(s) => write!(f, "{s} has no moves left and used Struggle"),
            Event::SwitchIn(s, p) => write!(f, "{s} sent out {}", p.name()),
            Event::Missed(s) => write!(f, "{s}'s attack missed"),
            Event::MoveFailed(s) => write!(f, "{s}'s move failed"),
            Event::CriticalHit(s) => write!(f, "{s} landed a critical hit"),
            Event::Damage(s, v) => write!(f, "{s} took {v} damage"),
            Event::Recoil(s, v) => write!(f, "{s} was hurt by recoil ({v})"),
            Event::Heal(s, v) => write!(f, "{s} restored {v} HP"),
            Event::Fainted(s, p) => write!(f, "{s} {} fainted", p.name()),
            Event::StatusApplied(s, k) => write!(f, "{s} is now afflicted by {k:?}"),
            Event::StatusCured(s) => write!(f, "{s} was cured of its status"),
            Event::ShedSkin(s) => write!(f, "{s} shed its skin"),
            Event::WokeUp(s) => write!(f, "{s} woke up"),
            Event::FastAsleep(s) => write!(f, "{s} is fast asleep"),
            Event::Flinched(s) => write!(f, "{s} flinched"),
            Event::StageChange(s, stat, d) => write!(f, "{s} {stat:?} {d:+}"),
            Event::HazardSet(s, h) => write!(f, "{h:?} laid on {s}'s side"),
            Event::HazardDamage(s, v) => write!(f, "{s} was hurt by entry hazards ({v})"),
            Event::ScreenSet(s, sc) => write!(f, "{s} put up {sc:?}"),
            Event::WeatherStarted(w) => write!(f, "Weather: {w:?}"),
            Event::WeatherEnded(w) => write!(f, "Weather ended: {w:?}"),
            Event::WeatherDamage(s, v) => write!(f, "{s} was buffeted by the weather ({v})"),
            Event::ResidualDamage(s, v) => write!(f, "{s} took {v} residual damage"),
        }
    }
}

#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    pub enabled: bool,
    pub events: Vec<Event>,
}

impl Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog").field("len", &self.events.len()).finish()
    }
}

impl EventLog {
    pub fn new(enabled: bool) -> EventLog {
        Self {
            enabled,
            events: vec![],
        }
    }

    #[inline]
    pub fn log(&mut self, event: Event) {
        if self.enabled {
            self.events.push(event)
        }
    }

    pub fn print(&self) {
        for event in &self.events {
            let prefix = " ".repeat(2 * Into::<usize>::into(event.indent_level()));
            println!("{prefix}{event}");
        }
    }

    pub fn filter<T, F: Fn(&Event) -> Option<T>>(&self, f: F) -> Vec<T> {
        self.events.iter().filter_map(f).collect()
    }
}
