/// State keys are mixed-radix fingerprints of a battle state.
///
/// Every feature of the state that matters for distinctiveness is pushed as a digit
/// `value` with a declared `range` (the number of values the feature can take):
///
/// ```text
/// hash := hash * range + value
/// ```
///
/// The arithmetic is done modulo the Mersenne prime `KEY_MODULUS`. As long as the
/// product of all ranges stays below it, the hash of a team is a bijection from its
/// features to `0..max_hash`. Otherwise the hash is reduced, and distinct states may
/// share a key; `RadixHasher::is_exact` reports which case applies and `StateKey`
/// carries it so that users can revalidate hits. Every range is below the prime, so
/// each digit still changes the reduced hash: no feature is ever shifted out.
///
/// Static data that is fixed for a battle (species, stats, move ids, abilities)
/// is not pushed.
///
/// A `StateKey` is made of three components (AI team, foe team, field) so that the
/// transposition table can index on each of them separately.
use enumset::EnumSet;

use crate::types::battle_state::{BattleState, EntryHazards, Field, Screens, Team, Volatile, WeatherKind};
use crate::types::pokemon::{BoostStat, Pokemon, Status, SLEEP_MAX_TURNS, STAGE_MAX, STAGE_MIN};

pub type HashValue = u64;

/// `2^61 - 1`.
pub const KEY_MODULUS: u64 = (1 << 61) - 1;

/// Toxic counter is saturated at this value.
pub const TOXIC_COUNTER_MAX: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixHasher {
    hash: HashValue,
    range: u128,
}

impl Default for RadixHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixHasher {
    #[inline]
    pub const fn new() -> Self {
        Self { hash: 0, range: 1 }
    }

    /// Pushes a digit. `value` must be below `range`.
    #[inline]
    pub fn push(&mut self, value: u64, range: u64) {
        debug_assert!(range > 0, "empty range");
        debug_assert!(value < range, "value {value} out of range {range}");
        debug_assert!(range < KEY_MODULUS, "range {range} too wide");
        let range = range.clamp(1, KEY_MODULUS - 1);
        let value = value.min(range - 1);
        let hash = self.hash as u128 * range as u128 + value as u128;
        self.hash = (hash % KEY_MODULUS as u128) as HashValue;
        self.range = self.range.saturating_mul(range as u128);
    }

    #[inline]
    pub fn push_bool(&mut self, value: bool) {
        self.push(value as u64, 2)
    }

    #[inline]
    pub fn push_flags<T: enumset::EnumSetType>(&mut self, flags: EnumSet<T>) {
        self.push(flags.as_u64(), 1 << EnumSet::<T>::bit_width())
    }

    #[inline]
    pub fn finish(&self) -> HashValue {
        self.hash
    }

    /// Number of distinct hashes the pushed ranges allow (saturating).
    #[inline]
    pub fn max_hash(&self) -> u128 {
        self.range
    }

    /// No reduction happened: distinct pushed features have distinct hashes.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.range <= KEY_MODULUS as u128
    }
}

pub trait RadixHash {
    fn radix_hash(&self, h: &mut RadixHasher);

    fn radix_hasher(&self) -> RadixHasher {
        let mut h = RadixHasher::new();
        self.radix_hash(&mut h);
        h
    }
}

const STATUS_RANGE: u64 = 5 + SLEEP_MAX_TURNS as u64 + 1;
const STAGE_RANGE: u64 = (STAGE_MAX - STAGE_MIN) as u64 + 1;

fn status_digit(status: Status) -> u64 {
    match status {
        Status::Healthy => 0,
        Status::Burn => 1,
        Status::Paralysis => 2,
        Status::Poison => 3,
        Status::Toxic => 4,
        Status::Sleep { turns_slept } => 5 + turns_slept.min(SLEEP_MAX_TURNS) as u64,
    }
}

impl RadixHash for Pokemon {
    fn radix_hash(&self, h: &mut RadixHasher) {
        h.push(self.hp as u64, self.max_hp() as u64 + 1);
        h.push(status_digit(self.status), STATUS_RANGE);
        for slot in &self.moves {
            h.push(slot.pp as u64, slot.id.get_move().max_pp as u64 + 1);
        }
    }
}

impl RadixHash for Volatile {
    fn radix_hash(&self, h: &mut RadixHasher) {
        for stat in BoostStat::VALUES {
            h.push((self.stages[stat] - STAGE_MIN) as u64, STAGE_RANGE);
        }
        h.push(self.toxic_counter.min(TOXIC_COUNTER_MAX) as u64, TOXIC_COUNTER_MAX as u64 + 1);
        h.push_flags(self.flags);
    }
}

impl RadixHash for EntryHazards {
    fn radix_hash(&self, h: &mut RadixHasher) {
        use crate::types::battle_state::{MAX_SPIKES, MAX_TOXIC_SPIKES};
        h.push(self.spikes as u64, MAX_SPIKES as u64 + 1);
        h.push(self.toxic_spikes as u64, MAX_TOXIC_SPIKES as u64 + 1);
        h.push_bool(self.stealth_rock);
    }
}

impl RadixHash for Screens {
    fn radix_hash(&self, h: &mut RadixHasher) {
        use crate::types::battle_state::SCREEN_TURNS;
        h.push(self.reflect as u64, SCREEN_TURNS as u64 + 1);
        h.push(self.light_screen as u64, SCREEN_TURNS as u64 + 1);
    }
}

impl RadixHash for Team {
    fn radix_hash(&self, h: &mut RadixHasher) {
        h.push(self.active as u64, self.roster.len().max(1) as u64);
        for pokemon in &self.roster {
            pokemon.radix_hash(h);
        }
        self.volatile.radix_hash(h);
        self.hazards.radix_hash(h);
        self.screens.radix_hash(h);
        h.push_flags(self.flags);
    }
}

fn weather_digit(weather: WeatherKind) -> u64 {
    match weather {
        WeatherKind::Clear => 0,
        WeatherKind::Rain => 1,
        WeatherKind::Sun => 2,
        WeatherKind::Sand => 3,
        WeatherKind::Hail => 4,
    }
}

impl RadixHash for Field {
    fn radix_hash(&self, h: &mut RadixHasher) {
        use crate::types::battle_state::WEATHER_TURNS;
        h.push(weather_digit(self.weather), 5);
        h.push(self.weather_turns as u64, WEATHER_TURNS as u64 + 1);
    }
}

/// Fingerprint of a `BattleState`. A pure function of the state's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateKey {
    pub ai: HashValue,
    pub foe: HashValue,
    pub field: HashValue,
    /// All three components are exact. Otherwise two distinct states may share this key.
    pub exact: bool,
}

impl StateKey {
    pub fn of(state: &BattleState) -> Self {
        let (ai, foe, field) = (
            state.sides.0.radix_hasher(),
            state.sides.1.radix_hasher(),
            state.field.radix_hasher(),
        );
        Self {
            ai: ai.finish(),
            foe: foe.finish(),
            field: field.finish(),
            exact: ai.is_exact() && foe.is_exact() && field.is_exact(),
        }
    }

    /// Mixes the three components into a single value.
    #[inline]
    pub fn combined(&self) -> HashValue {
        const K1: u64 = 0x9E37_79B9_7F4A_7C15;
        const K2: u64 = 0xC2B2_AE3D_27D4_EB4F;
        self.ai.wrapping_mul(K1) ^ self.foe.rotate_left(29).wrapping_mul(K2) ^ self.field
    }
}

impl BattleState {
    #[inline]
    pub fn state_key(&self) -> StateKey {
        StateKey::of(self)
    }
}
