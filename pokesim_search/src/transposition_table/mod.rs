use pokesim::prelude::{BattleState, BySide, Field, HashValue, Score, StateKey, Team};

pub const DEFAULT_DIMENSIONS: (usize, usize, usize) = (256, 256, 16);

/// The low digits of a radix key are mostly constant (flags, hazards, screens),
/// so key components are mixed before they are reduced to a slot index.
#[inline]
fn spread(h: HashValue) -> HashValue {
    h.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 24
}

/// The parts of a state that make up the position.
type Position = (BySide<Team>, Field);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TTEntry {
    pub key: StateKey,
    pub depth: u8,
    pub score: Score,
    /// Kept only for inexact keys, to revalidate hits.
    position: Option<Box<Position>>,
}

impl TTEntry {
    #[inline]
    fn matches(&self, key: &StateKey, state: &BattleState) -> bool {
        self.key == *key
            && self
                .position
                .as_deref()
                .map_or(true, |(sides, field)| *sides == state.sides && *field == state.field)
    }
}

/// A fixed-size transposition table.
/// Features:
///  - Three-dimensional slot array indexed by the AI, foe and field components of the key
///  - Full key comparison on lookup, plus a position comparison for inexact keys
///  - Last-write-wins replacement
///
/// A table with any zero dimension is disabled: lookups miss and stores are dropped.
pub struct TranspositionTable {
    dimensions: (usize, usize, usize),
    slots: Vec<Option<TTEntry>>,
}

impl std::fmt::Debug for TranspositionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("dimensions", &self.dimensions)
            .field("occupied", &self.get_occupied_count())
            .finish()
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl TranspositionTable {
    pub fn new(dimensions: (usize, usize, usize)) -> Self {
        let (n1, n2, n3) = dimensions;
        let number_of_slots = n1.saturating_mul(n2).saturating_mul(n3);
        Self {
            dimensions,
            slots: vec![None; number_of_slots],
        }
    }

    /// A table that never stores anything.
    pub fn disabled() -> Self {
        Self::new((0, 0, 0))
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.slots.is_empty()
    }

    pub fn get_dimensions(&self) -> (usize, usize, usize) {
        self.dimensions
    }

    pub fn get_max_entries(&self) -> usize {
        self.slots.len()
    }

    pub fn get_occupied_count(&self) -> usize {
        self.slots.iter().filter(|x| x.is_some()).count()
    }

    pub fn get_occupancy(&self) -> f64 {
        if self.slots.is_empty() {
            return 0.0;
        }
        (self.get_occupied_count() as f64) / (self.slots.len() as f64)
    }

    #[inline]
    fn index(&self, key: &StateKey) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }
        let (n1, n2, n3) = self.dimensions;
        let component = |h: HashValue, n: usize| (spread(h) % n as HashValue) as usize;
        let (i, j, k) = (component(key.ai, n1), component(key.foe, n2), component(key.field, n3));
        Some((i * n2 + j) * n3 + k)
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|r| *r = None)
    }

    /// Hit only if the slot holds `state` under `key`, computed at `depth` or deeper.
    /// `key` must be `state`'s key.
    pub fn lookup(&self, key: &StateKey, state: &BattleState, depth: u8) -> Option<Score> {
        let index = self.index(key)?;
        let Some(entry) = &self.slots[index] else {
            return None
        };
        if entry.depth >= depth && entry.matches(key, state) {
            Some(entry.score)
        } else {
            None
        }
    }

    /// Overwrites whatever occupied the slot.
    pub fn store(&mut self, key: &StateKey, state: &BattleState, depth: u8, score: Score) {
        let Some(index) = self.index(key) else { return };
        let position = (!key.exact).then(|| Box::new((state.sides.clone(), state.field)));
        self.slots[index] = Some(TTEntry {
            key: *key,
            depth,
            score,
            position,
        });
    }
}

#[cfg(test)]
mod tests {
    use pokesim::prelude::*;

    use super::*;

    fn key(ai: HashValue, foe: HashValue, field: HashValue) -> StateKey {
        StateKey {
            ai,
            foe,
            field,
            exact: true,
        }
    }

    fn state() -> BattleState {
        BattleBuilder::single(
            Pokemon::new(Species::Pikachu, &[MoveId::Thunderbolt]),
            Pokemon::new(Species::Snorlax, &[MoveId::BodySlam]),
        )
        .build()
    }

    #[test]
    fn test_lookup_store() {
        let s = state();
        let mut table = TranspositionTable::new((4, 4, 2));
        assert_eq!(0, table.get_occupied_count());
        let k1 = key(1, 2, 1);
        let k2 = key(3, 0, 0);
        let s1 = Score::from_repr(100);
        let s2 = Score::from_repr(-40);

        table.store(&k1, &s, 3, s1);
        assert_eq!(Some(s1), table.lookup(&k1, &s, 3));
        assert_eq!(Some(s1), table.lookup(&k1, &s, 1));
        assert_eq!(None, table.lookup(&k1, &s, 4));
        assert_eq!(None, table.lookup(&k2, &s, 0));

        table.store(&k2, &s, 0, s2);
        assert_eq!(Some(s2), table.lookup(&k2, &s, 0));
        assert_eq!(2, table.get_occupied_count());
    }

    #[test]
    fn test_full_key_is_compared() {
        // Single slot: every key collides.
        let s = state();
        let mut table = TranspositionTable::new((1, 1, 1));
        let k1 = key(1, 2, 1);
        let k2 = key(5, 6, 3);
        table.store(&k1, &s, 2, Score::from_repr(7));
        assert_eq!(None, table.lookup(&k2, &s, 0));
    }

    #[test]
    fn test_inexact_keys_are_revalidated() {
        let a = state();
        let mut b = a.clone();
        b.active_mut(Side::Foe).hp -= 1;
        let shared = StateKey {
            exact: false,
            ..a.state_key()
        };
        let mut table = TranspositionTable::default();
        table.store(&shared, &a, 2, Score::from_repr(5));
        assert_eq!(Some(Score::from_repr(5)), table.lookup(&shared, &a, 2));
        assert_eq!(None, table.lookup(&shared, &b, 2));

        let mut logged = a.clone();
        logged.log.enabled = true;
        logged.log.log(Event::Missed(Side::Ai));
        assert_eq!(Some(Score::from_repr(5)), table.lookup(&shared, &logged, 1));
    }

    #[test]
    fn test_last_write_wins() {
        let s = state();
        let mut table = TranspositionTable::new((1, 1, 1));
        let k1 = key(1, 2, 1);
        let k2 = key(5, 6, 3);
        table.store(&k1, &s, 5, Score::from_repr(7));
        table.store(&k1, &s, 1, Score::from_repr(9));
        assert_eq!(Some(Score::from_repr(9)), table.lookup(&k1, &s, 1));
        assert_eq!(None, table.lookup(&k1, &s, 2));

        table.store(&k2, &s, 0, Score::from_repr(3));
        assert_eq!(None, table.lookup(&k1, &s, 0));
        assert_eq!(Some(Score::from_repr(3)), table.lookup(&k2, &s, 0));
        assert_eq!(1, table.get_occupied_count());
    }

    #[test]
    fn test_disabled_table() {
        let s = state();
        for dims in [(0, 0, 0), (4, 0, 4), (1, 1, 0)] {
            let mut table = TranspositionTable::new(dims);
            assert!(!table.is_enabled());
            let k = key(0, 0, 0);
            table.store(&k, &s, 3, Score::VICTORY);
            assert_eq!(None, table.lookup(&k, &s, 0));
            assert_eq!(0, table.get_occupied_count());
            assert_eq!(0.0, table.get_occupancy());
        }
    }

    #[test]
    fn test_clear() {
        let mut table = TranspositionTable::default();
        assert_eq!(256 * 256 * 16, table.get_max_entries());
        table.store(&key(9, 9, 9), &state(), 1, Score::DRAW);
        assert_eq!(1, table.get_occupied_count());
        table.clear();
        assert_eq!(0, table.get_occupied_count());
        assert!(format!("{table:?}").contains("(256, 256, 16)"));
    }

    #[test]
    fn test_keys_with_zero_low_digits_spread() {
        let s = state();
        let mut table = TranspositionTable::new((16, 16, 1));
        for i in 0..8u64 {
            table.store(&key(i << 20, 0, 0), &s, 1, Score::DRAW);
        }
        assert!(table.get_occupied_count() > 1);
    }
}
