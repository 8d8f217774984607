use std::fmt::Display;
use std::ops::{Index, IndexMut};

use enum_map::Enum;

/// One of the two participants of a battle. The search maximizes for `Ai` and minimizes for `Foe`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Enum)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    #[default]
    Ai = 0,
    Foe = 1,
}

impl Side {
    pub const VALUES: [Side; 2] = [Side::Ai, Side::Foe];

    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Ai => Side::Foe,
            Side::Foe => Side::Ai,
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self as usize
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Ai => write!(f, "AI"),
            Side::Foe => write!(f, "Foe"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BySide<T>(pub T, pub T);

impl<T> From<(T, T)> for BySide<T> {
    #[inline]
    fn from((a, b): (T, T)) -> Self {
        Self(a, b)
    }
}

impl<T> From<BySide<T>> for (T, T) {
    #[inline]
    fn from(value: BySide<T>) -> Self {
        (value.0, value.1)
    }
}

impl<T> BySide<T> {
    #[inline]
    pub const fn new(ai: T, foe: T) -> Self {
        Self(ai, foe)
    }

    #[inline]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Ai => &self.0,
            Side::Foe => &self.1,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Ai => &mut self.0,
            Side::Foe => &mut self.1,
        }
    }

    /// Returns `(own, other)` from the perspective of `side`.
    #[inline]
    pub fn get_two(&self, side: Side) -> (&T, &T) {
        match side {
            Side::Ai => (&self.0, &self.1),
            Side::Foe => (&self.1, &self.0),
        }
    }

    /// Returns `(own, other)` from the perspective of `side`.
    #[inline]
    pub fn get_two_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        match side {
            Side::Ai => (&mut self.0, &mut self.1),
            Side::Foe => (&mut self.1, &mut self.0),
        }
    }

    #[inline]
    pub fn map<A, F: FnMut(T) -> A>(self, mut f: F) -> BySide<A> {
        BySide::<A>::new(f(self.0), f(self.1))
    }

    #[inline]
    pub fn as_ref(&self) -> BySide<&T> {
        BySide(&self.0, &self.1)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Ai, &self.0), (Side::Foe, &self.1)].into_iter()
    }
}

impl<T> Index<Side> for BySide<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: Side) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<Side> for BySide<T> {
    #[inline]
    fn index_mut(&mut self, index: Side) -> &mut Self::Output {
        self.get_mut(index)
    }
}
