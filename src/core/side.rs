//! Combatant sides and per-side data storage.
//!
//! ## Side
//!
//! A battle always has exactly two sides. The attacker (the player whose
//! run started the fight) is `Side::Player`; the defender is `Side::Enemy`,
//! whether it is a monster or a mirrored player.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, iterated in a fixed order
//! (player first) so that every pass over both sides is deterministic.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two combatants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The attacking side.
    Player,
    /// The defending side.
    Enemy,
}

impl Side {
    /// Both sides in processing order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Enemy];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// Storage index (player = 0, enemy = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Enemy => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use autocard_battle::core::{Side, SideMap};
///
/// let mut hp = SideMap::new(|_| 100);
/// hp[Side::Enemy] -= 30;
///
/// assert_eq!(hp[Side::Player], 100);
/// assert_eq!(hp[Side::Enemy], 70);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Enemy)],
        }
    }

    /// Create a map from explicit player and enemy values.
    pub fn from_pair(player: T, enemy: T) -> Self {
        Self {
            data: [player, enemy],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Borrow the acting side and its opponent mutably at the same time.
    ///
    /// Returns `(acting, opponent)`.
    pub fn split_mut(&mut self, acting: Side) -> (&mut T, &mut T) {
        let [player, enemy] = &mut self.data;
        match acting {
            Side::Player => (player, enemy),
            Side::Enemy => (enemy, player),
        }
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs, player first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Map each side's value into a new map.
    pub fn map<U>(&self, mut f: impl FnMut(Side, &T) -> U) -> SideMap<U> {
        SideMap::new(|side| f(side, self.get(side)))
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
