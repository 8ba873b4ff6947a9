//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two sides, numbered 1 and 2.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId` for O(1) access.
//!
//! ## Player
//!
//! A side's fence inventory. Plain data; the rules engine decides when a
//! fence may be spent.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::rules::InvariantViolation;

/// One of the two sides of a Quoridor game.
///
/// Player 1 starts on row 0 and races to row 8, player 2 the reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Look up a player by its 1-based number.
    ///
    /// ```
    /// use quoridor_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_number(2), Some(PlayerId::Two));
    /// assert_eq!(PlayerId::from_number(3), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// The 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// The row this player must reach to win.
    #[must_use]
    pub const fn goal_row(self) -> u8 {
        match self {
            PlayerId::One => 8,
            PlayerId::Two => 0,
        }
    }

    /// Iterate over both players in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::One, PlayerId::Two].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{PlayerId, PlayerMap};
///
/// let mut fences = PlayerMap::with_value(10u8);
/// fences[PlayerId::Two] -= 1;
///
/// assert_eq!(fences[PlayerId::One], 10);
/// assert_eq!(fences[PlayerId::Two], 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::One), factory(PlayerId::Two)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A side's remaining fence inventory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    fences: u8,
}

impl Player {
    /// Create a player holding `fences` fences.
    #[must_use]
    pub const fn new(id: PlayerId, fences: u8) -> Self {
        Self { id, fences }
    }

    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Fences still available to place.
    #[must_use]
    pub const fn fences(&self) -> u8 {
        self.fences
    }

    #[must_use]
    pub const fn has_fences(&self) -> bool {
        self.fences > 0
    }

    /// Use up one fence.
    ///
    /// Fails if the inventory is already empty. The engine checks the
    /// inventory before spending, so an error here means a caller skipped
    /// that check.
    pub fn spend_fence(&mut self) -> Result<(), InvariantViolation> {
        self.fences = self
            .fences
            .checked_sub(1)
            .ok_or(InvariantViolation::EmptyFenceInventory(self.id))?;
        Ok(())
    }
}
