//! Game configuration.
//!
//! `GameConfig` holds the tunable parts of a match. Set-up that only tests
//! and hosts replaying positions need (starting pawn cells, pre-placed
//! fences) lives on the builder in `games::quoridor`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Fences each player receives in a standard two-player game.
pub const DEFAULT_FENCES_PER_PLAYER: u8 = 10;

/// Configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fences each player starts with.
    pub fences_per_player: u8,

    /// Player who moves first.
    pub first_player: PlayerId,
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting fence inventory.
    #[must_use]
    pub fn with_fences_per_player(mut self, fences: u8) -> Self {
        self.fences_per_player = fences;
        self
    }

    /// Set who moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fences_per_player: DEFAULT_FENCES_PER_PLAYER,
            first_player: PlayerId::One,
        }
    }
}
