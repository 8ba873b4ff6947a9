//! Rules engine trait.
//!
//! The engine decides:
//! - What actions are legal
//! - How actions modify state
//! - Win conditions

use smallvec::SmallVec;

use super::error::Rejection;
use crate::core::{Action, Cell, FenceEdge, GameConfig, GameSession, PlayerId};

/// Result of a completed game. Quoridor has no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: PlayerId,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Pawn destinations; rarely more than five.
pub type MoveList = SmallVec<[Cell; 6]>;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: Must leave state untouched when it returns `Err`
/// - `legal_moves` / `legal_fences`: Return empty if the player can't act
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Read-only view of the current session.
    fn session(&self) -> &GameSession;

    /// Validate and apply an action for `player`.
    fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<(), Rejection>;

    /// Every pawn destination `player` could move to right now.
    fn legal_moves(&self, player: PlayerId) -> MoveList;

    /// Every fence `player` could place right now.
    fn legal_fences(&self, player: PlayerId) -> Vec<FenceEdge>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult> {
        self.session()
            .status()
            .winner()
            .map(|winner| GameResult { winner })
    }

    // === Convenience Methods ===

    /// Enumerate all legal actions for a player, moves first.
    fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        self.legal_moves(player)
            .into_iter()
            .map(Action::Move)
            .chain(self.legal_fences(player).into_iter().map(Action::Fence))
            .collect()
    }
}
