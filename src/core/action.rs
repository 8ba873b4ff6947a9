//! Action representation.
//!
//! A turn is either a pawn move to a target cell or a fence placement. The
//! engine validates actions; these types only describe them.

use serde::{Deserialize, Serialize};

use super::board::{Cell, FenceEdge};
use super::player::PlayerId;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{Action, Cell, FenceEdge};
///
/// let step = Action::Move(Cell::new(4, 1));
/// let wall = Action::Fence(FenceEdge::horizontal(4, 1));
///
/// assert!(step.is_move());
/// assert!(!wall.is_move());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the pawn to a cell.
    Move(Cell),
    /// Place a fence.
    Fence(FenceEdge),
}

impl Action {
    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(cell) => write!(f, "move to {cell}"),
            Action::Fence(edge) => write!(f, "fence {edge}"),
        }
    }
}

/// An accepted action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Ply number, starting at 1 for the first accepted action.
    pub ply: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, ply: u32) -> Self {
        Self { player, action, ply }
    }
}
