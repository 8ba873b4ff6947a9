//! Rejection reasons and internal errors.
//!
//! Every illegal action is reported as a [`Rejection`]. The boolean entry
//! points collapse it to `false`; the `try_*` entry points keep the reason.

use derive_more::Display;

use crate::core::{Cell, FenceEdge, PlayerId};

/// Why an action was refused. State is never changed by a rejected action.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The game has already been won.
    #[display("the game is over")]
    GameOver,

    /// The acting player is not the player to move.
    #[display("it is not {_0}'s turn")]
    NotYourTurn(PlayerId),

    /// A fence orientation that is neither vertical nor horizontal.
    #[display("unknown fence kind {_0:?}")]
    UnknownFenceKind(String),

    /// The player has no fences left.
    #[display("{_0} has no fences left")]
    NoFencesLeft(PlayerId),

    /// A fence of the same kind is already at that anchor.
    #[display("fence {_0} is already placed")]
    FenceOccupied(FenceEdge),

    /// The fence anchor lies outside the range for its orientation.
    #[display("fence anchor ({_0}, {_1}) is out of range")]
    FenceOutOfRange(i32, i32),

    /// The target cell holds a pawn.
    #[display("cell {_0} is occupied")]
    CellOccupied(Cell),

    /// The target coordinates are not a cell.
    #[display("({_0}, {_1}) is off the board")]
    OffBoard(i32, i32),

    /// The target is more than two cells away on some axis, or the move has
    /// no recognised shape.
    #[display("{_0} is out of reach")]
    TooFar(Cell),

    /// A fence stands on an edge the move would cross.
    #[display("a fence blocks the way to {_0}")]
    Blocked(Cell),

    /// A two-cell move without the opponent in between.
    #[display("no pawn to jump over on the way to {_0}")]
    NoPawnToJump(Cell),

    /// A diagonal step that is not a substitute for a blocked jump.
    #[display("diagonal move to {_0} is not allowed")]
    DiagonalNotAllowed(Cell),

    /// An internal contract was broken.
    #[display("{_0}")]
    Invariant(InvariantViolation),
}

impl std::error::Error for Rejection {}

impl From<InvariantViolation> for Rejection {
    fn from(value: InvariantViolation) -> Self {
        Rejection::Invariant(value)
    }
}

/// Broken internal contract. Unreachable through the engine's public API.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum InvariantViolation {
    /// Tried to spend a fence from an empty inventory.
    #[display("invariant violation: {_0} has no fence to spend")]
    EmptyFenceInventory(PlayerId),
}

impl std::error::Error for InvariantViolation {}

/// Failure to parse textual input.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum ParseError {
    /// Not `v`/`vertical` or `h`/`horizontal`.
    #[display("unknown fence kind {_0:?}")]
    UnknownFenceKind(String),
}

impl std::error::Error for ParseError {}

impl From<ParseError> for Rejection {
    fn from(value: ParseError) -> Self {
        match value {
            ParseError::UnknownFenceKind(kind) => Rejection::UnknownFenceKind(kind),
        }
    }
}
