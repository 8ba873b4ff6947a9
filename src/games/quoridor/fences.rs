//! Fence placement validation.
//!
//! A fence is accepted when the player still holds one, no fence of the same
//! kind sits on that anchor, and the anchor is within the range for its
//! orientation. Whether the fence leaves either pawn a route to its goal is
//! not checked.

use crate::core::{FenceEdge, FenceKind, GameSession, PlayerId};
use crate::rules::Rejection;

/// Check that `player` may place a `kind` fence at `(x, y)`.
///
/// Turn order and game-over are the caller's concern.
pub(crate) fn validate_fence(
    session: &GameSession,
    player: PlayerId,
    kind: FenceKind,
    x: i32,
    y: i32,
) -> Result<FenceEdge, Rejection> {
    if !session.player(player).has_fences() {
        return Err(Rejection::NoFencesLeft(player));
    }

    // An anchor outside the range can never be in the fence sets, so the
    // range check doubles as the first half of the duplicate check.
    let edge = FenceEdge::new(kind, x, y).ok_or(Rejection::FenceOutOfRange(x, y))?;
    if session.board().has_fence(edge) {
        return Err(Rejection::FenceOccupied(edge));
    }

    Ok(edge)
}

/// Every fence `player` could place, ignoring whose turn it is.
pub(crate) fn legal_fences(session: &GameSession, player: PlayerId) -> Vec<FenceEdge> {
    if !session.player(player).has_fences() {
        return Vec::new();
    }

    [FenceKind::Vertical, FenceKind::Horizontal]
        .into_iter()
        .flat_map(|kind| {
            let (max_x, max_y) = kind.anchor_limits();
            (0..=i32::from(max_y))
                .flat_map(move |y| (0..=i32::from(max_x)).map(move |x| (kind, x, y)))
        })
        .filter_map(|(kind, x, y)| validate_fence(session, player, kind, x, y).ok())
        .collect()
}
