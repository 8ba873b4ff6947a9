//! Pawn movement validation.
//!
//! A pawn may:
//! - step to an orthogonal neighbour when no fence is in between,
//! - jump straight over an adjacent opponent when neither crossed edge is
//!   fenced,
//! - step diagonally around an adjacent opponent when the straight jump is
//!   walled off behind the opponent and the side edge is open.
//!
//! Coordinates here are signed so that "the cell behind the opponent" can
//! fall off the board; the board sides are fences, so such an edge always
//! reads as blocked.

use crate::core::{BoardState, Cell, FenceEdge, FenceKind, PlayerId};
use crate::rules::{MoveList, Rejection};

type Point = (i32, i32);

fn point(cell: Cell) -> Point {
    (i32::from(cell.x()), i32::from(cell.y()))
}

/// Fence anchor for the edge between two orthogonally adjacent points.
///
/// The edge between columns `a` and `a + 1` is vertical fence `a + 1`; the
/// edge between rows `b` and `b + 1` is horizontal fence `b + 1`. So a step
/// right or down looks at the target's anchor and a step left or up looks at
/// the current one.
fn edge_between((fx, fy): Point, (tx, ty): Point) -> Option<FenceEdge> {
    match (tx - fx, ty - fy) {
        (1 | -1, 0) => FenceEdge::new(FenceKind::Vertical, fx.max(tx), fy),
        (0, 1 | -1) => FenceEdge::new(FenceKind::Horizontal, fx, fy.max(ty)),
        _ => None,
    }
}

/// Whether a fence stands between two adjacent points.
fn blocked(board: &BoardState, from: Point, to: Point) -> bool {
    edge_between(from, to).map_or(true, |edge| board.has_fence(edge))
}

/// Check that `player` may move its pawn to `target`.
///
/// Turn order and game-over are the caller's concern; this looks only at
/// the board.
pub(crate) fn validate_move(
    board: &BoardState,
    player: PlayerId,
    target: Cell,
) -> Result<(), Rejection> {
    if board.occupant(target).is_some() {
        return Err(Rejection::CellOccupied(target));
    }

    let from = point(board.pawn(player));
    let opponent = point(board.pawn(player.opponent()));
    let to = point(target);
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);

    if dx.abs() > 2 || dy.abs() > 2 {
        return Err(Rejection::TooFar(target));
    }

    match (dx.abs(), dy.abs()) {
        (1, 0) | (0, 1) => {
            if blocked(board, from, to) {
                return Err(Rejection::Blocked(target));
            }
        }
        (2, 0) | (0, 2) => {
            let middle = (from.0 + dx / 2, from.1 + dy / 2);
            if opponent != middle {
                return Err(Rejection::NoPawnToJump(target));
            }
            if blocked(board, from, middle) || blocked(board, middle, to) {
                return Err(Rejection::Blocked(target));
            }
        }
        (1, 1) => {
            if !diagonal_allowed(board, from, opponent, (dx, dy)) {
                return Err(Rejection::DiagonalNotAllowed(target));
            }
        }
        _ => return Err(Rejection::TooFar(target)),
    }

    Ok(())
}

/// Diagonal step from `from` in direction `(dx, dy)`.
///
/// The opponent must sit next to the mover either along x (`(dx, 0)`) or
/// along y (`(0, dy)`). For that placement the cell beyond the opponent must
/// be fenced off and the edge from the opponent to the target must be open.
fn diagonal_allowed(board: &BoardState, from: Point, opponent: Point, (dx, dy): Point) -> bool {
    let target = (from.0 + dx, from.1 + dy);

    [(dx, 0), (0, dy)].into_iter().any(|(sx, sy)| {
        let adjacent = (from.0 + sx, from.1 + sy);
        let beyond = (adjacent.0 + sx, adjacent.1 + sy);

        opponent == adjacent && blocked(board, adjacent, beyond) && !blocked(board, adjacent, target)
    })
}

/// Every cell `player` could move to, ignoring whose turn it is.
pub(crate) fn legal_moves(board: &BoardState, player: PlayerId) -> MoveList {
    let from = board.pawn(player);

    (-2..=2)
        .flat_map(|dy| (-2..=2).map(move |dx| (dx, dy)))
        .filter_map(|(dx, dy)| from.offset(dx, dy))
        .filter(|&target| validate_move(board, player, target).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(one: (u8, u8), two: (u8, u8), fences: &[FenceEdge]) -> BoardState {
        let mut board = BoardState::with_pawns(Cell::new(one.0, one.1), Cell::new(two.0, two.1));
        for &edge in fences {
            board.insert_fence(edge);
        }
        board
    }

    fn check(board: &BoardState, x: u8, y: u8) -> Result<(), Rejection> {
        validate_move(board, PlayerId::One, Cell::new(x, y))
    }

    #[test]
    fn test_edge_between() {
        assert_eq!(edge_between((3, 3), (4, 3)), Some(FenceEdge::vertical(4, 3)));
        assert_eq!(edge_between((4, 3), (3, 3)), Some(FenceEdge::vertical(4, 3)));
        assert_eq!(edge_between((3, 3), (3, 4)), Some(FenceEdge::horizontal(3, 4)));
        assert_eq!(edge_between((3, 4), (3, 3)), Some(FenceEdge::horizontal(3, 4)));
        assert_eq!(edge_between((0, 2), (-1, 2)), Some(FenceEdge::vertical(0, 2)));
        assert_eq!(edge_between((8, 2), (9, 2)), Some(FenceEdge::vertical(9, 2)));
        assert_eq!(edge_between((3, 3), (4, 4)), None);
    }

    #[test]
    fn test_orthogonal_steps() {
        let b = board((4, 4), (0, 8), &[]);

        assert_eq!(check(&b, 4, 5), Ok(()));
        assert_eq!(check(&b, 4, 3), Ok(()));
        assert_eq!(check(&b, 5, 4), Ok(()));
        assert_eq!(check(&b, 3, 4), Ok(()));
    }

    #[test]
    fn test_fence_direction_sensitivity() {
        // Right/down use the target anchor, left/up the current anchor.
        let b = board((4, 4), (0, 8), &[FenceEdge::vertical(5, 4), FenceEdge::horizontal(4, 4)]);

        assert_eq!(check(&b, 5, 4), Err(Rejection::Blocked(Cell::new(5, 4))));
        assert_eq!(check(&b, 4, 3), Err(Rejection::Blocked(Cell::new(4, 3))));
        assert_eq!(check(&b, 3, 4), Ok(()));
        assert_eq!(check(&b, 4, 5), Ok(()));

        let b = board((4, 4), (0, 8), &[FenceEdge::vertical(4, 4), FenceEdge::horizontal(4, 5)]);
        assert_eq!(check(&b, 3, 4), Err(Rejection::Blocked(Cell::new(3, 4))));
        assert_eq!(check(&b, 4, 5), Err(Rejection::Blocked(Cell::new(4, 5))));
    }

    #[test]
    fn test_occupied_and_too_far() {
        let b = board((4, 4), (4, 5), &[]);

        assert_eq!(check(&b, 4, 5), Err(Rejection::CellOccupied(Cell::new(4, 5))));
        assert_eq!(check(&b, 4, 4), Err(Rejection::CellOccupied(Cell::new(4, 4))));
        assert_eq!(check(&b, 4, 7), Err(Rejection::TooFar(Cell::new(4, 7))));
        assert_eq!(check(&b, 7, 4), Err(Rejection::TooFar(Cell::new(7, 4))));
        assert_eq!(check(&b, 6, 5), Err(Rejection::TooFar(Cell::new(6, 5))));
        assert_eq!(check(&b, 6, 6), Err(Rejection::TooFar(Cell::new(6, 6))));
    }

    #[test]
    fn test_straight_jump() {
        let b = board((4, 4), (4, 5), &[]);
        assert_eq!(check(&b, 4, 6), Ok(()));

        let b = board((4, 4), (5, 4), &[]);
        assert_eq!(check(&b, 6, 4), Ok(()));
        assert_eq!(check(&b, 2, 4), Err(Rejection::NoPawnToJump(Cell::new(2, 4))));
    }

    #[test]
    fn test_straight_jump_blocked_on_either_edge() {
        // Fence between mover and opponent.
        let b = board((4, 4), (4, 5), &[FenceEdge::horizontal(4, 5)]);
        assert_eq!(check(&b, 4, 6), Err(Rejection::Blocked(Cell::new(4, 6))));

        // Fence behind the opponent.
        let b = board((4, 4), (4, 5), &[FenceEdge::horizontal(4, 6)]);
        assert_eq!(check(&b, 4, 6), Err(Rejection::Blocked(Cell::new(4, 6))));

        let b = board((4, 4), (3, 4), &[FenceEdge::vertical(4, 4)]);
        assert_eq!(check(&b, 2, 4), Err(Rejection::Blocked(Cell::new(2, 4))));

        let b = board((4, 4), (5, 4), &[FenceEdge::vertical(5, 4)]);
        assert_eq!(check(&b, 6, 4), Err(Rejection::Blocked(Cell::new(6, 4))));
    }

    #[test]
    fn test_diagonal_needs_blocked_jump() {
        let b = board((4, 4), (4, 5), &[]);
        assert_eq!(check(&b, 3, 5), Err(Rejection::DiagonalNotAllowed(Cell::new(3, 5))));

        let b = board((4, 4), (4, 5), &[FenceEdge::horizontal(4, 6)]);
        assert_eq!(check(&b, 3, 5), Ok(()));
        assert_eq!(check(&b, 5, 5), Ok(()));
        assert_eq!(check(&b, 3, 3), Err(Rejection::DiagonalNotAllowed(Cell::new(3, 3))));
    }

    #[test]
    fn test_diagonal_against_board_side() {
        // Opponent on the last row: the board side stops the straight jump.
        let b = board((4, 7), (4, 8), &[]);
        assert_eq!(check(&b, 3, 8), Ok(()));
        assert_eq!(check(&b, 5, 8), Ok(()));
    }

    #[test]
    fn test_diagonal_side_edge_fenced() {
        let b = board(
            (4, 4),
            (4, 5),
            &[FenceEdge::horizontal(4, 6), FenceEdge::vertical(5, 5)],
        );
        assert_eq!(check(&b, 5, 5), Err(Rejection::DiagonalNotAllowed(Cell::new(5, 5))));
        assert_eq!(check(&b, 3, 5), Ok(()));
    }

    #[test]
    fn test_legal_moves() {
        let b = BoardState::new();
        let mut moves = legal_moves(&b, PlayerId::One).into_vec();
        moves.sort();
        assert_eq!(moves, vec![Cell::new(3, 0), Cell::new(4, 1), Cell::new(5, 0)]);

        let b = board((4, 4), (4, 5), &[FenceEdge::horizontal(4, 6)]);
        let mut moves = legal_moves(&b, PlayerId::One).into_vec();
        moves.sort();
        assert_eq!(
            moves,
            vec![Cell::new(3, 4), Cell::new(3, 5), Cell::new(4, 3), Cell::new(5, 4), Cell::new(5, 5)]
        );
    }
}
