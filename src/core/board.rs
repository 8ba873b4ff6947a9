//! Board geometry: cells, fence edges and the board state container.
//!
//! ## Coordinates
//!
//! Cells are `(x, y)` with `0 <= x, y <= 8`; `x` grows to the right and `y`
//! grows downwards. Fences are anchored at the top-left corner of the cell
//! they border:
//! - Vertical fence `(x, y)` is the left edge of cell `(x, y)`, i.e. the
//!   edge between columns `x - 1` and `x` in row `y`.
//! - Horizontal fence `(x, y)` is the top edge of cell `(x, y)`, i.e. the
//!   edge between rows `y - 1` and `y` in column `x`.
//!
//! The four sides of the board are stored as ordinary fences, so stepping off
//! the board is just another blocked edge.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::{PlayerId, PlayerMap};
use crate::rules::ParseError;

/// Number of cells along each side of the board.
pub const BOARD_SIZE: u8 = 9;

/// Highest cell coordinate.
pub const MAX_CELL: u8 = BOARD_SIZE - 1;

/// A pawn-occupiable square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    /// Create a cell from in-range coordinates.
    ///
    /// Panics if either coordinate is above 8; use [`Cell::checked`] for
    /// untrusted input.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x <= MAX_CELL && y <= MAX_CELL, "Cell coordinates must be 0-8");
        Self { x, y }
    }

    /// Create a cell, or `None` if the coordinates are off the board.
    ///
    /// ```
    /// use quoridor_engine::core::Cell;
    ///
    /// assert_eq!(Cell::checked(4, 8), Some(Cell::new(4, 8)));
    /// assert_eq!(Cell::checked(9, 0), None);
    /// assert_eq!(Cell::checked(-1, 3), None);
    /// ```
    #[must_use]
    pub fn checked(x: i32, y: i32) -> Option<Self> {
        let in_range = |v: i32| (0..=i32::from(MAX_CELL)).contains(&v);
        (in_range(x) && in_range(y)).then(|| Self {
            x: x as u8,
            y: y as u8,
        })
    }

    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// The cell displaced by `(dx, dy)`, if it is on the board.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Self::checked(i32::from(self.x) + dx, i32::from(self.y) + dy)
    }

    /// Every cell on the board, row by row.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Cell { x, y }))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fence orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FenceKind {
    Vertical,
    Horizontal,
}

impl FenceKind {
    /// Inclusive upper bounds of `(x, y)` anchors for this orientation.
    ///
    /// The bound along the fence's normal axis is 9 so that it covers the far
    /// boundary line.
    #[must_use]
    pub const fn anchor_limits(self) -> (u8, u8) {
        match self {
            FenceKind::Vertical => (BOARD_SIZE, MAX_CELL),
            FenceKind::Horizontal => (MAX_CELL, BOARD_SIZE),
        }
    }

    /// One-letter code used in notation.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            FenceKind::Vertical => 'v',
            FenceKind::Horizontal => 'h',
        }
    }
}

impl FromStr for FenceKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v" | "vertical" => Ok(FenceKind::Vertical),
            "h" | "horizontal" => Ok(FenceKind::Horizontal),
            _ => Err(ParseError::UnknownFenceKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for FenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FenceKind::Vertical => write!(f, "vertical"),
            FenceKind::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// A one-unit fence segment anchored at a grid intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FenceEdge {
    kind: FenceKind,
    x: u8,
    y: u8,
}

impl FenceEdge {
    /// Create a fence edge, or `None` if the anchor is outside the range
    /// allowed for `kind`.
    ///
    /// ```
    /// use quoridor_engine::core::{FenceEdge, FenceKind};
    ///
    /// assert!(FenceEdge::new(FenceKind::Vertical, 9, 8).is_some());
    /// assert!(FenceEdge::new(FenceKind::Vertical, 8, 9).is_none());
    /// assert!(FenceEdge::new(FenceKind::Horizontal, 8, 9).is_some());
    /// ```
    #[must_use]
    pub fn new(kind: FenceKind, x: i32, y: i32) -> Option<Self> {
        let (max_x, max_y) = kind.anchor_limits();
        let fits = |v: i32, max: u8| (0..=i32::from(max)).contains(&v);
        (fits(x, max_x) && fits(y, max_y)).then(|| Self {
            kind,
            x: x as u8,
            y: y as u8,
        })
    }

    /// Vertical fence from in-range literals. Panics when out of range.
    #[must_use]
    pub const fn vertical(x: u8, y: u8) -> Self {
        assert!(x <= BOARD_SIZE && y <= MAX_CELL, "Vertical fence anchor out of range");
        Self {
            kind: FenceKind::Vertical,
            x,
            y,
        }
    }

    /// Horizontal fence from in-range literals. Panics when out of range.
    #[must_use]
    pub const fn horizontal(x: u8, y: u8) -> Self {
        assert!(x <= MAX_CELL && y <= BOARD_SIZE, "Horizontal fence anchor out of range");
        Self {
            kind: FenceKind::Horizontal,
            x,
            y,
        }
    }

    #[must_use]
    pub const fn kind(self) -> FenceKind {
        self.kind
    }

    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Whether this edge lies on one of the four board sides.
    #[must_use]
    pub const fn is_boundary(self) -> bool {
        match self.kind {
            FenceKind::Vertical => self.x == 0 || self.x == BOARD_SIZE,
            FenceKind::Horizontal => self.y == 0 || self.y == BOARD_SIZE,
        }
    }

    /// The permanent fences lining the four sides of the board.
    pub fn boundary() -> impl Iterator<Item = FenceEdge> {
        (0..BOARD_SIZE).flat_map(|i| {
            [
                FenceEdge::vertical(0, i),
                FenceEdge::vertical(BOARD_SIZE, i),
                FenceEdge::horizontal(i, 0),
                FenceEdge::horizontal(i, BOARD_SIZE),
            ]
        })
    }
}

impl std::fmt::Display for FenceEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.kind.code(), self.x, self.y)
    }
}

/// Pawn positions and fence sets.
///
/// A plain container: setters do not validate anything. Legality is the
/// rules engine's job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pawns: PlayerMap<Cell>,
    vertical: FxHashSet<FenceEdge>,
    horizontal: FxHashSet<FenceEdge>,
}

impl BoardState {
    /// Home square of player 1.
    pub const PLAYER_ONE_HOME: Cell = Cell::new(4, 0);

    /// Home square of player 2.
    pub const PLAYER_TWO_HOME: Cell = Cell::new(4, 8);

    /// Board with both pawns on their home squares and only boundary fences.
    #[must_use]
    pub fn new() -> Self {
        Self::with_pawns(Self::PLAYER_ONE_HOME, Self::PLAYER_TWO_HOME)
    }

    /// Board with pawns at the given cells and only boundary fences.
    #[must_use]
    pub fn with_pawns(one: Cell, two: Cell) -> Self {
        let mut board = Self {
            pawns: PlayerMap::new(|p| match p {
                PlayerId::One => one,
                PlayerId::Two => two,
            }),
            vertical: FxHashSet::default(),
            horizontal: FxHashSet::default(),
        };
        for edge in FenceEdge::boundary() {
            board.insert_fence(edge);
        }
        board
    }

    /// Home square of a player.
    #[must_use]
    pub const fn home(player: PlayerId) -> Cell {
        match player {
            PlayerId::One => Self::PLAYER_ONE_HOME,
            PlayerId::Two => Self::PLAYER_TWO_HOME,
        }
    }

    /// Every cell on the board, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        Cell::all()
    }

    // === Pawns ===

    /// Current cell of a player's pawn.
    #[must_use]
    pub fn pawn(&self, player: PlayerId) -> Cell {
        self.pawns[player]
    }

    /// Both pawn cells.
    #[must_use]
    pub fn pawns(&self) -> &PlayerMap<Cell> {
        &self.pawns
    }

    /// The player whose pawn stands on `cell`, if any.
    #[must_use]
    pub fn occupant(&self, cell: Cell) -> Option<PlayerId> {
        self.pawns
            .iter()
            .find(|(_, pawn)| **pawn == cell)
            .map(|(player, _)| player)
    }

    /// Overwrite a player's pawn position.
    pub fn set_pawn(&mut self, player: PlayerId, cell: Cell) {
        self.pawns[player] = cell;
    }

    // === Fences ===

    /// Fences of one orientation, boundary included.
    #[must_use]
    pub fn fences(&self, kind: FenceKind) -> &FxHashSet<FenceEdge> {
        match kind {
            FenceKind::Vertical => &self.vertical,
            FenceKind::Horizontal => &self.horizontal,
        }
    }

    /// Check whether an identical fence is present.
    #[must_use]
    pub fn has_fence(&self, edge: FenceEdge) -> bool {
        self.fences(edge.kind()).contains(&edge)
    }

    /// Fences placed by players, i.e. everything except the board sides.
    pub fn placed_fences(&self) -> impl Iterator<Item = FenceEdge> + '_ {
        self.vertical
            .iter()
            .chain(self.horizontal.iter())
            .copied()
            .filter(|edge| !edge.is_boundary())
    }

    /// Insert a fence. Returns false if it was already present.
    pub fn insert_fence(&mut self, edge: FenceEdge) -> bool {
        match edge.kind() {
            FenceKind::Vertical => self.vertical.insert(edge),
            FenceKind::Horizontal => self.horizontal.insert(edge),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
