//! # quoridor-engine
//!
//! Rules engine for Quoridor: decides whether a pawn move or fence placement
//! is legal and keeps the turn state.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: a rejected action leaves the session
//!    exactly as it was.
//!
//! 2. **Plain data at the leaves**: `BoardState` and `Player` hold state and
//!    know no rules. All legality lives in the engine, which owns them.
//!
//! 3. **Distinct coordinate types**: `Cell` (pawn squares) and `FenceEdge`
//!    (fence anchors) have different valid ranges and never mix.
//!
//! ## Example
//!
//! ```
//! use quoridor_engine::{Cell, FenceKind, PlayerId, Quoridor};
//!
//! let mut game = Quoridor::new();
//!
//! assert!(game.submit_move(PlayerId::One, Cell::new(4, 1)));
//! assert!(game.submit_fence(PlayerId::Two, FenceKind::Horizontal, 4, 2));
//! assert!(!game.submit_move(PlayerId::One, Cell::new(4, 2)));
//! assert_eq!(game.current_turn(), PlayerId::One);
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, board geometry, actions, configuration, session state
//! - `rules`: RulesEngine trait and rejection reasons
//! - `games`: The Quoridor rules

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, BoardState, Cell, FenceEdge, FenceKind, GameConfig, GameSession,
    GameStatus, Player, PlayerId, PlayerMap,
};

pub use crate::rules::{GameResult, InvariantViolation, ParseError, Rejection, RulesEngine};

pub use crate::games::quoridor::{Quoridor, QuoridorBuilder};
