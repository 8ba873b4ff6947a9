//! Core types: players, board geometry, actions, configuration, session state.
//!
//! These are plain data. Nothing in this module knows the rules of
//! movement or fence placement; that lives in `games::quoridor`.

pub mod player;
pub mod board;
pub mod action;
pub mod config;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap};
pub use board::{BoardState, Cell, FenceEdge, FenceKind, BOARD_SIZE, MAX_CELL};
pub use action::{Action, ActionRecord};
pub use config::{GameConfig, DEFAULT_FENCES_PER_PLAYER};
pub use state::{GameSession, GameStatus};
