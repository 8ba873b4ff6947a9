//! Rules engine trait and rejection types.
//!
//! `RulesEngine` describes what a rules implementation offers:
//! - Validation and application of actions
//! - Enumeration of legal actions
//! - Terminal detection
//!
//! The concrete Quoridor rules live in `games::quoridor`.

pub mod engine;
pub mod error;

pub use engine::{GameResult, MoveList, RulesEngine};
pub use error::{InvariantViolation, ParseError, Rejection};
