//! Quoridor on a 9×9 board.
//!
//! - Two pawns start mid-row on opposite sides: player 1 on (4, 0), player 2
//!   on (4, 8)
//! - On a turn a player either moves the pawn or places a fence
//! - Each player holds 10 fences
//! - First pawn to reach the far row wins
//!
//! Fences may wall a pawn in completely; no route-to-goal check is made.

mod fences;
mod game;
mod movement;
mod render;

pub use game::{Quoridor, QuoridorBuilder};
