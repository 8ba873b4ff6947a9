//! Game session state.
//!
//! ## GameSession
//!
//! Everything observable about a game in progress:
//! - Both players' fence inventories
//! - Board state (pawns and fences)
//! - Whose turn it is and whether the game is over
//! - History of accepted actions
//!
//! The session is read-only outside the crate. Mutation goes through the
//! rules engine, which validates before touching anything.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::board::BoardState;
use super::player::{Player, PlayerId, PlayerMap};

/// Terminal state flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress => None,
        }
    }
}

/// Full game session.
///
/// Uses an `im` vector for the history so snapshots clone cheaply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    players: PlayerMap<Player>,
    board: BoardState,
    turn: PlayerId,
    status: GameStatus,
    history: Vector<ActionRecord>,
}

impl GameSession {
    /// Create a session from a starting board.
    ///
    /// The status is derived from the pawn positions, so a board with a pawn
    /// already on its goal row starts out won.
    #[must_use]
    pub fn new(board: BoardState, fences_per_player: u8, first_player: PlayerId) -> Self {
        let mut session = Self {
            players: PlayerMap::new(|id| Player::new(id, fences_per_player)),
            board,
            turn: first_player,
            status: GameStatus::InProgress,
            history: Vector::new(),
        };
        if let Some(winner) = PlayerId::all().find(|&p| session.reached_goal(p)) {
            session.status = GameStatus::Won(winner);
        }
        session
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Remaining fences for a player.
    #[must_use]
    pub fn fences_left(&self, id: PlayerId) -> u8 {
        self.players[id].fences()
    }

    /// Player to act.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Check if a player's pawn stands on its goal row.
    #[must_use]
    pub fn reached_goal(&self, player: PlayerId) -> bool {
        self.board.pawn(player).y() == player.goal_row()
    }

    // === Mutation (engine only) ===

    pub(crate) fn board_mut(&mut self) -> &mut BoardState {
        &mut self.board
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Record an accepted action and hand the turn to the opponent.
    pub(crate) fn finish_turn(&mut self, record: ActionRecord) {
        self.turn = record.player.opponent();
        self.history.push_back(record);
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Number of the next ply to be recorded.
    pub(crate) fn next_ply(&self) -> u32 {
        self.history.len() as u32 + 1
    }
}
