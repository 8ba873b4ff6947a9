//! Quoridor game: turn sequencing and the public action API.

use tracing::{debug, info, instrument, trace};

use super::{fences, movement};
use crate::core::{
    Action, ActionRecord, BoardState, Cell, FenceEdge, FenceKind, GameConfig, GameSession,
    GameStatus, PlayerId, PlayerMap,
};
use crate::rules::{MoveList, Rejection, RulesEngine};

/// A Quoridor game.
///
/// Owns the session exclusively; every change goes through `try_move`,
/// `try_fence` (or their boolean forms) and `reset`.
#[derive(Clone, Debug)]
pub struct Quoridor {
    config: GameConfig,
    initial: GameSession,
    session: GameSession,
}

/// Builder for creating a Quoridor game.
///
/// The defaults give the standard opening. Starting pawn cells and
/// pre-placed fences let hosts and tests begin from any position.
pub struct QuoridorBuilder {
    config: GameConfig,
    pawns: PlayerMap<Cell>,
    fences: Vec<FenceEdge>,
}

impl Default for QuoridorBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            pawns: PlayerMap::new(BoardState::home),
            fences: Vec::new(),
        }
    }
}

impl QuoridorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn fences_per_player(mut self, fences: u8) -> Self {
        self.config.fences_per_player = fences;
        self
    }

    pub fn first_player(mut self, player: PlayerId) -> Self {
        self.config.first_player = player;
        self
    }

    /// Start a pawn somewhere other than its home square.
    pub fn pawn(mut self, player: PlayerId, cell: Cell) -> Self {
        self.pawns[player] = cell;
        self
    }

    /// Place a fence before the first turn. It costs nobody a fence.
    pub fn fence(mut self, edge: FenceEdge) -> Self {
        self.fences.push(edge);
        self
    }

    /// Build the game.
    pub fn build(self) -> Quoridor {
        let (one, two) = (self.pawns[PlayerId::One], self.pawns[PlayerId::Two]);
        assert_ne!(one, two, "Pawns must start on different cells");

        let mut board = BoardState::with_pawns(one, two);
        for edge in self.fences {
            board.insert_fence(edge);
        }

        let session = GameSession::new(board, self.config.fences_per_player, self.config.first_player);
        assert!(
            !PlayerId::all().all(|p| session.reached_goal(p)),
            "At most one pawn may start on its goal row"
        );

        Quoridor {
            config: self.config,
            initial: session.clone(),
            session,
        }
    }
}

impl Quoridor {
    /// Standard game: pawns at home, 10 fences each, player 1 to move.
    #[must_use]
    pub fn new() -> Self {
        QuoridorBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> QuoridorBuilder {
        QuoridorBuilder::new()
    }

    // === Queries ===

    /// Player to act.
    #[must_use]
    pub fn current_turn(&self) -> PlayerId {
        self.session.turn()
    }

    /// Check if a player's pawn stands on its goal row.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.session.reached_goal(player)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    /// Read-only view of pawns, fences, inventories and history.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Owned copy of the session for a presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> GameSession {
        self.session.clone()
    }

    // === Actions ===

    /// Move `player`'s pawn to `target`. Returns false, changing nothing,
    /// if the move is illegal.
    pub fn submit_move(&mut self, player: PlayerId, target: Cell) -> bool {
        self.try_move(player, target).is_ok()
    }

    /// Place a `kind` fence at `(x, y)` for `player`. Returns false,
    /// changing nothing, if the placement is illegal.
    pub fn submit_fence(&mut self, player: PlayerId, kind: FenceKind, x: i32, y: i32) -> bool {
        self.try_fence(player, kind, x, y).is_ok()
    }

    /// Like [`submit_move`](Self::submit_move), reporting why a move was
    /// refused.
    #[instrument(level = "debug", skip(self))]
    pub fn try_move(&mut self, player: PlayerId, target: Cell) -> Result<(), Rejection> {
        self.check_can_act(player)
            .and_then(|()| movement::validate_move(self.session.board(), player, target))
            .inspect_err(|reason| debug!(%reason, "move rejected"))?;

        self.session.board_mut().set_pawn(player, target);
        self.commit(player, Action::Move(target));
        Ok(())
    }

    /// Move to raw coordinates; coordinates off the board are refused.
    pub fn try_move_xy(&mut self, player: PlayerId, x: i32, y: i32) -> Result<(), Rejection> {
        self.check_can_act(player)?;
        let target = Cell::checked(x, y).ok_or(Rejection::OffBoard(x, y))?;
        self.try_move(player, target)
    }

    /// Like [`submit_fence`](Self::submit_fence), reporting why a placement
    /// was refused.
    #[instrument(level = "debug", skip(self))]
    pub fn try_fence(
        &mut self,
        player: PlayerId,
        kind: FenceKind,
        x: i32,
        y: i32,
    ) -> Result<(), Rejection> {
        let edge = self
            .check_can_act(player)
            .and_then(|()| fences::validate_fence(&self.session, player, kind, x, y))
            .inspect_err(|reason| debug!(%reason, "fence rejected"))?;

        // Spend first: if this fails the board is still untouched.
        self.session.player_mut(player).spend_fence()?;
        self.session.board_mut().insert_fence(edge);
        self.commit(player, Action::Fence(edge));
        Ok(())
    }

    /// Place a fence whose kind is given as text (`v`/`h`).
    pub fn try_fence_str(
        &mut self,
        player: PlayerId,
        kind: &str,
        x: i32,
        y: i32,
    ) -> Result<(), Rejection> {
        self.check_can_act(player)?;
        let kind = kind
            .parse::<FenceKind>()
            .inspect_err(|err| debug!(%err, "fence rejected"))?;
        self.try_fence(player, kind, x, y)
    }

    /// Return to the starting position the game was built with.
    pub fn reset(&mut self) {
        self.session = self.initial.clone();
        info!("game reset");
    }

    fn check_can_act(&self, player: PlayerId) -> Result<(), Rejection> {
        if self.session.is_over() {
            return Err(Rejection::GameOver);
        }
        if self.session.turn() != player {
            return Err(Rejection::NotYourTurn(player));
        }
        Ok(())
    }

    /// Record an applied action, pass the turn and settle the status.
    fn commit(&mut self, player: PlayerId, action: Action) {
        let ply = self.session.next_ply();
        self.session.finish_turn(ActionRecord::new(player, action, ply));

        if self.session.reached_goal(player) {
            self.session.set_status(GameStatus::Won(player));
            info!(%player, ply, "game won");
        } else {
            trace!(%player, %action, ply, "action applied");
        }
    }
}

impl Default for Quoridor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Quoridor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.session.board())
    }
}

impl RulesEngine for Quoridor {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn session(&self) -> &GameSession {
        &self.session
    }

    fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<(), Rejection> {
        match action {
            Action::Move(target) => self.try_move(player, target),
            Action::Fence(edge) => self.try_fence(
                player,
                edge.kind(),
                i32::from(edge.x()),
                i32::from(edge.y()),
            ),
        }
    }

    fn legal_moves(&self, player: PlayerId) -> MoveList {
        if self.check_can_act(player).is_err() {
            return MoveList::new();
        }
        movement::legal_moves(self.session.board(), player)
    }

    fn legal_fences(&self, player: PlayerId) -> Vec<FenceEdge> {
        if self.check_can_act(player).is_err() {
            return Vec::new();
        }
        fences::legal_fences(&self.session, player)
    }
}
