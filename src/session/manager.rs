//! The turn manager: game lifecycle and turn alternation.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::ai::MoveStrategy;
use crate::core::{Board, Coord, GameError, GameRng, GameRngState, PlayerConfig, PlayerId, Symbol};
use crate::rules::{evaluate, GameResult};

/// Where the session currently is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the active player's move (human input or AI).
    AwaitingMove,
    /// Terminal: carries the final result until the next `start_game`.
    GameOver(GameResult),
}

/// Owns the board, the two player slots, and the session RNG, and drives
/// turn alternation.
///
/// The host calls [`TurnManager::submit_move`] with coordinates it obtained
/// from user input or from [`TurnManager::choose_ai_move`]. After a win or
/// draw the session stays in [`TurnPhase::GameOver`] and rejects moves until
/// [`TurnManager::start_game`] is called again.
///
/// ```
/// use tictactoe_engine::{Coord, GameResult, TurnManagerBuilder};
///
/// let mut session = TurnManagerBuilder::new().seed(42).build();
/// let result = session.submit_move(Coord::new(1, 1))?;
/// assert_eq!(result, GameResult::InProgress);
/// # Ok::<(), tictactoe_engine::GameError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TurnManager {
    board: Board,
    players: [PlayerConfig; 2],
    active_player: PlayerId,
    active_symbol: Symbol,
    phase: TurnPhase,
    last_move: Option<Coord>,
    rng: GameRng,
}

impl TurnManager {
    /// Create a session and start the first game.
    ///
    /// Most hosts use [`TurnManagerBuilder`] instead.
    #[must_use]
    pub fn new(player_one_is_ai: bool, player_two_is_ai: bool, rng: GameRng) -> Self {
        let mut session = Self {
            board: Board::new(),
            players: [PlayerConfig::default(); 2],
            active_player: PlayerId::new(0),
            active_symbol: Symbol::first(),
            phase: TurnPhase::AwaitingMove,
            last_move: None,
            rng,
        };
        session.start_game(player_one_is_ai, player_two_is_ai);
        session
    }

    /// Reset the board and begin a new game.
    ///
    /// The starting player slot is drawn 50/50; the active symbol is always
    /// X regardless of which slot starts.
    pub fn start_game(&mut self, player_one_is_ai: bool, player_two_is_ai: bool) {
        self.board.reset();
        self.players = [
            PlayerConfig::new(player_one_is_ai),
            PlayerConfig::new(player_two_is_ai),
        ];
        self.active_symbol = Symbol::first();
        self.active_player = if self.rng.gen_bool(0.5) {
            PlayerId::new(0)
        } else {
            PlayerId::new(1)
        };
        self.last_move = None;
        self.phase = TurnPhase::AwaitingMove;

        debug!(
            first = %self.active_player,
            symbol = %self.active_symbol,
            player_one_is_ai,
            player_two_is_ai,
            "game started"
        );
    }

    /// Apply a move for the active player.
    ///
    /// Returns the post-move [`GameResult`]. Fails with
    /// [`GameError::GameOver`] outside [`TurnPhase::AwaitingMove`] and with
    /// [`GameError::InvalidMove`] for an occupied or out-of-range cell; on
    /// failure no state changes, including the active symbol and player.
    pub fn submit_move(&mut self, coord: Coord) -> Result<GameResult, GameError> {
        if let TurnPhase::GameOver(_) = self.phase {
            return Err(GameError::GameOver);
        }

        self.board.place_symbol(coord, self.active_symbol)?;
        self.last_move = Some(coord);
        trace!(%coord, symbol = %self.active_symbol, player = %self.active_player, "move applied");

        let result = evaluate(&self.board);
        if result.is_over() {
            debug!(%result, moves = self.board.move_count(), "game over");
            self.phase = TurnPhase::GameOver(result);
        } else {
            self.active_symbol = self.active_symbol.opposite();
            self.active_player = self.active_player.other();
        }

        Ok(result)
    }

    /// Run a strategy for the active player without committing the move.
    ///
    /// The host commits the returned coordinate via [`TurnManager::submit_move`],
    /// typically after its cosmetic "thinking" delay.
    pub fn choose_ai_move(&mut self, strategy: &dyn MoveStrategy) -> Result<Coord, GameError> {
        if let TurnPhase::GameOver(_) = self.phase {
            return Err(GameError::GameOver);
        }
        strategy.choose_move(&self.board, self.active_symbol, &mut self.rng)
    }

    /// The symbol whose turn it is.
    #[must_use]
    pub fn active_symbol(&self) -> Symbol {
        self.active_symbol
    }

    /// The player slot whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Whether the active slot is configured as AI.
    ///
    /// Hosts use this to decide between calling
    /// [`TurnManager::choose_ai_move`] and waiting for external input.
    #[must_use]
    pub fn active_player_is_ai(&self) -> bool {
        self.players[self.active_player.index()].is_ai
    }

    /// Configuration of a player slot.
    #[must_use]
    pub fn player_config(&self, player: PlayerId) -> PlayerConfig {
        self.players[player.index()]
    }

    /// Result of the game in progress, or the final result when over.
    #[must_use]
    pub fn current_result(&self) -> GameResult {
        match self.phase {
            TurnPhase::AwaitingMove => GameResult::InProgress,
            TurnPhase::GameOver(result) => result,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// Read access to the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates of all empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> smallvec::SmallVec<[Coord; crate::core::CELL_COUNT]> {
        self.board.empty_cells()
    }

    /// The most recently applied move, if any this game.
    #[must_use]
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    /// Snapshot of the session RNG, for replay checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

/// Builder for a [`TurnManager`].
///
/// ```
/// use tictactoe_engine::TurnManagerBuilder;
///
/// let session = TurnManagerBuilder::new()
///     .player_two_ai(true)
///     .seed(7)
///     .build();
/// assert!(session.player_config(tictactoe_engine::PlayerId::new(1)).is_ai);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnManagerBuilder {
    player_one_ai: bool,
    player_two_ai: bool,
    seed: Option<u64>,
}

impl TurnManagerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure slot one as AI-driven.
    #[must_use]
    pub fn player_one_ai(mut self, is_ai: bool) -> Self {
        self.player_one_ai = is_ai;
        self
    }

    /// Configure slot two as AI-driven.
    #[must_use]
    pub fn player_two_ai(mut self, is_ai: bool) -> Self {
        self.player_two_ai = is_ai;
        self
    }

    /// Fix the RNG seed for reproducible games.
    ///
    /// Without a seed the session draws one from OS entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the session and start the first game.
    #[must_use]
    pub fn build(self) -> TurnManager {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        TurnManager::new(self.player_one_ai, self.player_two_ai, rng)
    }
}
