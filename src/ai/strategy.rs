//! Move strategy implementations.
//!
//! Strategies are trait-based so hosts can plug in their own policies.
//! The engine ships the two naive ones the game has always had:
//!
//! - [`GreedyStrategy`]: take an immediate win if one exists, else random
//! - [`RandomStrategy`]: uniform random among empty cells
//!
//! Neither strategy blocks an opponent's imminent win. That weakness is
//! deliberate and preserved; upgrading to minimax is not a goal.

use tracing::trace;

use crate::core::{Board, Coord, GameError, GameRng, Symbol};
use crate::rules::is_winning_state;

/// A policy for choosing the next move.
///
/// Implementations must not mutate the caller's board; candidate moves are
/// evaluated on stack clones (`Board` is `Copy`). The chosen coordinate is
/// guaranteed to be empty on the board at call time; committing it is the
/// caller's job, normally via `TurnManager::submit_move`.
pub trait MoveStrategy: Send + Sync {
    /// Choose a cell for `symbol` on `board`.
    ///
    /// Fails with [`GameError::NoMovesAvailable`] if the board is full.
    fn choose_move(
        &self,
        board: &Board,
        symbol: Symbol,
        rng: &mut GameRng,
    ) -> Result<Coord, GameError>;
}

/// One-ply greedy strategy.
///
/// Scans empty cells in row-major order and returns the first whose
/// hypothetical placement completes a line for `symbol`. The scan order is
/// the deterministic tie-break: with two winning cells available, the
/// row-major-earlier one is always chosen. With no immediate win, picks
/// uniformly at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl MoveStrategy for GreedyStrategy {
    fn choose_move(
        &self,
        board: &Board,
        symbol: Symbol,
        rng: &mut GameRng,
    ) -> Result<Coord, GameError> {
        let options = board.empty_cells();

        for &coord in &options {
            let mut scratch = *board;
            scratch.place_symbol(coord, symbol)?;
            if is_winning_state(&scratch) {
                trace!(%coord, %symbol, "greedy strategy found winning move");
                return Ok(coord);
            }
        }

        rng.choose(&options)
            .copied()
            .ok_or(GameError::NoMovesAvailable)
    }
}

/// Uniform random strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    fn choose_move(
        &self,
        board: &Board,
        symbol: Symbol,
        rng: &mut GameRng,
    ) -> Result<Coord, GameError> {
        let _ = symbol;
        rng.choose(&board.empty_cells())
            .copied()
            .ok_or(GameError::NoMovesAvailable)
    }
}
