//! # tictactoe-engine
//!
//! A pure, engine-agnostic tic-tac-toe rules engine with pluggable AI
//! strategies.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: No rendering, input, timing, or UI concerns.
//!    A host engine drives the session and observes state via queries.
//!
//! 2. **Deterministic Where It Matters**: All randomness (first-player
//!    draw, AI fallback picks) flows through a seedable [`GameRng`], so
//!    whole games replay exactly.
//!
//! 3. **Recoverable Errors Only**: Invalid input is reported as a
//!    [`GameError`] value; the engine never panics through its public API.
//!
//! ## Modules
//!
//! - `core`: symbols, coordinates, the board, players, errors, RNG
//! - `rules`: win/draw detection over board snapshots
//! - `ai`: `MoveStrategy` trait with greedy and random implementations
//! - `session`: `TurnManager` lifecycle and turn alternation
//!
//! ## Example
//!
//! ```
//! use tictactoe_engine::{GreedyStrategy, TurnManagerBuilder};
//!
//! let mut session = TurnManagerBuilder::new()
//!     .player_one_ai(true)
//!     .player_two_ai(true)
//!     .seed(42)
//!     .build();
//!
//! while !session.current_result().is_over() {
//!     let coord = session.choose_ai_move(&GreedyStrategy)?;
//!     session.submit_move(coord)?;
//! }
//! println!("{}", session.current_result());
//! # Ok::<(), tictactoe_engine::GameError>(())
//! ```

pub mod ai;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Coord, GameError, GameRng, GameRngState, PlayerConfig, PlayerId, Symbol, BOARD_SIZE,
    CELL_COUNT,
};

pub use crate::rules::{evaluate, is_winning_state, GameResult, LineKind};

pub use crate::ai::{GreedyStrategy, MoveStrategy, RandomStrategy};

pub use crate::session::{TurnManager, TurnManagerBuilder, TurnPhase};
