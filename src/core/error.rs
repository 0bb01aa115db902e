//! Error types.
//!
//! Every failure the engine can signal is local and recoverable: the host
//! decides whether to ignore the input, re-prompt, or treat it as a logic
//! error. Nothing in this crate terminates the process.

/// Errors signalled by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The target cell is occupied or the coordinates are out of range.
    #[error("invalid move at ({row}, {col}): cell occupied or out of range")]
    InvalidMove { row: u8, col: u8 },

    /// An AI strategy was asked to choose a move on a full board.
    #[error("no moves available: board is full")]
    NoMovesAvailable,

    /// A move was submitted after the game already ended.
    #[error("game is already over")]
    GameOver,
}
