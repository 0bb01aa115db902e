//! Player symbols.
//!
//! Tic-tac-toe has exactly two symbols, X and O. By convention X always
//! moves first. Empty cells are represented as `Option<Symbol>` (`None`)
//! on the board, so an invalid symbol state cannot be constructed.

use serde::{Deserialize, Serialize};

/// One of the two playable symbols.
///
/// ```
/// use tictactoe_engine::Symbol;
///
/// assert_eq!(Symbol::X.opposite(), Symbol::O);
/// assert_eq!(Symbol::O.opposite(), Symbol::X);
/// assert_eq!(Symbol::first(), Symbol::X);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// The symbol that moves first. Always X.
    #[must_use]
    pub const fn first() -> Self {
        Symbol::X
    }

    /// Get the other symbol.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}
