//! Player identification and per-player configuration.
//!
//! A game has exactly two player slots. Slots are distinct from symbols:
//! either slot may end up playing X depending on the random first-player
//! draw at game start.

use serde::{Deserialize, Serialize};

/// Identifier for one of the two player slots.
///
/// Slot indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw slot index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other slot in a two-player game.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-slot configuration.
///
/// The only persisted per-player state is whether the slot is driven by an
/// AI strategy or by external (host) input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Whether this slot is played by an AI strategy.
    pub is_ai: bool,
}

impl PlayerConfig {
    /// Create a configuration.
    #[must_use]
    pub const fn new(is_ai: bool) -> Self {
        Self { is_ai }
    }
}
