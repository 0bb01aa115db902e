//! Game session management.
//!
//! A [`TurnManager`] is one independent game: it owns its board, player
//! configuration, and RNG. Hosts wanting concurrent games create one
//! session per game; sessions share no mutable state.

pub mod manager;

pub use manager::{TurnManager, TurnManagerBuilder, TurnPhase};
