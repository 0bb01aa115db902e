//! Win and draw detection.
//!
//! Pure functions over a [`crate::Board`] snapshot. The rules module never
//! holds state of its own: the session calls [`engine::evaluate`] after
//! each move, and AI strategies call [`engine::is_winning_state`] on
//! hypothetical boards.

pub mod engine;

pub use engine::{evaluate, is_winning_state, GameResult, LineKind};
