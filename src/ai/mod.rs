//! AI move selection.
//!
//! Strategies are pure relative to the board they are given: they read the
//! board, evaluate hypothetical placements on private copies, and return a
//! coordinate. Committing the move stays with the caller.

pub mod strategy;

pub use strategy::{GreedyStrategy, MoveStrategy, RandomStrategy};
