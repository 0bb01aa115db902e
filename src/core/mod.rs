//! Core value types: symbols, coordinates, the board, players, errors, RNG.
//!
//! Everything here is plain in-memory data with no dependency on any host
//! engine. Presentation concerns (rendering, input, timing) live entirely
//! outside this crate.

pub mod board;
pub mod coord;
pub mod error;
pub mod player;
pub mod rng;
pub mod symbol;

pub use board::{Board, CELL_COUNT};
pub use coord::{Coord, BOARD_SIZE};
pub use error::GameError;
pub use player::{PlayerConfig, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use symbol::Symbol;
