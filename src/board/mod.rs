//! Deterministic board preparation
//!
//! Pure data transformation: no I/O, no platform dependencies. The only
//! randomness is the caller-supplied RNG driving the shuffle; everything else
//! (ring assignment, coordinates) is fully deterministic.

pub mod builder;
pub mod coords;
pub mod state;

pub use builder::{PuzzleError, assign_ring, build_board};
pub use coords::{CoordinateGenerator, Placement};
pub use state::{Board, CategoryLabels, PlayerProgress, Ring, WordToken};
