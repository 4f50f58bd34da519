//! Ripples - data preparation for a concentric-ring word-placement puzzle
//!
//! Core modules:
//! - `catalog`: Static puzzle definitions and query-driven selection
//! - `board`: Deterministic board building (rings, shuffle, coordinates)
//! - `collection`: Observable board list consumed by the UI layer

pub mod board;
pub mod catalog;
pub mod collection;

pub use board::{Board, CoordinateGenerator, Placement, PuzzleError, Ring, WordToken};
pub use catalog::{PUZZLE_CATALOG, PuzzleDefinition, RingSpec};
pub use collection::{BoardCollection, BoardEvent};

use glam::Vec2;

/// Board layout constants
pub mod consts {
    /// Margin (percent of viewport) kept between tokens and the edge
    pub const COORD_BUFFER: f32 = 10.0;
    /// Angular step between token slots (degrees)
    pub const THETA_STEP: f32 = 45.0;
    /// Near-vertical arc (exclusive bounds, degrees) left free for the
    /// instructions overlay; the coordinate generator never lands inside it
    pub const RESERVED_ARC: (f32, f32) = (45.0, 135.0);

    /// Member words per ring
    pub const OUTER_WORDS: usize = 3;
    pub const MIDDLE_WORDS: usize = 2;
    pub const INNER_WORDS: usize = 1;
    /// Tokens on every board: one outlier plus the three rings
    pub const TOKENS_PER_BOARD: usize = 1 + OUTER_WORDS + MIDDLE_WORDS + INNER_WORDS;

    /// Category sentinel for the word that belongs to no ring
    pub const OUTLIER_CATEGORY: &str = "outlier";
}

/// Map an angle (degrees) to viewport percentage coordinates.
///
/// The unit circle is lifted into [0, 100] on both axes, then clamped so
/// tokens never sit within `COORD_BUFFER` percent of the viewport edge.
#[inline]
pub fn theta_to_percent(theta_degrees: f32) -> Vec2 {
    let radians = theta_degrees.to_radians();
    let lo = consts::COORD_BUFFER;
    let hi = 100.0 - consts::COORD_BUFFER;
    Vec2::new(
        ((radians.cos() + 1.0) * 50.0).clamp(lo, hi),
        ((radians.sin() + 1.0) * 50.0).clamp(lo, hi),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theta_to_percent_cardinal_points() {
        // cos/sin extremes hit 0 and 100 before clamping
        let east = theta_to_percent(0.0);
        assert!((east.x - 90.0).abs() < 1e-4);
        assert!((east.y - 50.0).abs() < 1e-4);

        let north = theta_to_percent(90.0);
        assert!((north.x - 50.0).abs() < 1e-4);
        assert!((north.y - 90.0).abs() < 1e-4);

        let west = theta_to_percent(180.0);
        assert!((west.x - 10.0).abs() < 1e-4);
        assert!((west.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_theta_to_percent_is_periodic() {
        let a = theta_to_percent(45.0);
        let b = theta_to_percent(45.0 + 360.0);
        assert!((a.x - b.x).abs() < 1e-3);
        assert!((a.y - b.y).abs() < 1e-3);
    }
}
