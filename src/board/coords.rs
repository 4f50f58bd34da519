//! Token placement coordinates
//!
//! An infinite, pull-based sequence of angular slots around the board. The
//! near-vertical arc stays empty on every revolution so the instructions
//! overlay never collides with a token.

use serde::{Deserialize, Serialize};

use crate::consts::{RESERVED_ARC, THETA_STEP};
use crate::theta_to_percent;

/// One placement slot: angle plus derived viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Angle in degrees; grows monotonically across pulls, never wraps
    pub theta: f32,
    /// Horizontal position, percent of viewport width
    pub x: f32,
    /// Vertical position, percent of viewport height
    pub y: f32,
}

/// Stateful producer of placement slots.
///
/// Emits the slot at the current angle, then advances by `THETA_STEP`,
/// stepping again over any angle whose remainder mod 360 falls strictly
/// inside `RESERVED_ARC`. The sequence never terminates; callers pull exactly
/// as many slots as they have tokens to place.
#[derive(Debug, Clone)]
pub struct CoordinateGenerator {
    theta: f32,
}

impl CoordinateGenerator {
    pub fn new() -> Self {
        Self { theta: 0.0 }
    }

    /// Emit the current slot and advance past the reserved arc
    pub fn next_placement(&mut self) -> Placement {
        let theta = self.theta;
        let pos = theta_to_percent(theta);

        self.theta += THETA_STEP;
        while in_reserved_arc(self.theta) {
            self.theta += THETA_STEP;
        }

        Placement {
            theta,
            x: pos.x,
            y: pos.y,
        }
    }
}

impl Default for CoordinateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CoordinateGenerator {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        Some(self.next_placement())
    }
}

/// True if the angle (mod 360) lies strictly inside the reserved arc
fn in_reserved_arc(theta: f32) -> bool {
    let wrapped = theta.rem_euclid(360.0);
    wrapped > RESERVED_ARC.0 && wrapped < RESERVED_ARC.1
}
