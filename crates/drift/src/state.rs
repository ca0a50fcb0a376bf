//! Per-particle state and the one-tick transition.
//!
//! Advancing is a pure function: it produces a new `ParticleState` rather
//! than mutating in place, so the whole particle vector is replaced
//! wholesale each tick.

use glam::DVec2;
use particle_field_core::BoundingBox;
use serde::{Deserialize, Serialize};

/// A point particle: position, scalar speed, heading angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleState {
    pub x: f64,
    pub y: f64,
    /// Speed magnitude in surface units per second.
    pub velocity: f64,
    /// Heading in radians; the velocity vector is
    /// `velocity * (cos(direction), sin(direction))`.
    pub direction: f64,
}

impl ParticleState {
    /// Position as a vector.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Moves `distance` along the heading and bounces off the bounds.
    ///
    /// If the new x leaves the open interval `(x1, x2)` the heading is
    /// mirrored about the y-axis (cosine flips); same independently for y
    /// against `(y1, y2)`. The position is **not** clamped: a particle may
    /// sit outside the box for one tick, and the flip guarantees the next
    /// move heads back inside.
    pub fn advance(&self, bounds: &BoundingBox, distance: f64) -> ParticleState {
        let (sin, cos) = self.direction.sin_cos();
        let next = self.position() + DVec2::new(cos, sin) * distance;
        let next_cos = if bounds.contains_x(next.x) { cos } else { -cos };
        let next_sin = if bounds.contains_y(next.y) { sin } else { -sin };
        ParticleState {
            x: next.x,
            y: next.y,
            velocity: self.velocity,
            direction: next_sin.atan2(next_cos),
        }
    }
}
