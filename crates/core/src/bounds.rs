//! Axis-aligned bounding box constraining particle travel.
//!
//! The box is static for the lifetime of a run. Containment checks use
//! **open** intervals: a particle exactly on the boundary counts as outside,
//! which is what triggers the bounce.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Axis-aligned simulation boundary with `x1 < x2` and `y1 < y2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    /// Creates a bounding box from its corner coordinates.
    ///
    /// Returns `FieldError::InvalidBounds` unless `x1 < x2` and `y1 < y2`
    /// (non-finite coordinates fail these comparisons too).
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, FieldError> {
        let bounds = Self { x1, y1, x2, y2 };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Creates a bounding box from an origin-plus-extent rectangle.
    pub fn from_rect(x: f64, y: f64, w: f64, h: f64) -> Result<Self, FieldError> {
        Self::new(x, y, x + w, y + h)
    }

    /// Validates that the box spans a positive area on both axes.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.x1 < self.x2 && self.y1 < self.y2 {
            Ok(())
        } else {
            Err(FieldError::InvalidBounds {
                x1: self.x1,
                y1: self.y1,
                x2: self.x2,
                y2: self.y2,
            })
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// True when `x` lies strictly inside `(x1, x2)`.
    pub fn contains_x(&self, x: f64) -> bool {
        x > self.x1 && x < self.x2
    }

    /// True when `y` lies strictly inside `(y1, y2)`.
    pub fn contains_y(&self, y: f64) -> bool {
        y > self.y1 && y < self.y2
    }

    /// True when the point lies strictly inside the box on both axes.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_x(x) && self.contains_y(y)
    }

    /// Center of the box.
    pub fn center(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}
