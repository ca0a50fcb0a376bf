//! Reproducible description of a render.
//!
//! A [`Scene`] captures everything needed to recreate a frame or an
//! animation exactly: surface dimensions, the params object, the PRNG seed,
//! the tick count, and an optional palette name. Two identical scenes fed
//! to the same binary produce bit-identical output.

use crate::error::FieldError;
use serde::{Deserialize, Serialize};

/// Reproducible render descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    pub params: serde_json::Value,
    pub seed: u64,
    pub ticks: usize,
    /// Built-in palette applied to particle and line coloring; `None` keeps
    /// the solid default colors.
    pub palette: Option<String>,
}

impl Scene {
    /// Creates a scene with empty params (`{}`), zero ticks, and no palette.
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            ticks: 0,
            palette: None,
        }
    }

    /// Validates that the scene has non-zero dimensions and that
    /// `width * height` does not overflow.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(FieldError::InvalidDimensions)?;
        Ok(())
    }
}
