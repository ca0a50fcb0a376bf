//! Error types for the particle-field core.

use thiserror::Error;

/// Errors produced by simulation and rendering operations.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Width or height was zero (or overflowed) when creating a surface.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A bounding box did not span a positive area on both axes.
    #[error("invalid bounds: ({x1}, {y1})..({x2}, {y2}) does not span a positive area")]
    InvalidBounds { x1: f64, y1: f64, x2: f64, y2: f64 },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A requested palette name was not recognized.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// A circle draw mode name was not recognized.
    #[error("unknown circle mode: {0} (expected fill, stroke, or disabled)")]
    UnknownCircleMode(String),

    /// An I/O failure while writing a snapshot.
    #[error("io error: {0}")]
    Io(String),
}
