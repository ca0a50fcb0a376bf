//! The 2D drawing boundary of the simulator.
//!
//! A [`Surface`] is everything the frame stepper needs from a render target:
//! clear, circles in fill or stroke, and batched line segments. The CPU
//! rasterizer in `particle-field-render` is the production implementation;
//! tests substitute recording mocks.

use serde::{Deserialize, Serialize};

use crate::color::Srgb;
use crate::error::FieldError;

/// Names of the circle draw modes, in the order `list_names` reports them.
const CIRCLE_MODE_NAMES: &[&str] = &["fill", "stroke", "disabled"];

/// How particles are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleMode {
    /// Solid discs.
    #[default]
    Fill,
    /// Outlines only.
    Stroke,
    /// No particle circles (proximity lines may still draw).
    Disabled,
}

impl CircleMode {
    /// Parses a mode name as used in params objects and on the CLI.
    ///
    /// Returns `FieldError::UnknownCircleMode` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        match name {
            "fill" => Ok(CircleMode::Fill),
            "stroke" => Ok(CircleMode::Stroke),
            "disabled" => Ok(CircleMode::Disabled),
            _ => Err(FieldError::UnknownCircleMode(name.to_string())),
        }
    }

    /// The canonical name of this mode.
    pub fn as_name(&self) -> &'static str {
        match self {
            CircleMode::Fill => "fill",
            CircleMode::Stroke => "stroke",
            CircleMode::Disabled => "disabled",
        }
    }

    /// Returns the names of all modes.
    pub fn list_names() -> &'static [&'static str] {
        CIRCLE_MODE_NAMES
    }
}

/// A line segment in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Segment {
    /// Creates a segment between two points.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// A 2D drawing target.
///
/// Implementations must tolerate coordinates outside the surface: particles
/// overshoot the simulation bounds by design, and drawing must clip rather
/// than fail.
///
/// This trait is **object-safe**: the frame stepper takes `&mut dyn Surface`.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> usize;

    /// Surface height in pixels.
    fn height(&self) -> usize;

    /// Fills the whole surface with one color.
    fn clear(&mut self, color: Srgb);

    /// Draws a solid disc.
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Srgb);

    /// Draws a circle outline.
    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Srgb);

    /// Draws a batch of segments in one color.
    ///
    /// Batching by color is the contract the stepper relies on to minimize
    /// draw-state switches.
    fn stroke_segments(&mut self, color: Srgb, segments: &[Segment]);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal surface used to verify trait object safety.
    struct CountingSurface {
        clears: usize,
        circles: usize,
        batches: usize,
    }

    impl CountingSurface {
        fn new() -> Self {
            Self {
                clears: 0,
                circles: 0,
                batches: 0,
            }
        }
    }

    impl Surface for CountingSurface {
        fn width(&self) -> usize {
            64
        }

        fn height(&self) -> usize {
            48
        }

        fn clear(&mut self, _color: Srgb) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, _cx: f64, _cy: f64, _radius: f64, _color: Srgb) {
            self.circles += 1;
        }

        fn stroke_circle(&mut self, _cx: f64, _cy: f64, _radius: f64, _color: Srgb) {
            self.circles += 1;
        }

        fn stroke_segments(&mut self, _color: Srgb, _segments: &[Segment]) {
            self.batches += 1;
        }
    }

    #[test]
    fn surface_trait_is_object_safe() {
        let mut surface = CountingSurface::new();
        let dyn_surface: &mut dyn Surface = &mut surface;
        dyn_surface.clear(Srgb::from_hex("#000000").unwrap());
        dyn_surface.fill_circle(1.0, 2.0, 3.0, Srgb::from_hex("#ffffff").unwrap());
        dyn_surface.stroke_segments(
            Srgb::from_hex("#808080").unwrap(),
            &[Segment::new(0.0, 0.0, 10.0, 10.0)],
        );
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles, 1);
        assert_eq!(surface.batches, 1);
        assert_eq!(surface.width(), 64);
        assert_eq!(surface.height(), 48);
    }

    #[test]
    fn circle_mode_default_is_fill() {
        assert_eq!(CircleMode::default(), CircleMode::Fill);
    }

    #[test]
    fn circle_mode_from_name_round_trips_every_listed_name() {
        for name in CircleMode::list_names() {
            let mode = CircleMode::from_name(name).unwrap();
            assert_eq!(mode.as_name(), *name);
        }
    }

    #[test]
    fn circle_mode_from_name_rejects_unknown() {
        assert!(matches!(
            CircleMode::from_name("dotted"),
            Err(FieldError::UnknownCircleMode(_))
        ));
    }

    #[test]
    fn circle_mode_serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&CircleMode::Fill).unwrap(), "\"fill\"");
        assert_eq!(
            serde_json::to_string(&CircleMode::Stroke).unwrap(),
            "\"stroke\""
        );
        assert_eq!(
            serde_json::to_string(&CircleMode::Disabled).unwrap(),
            "\"disabled\""
        );
    }

    #[test]
    fn circle_mode_serde_round_trip() {
        for mode in [CircleMode::Fill, CircleMode::Stroke, CircleMode::Disabled] {
            let json = serde_json::to_string(&mode).unwrap();
            let restored: CircleMode = serde_json::from_str(&json).unwrap();
            assert_eq!(mode, restored);
        }
    }

    #[test]
    fn segment_stores_endpoints() {
        let s = Segment::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(s.x0, 1.0);
        assert_eq!(s.y1, 4.0);
    }
}
