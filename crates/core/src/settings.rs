//! The configuration bundle for a particle system run.
//!
//! [`SystemSettings`] collects everything the generator and the frame
//! stepper read: counts, bounds, sampled value specs, draw mode, and the
//! pluggable style strategies (solid colors, palette shading, scalar-source
//! sizes and speeds). Construction from a loose JSON params object follows
//! the same defaulting rules as the rest of the params layer.

use serde_json::Value;

use crate::bounds::BoundingBox;
use crate::color::Srgb;
use crate::error::FieldError;
use crate::palette::Palette;
use crate::params::{param_color, param_f64, param_str, param_usize};
use crate::prng::Xorshift64;
use crate::source::ScalarSource;
use crate::surface::CircleMode;

/// Default number of particles.
pub const DEFAULT_PARTICLE_COUNT: usize = 150;
/// Default particle speed in surface units per second.
pub const DEFAULT_VELOCITY: f64 = 5.0;
/// Default particle radius in pixels.
pub const DEFAULT_RADIUS: f64 = 3.0;
/// Default particle color.
pub const DEFAULT_PARTICLE_COLOR: &str = "#353535";
/// Default proximity-line color.
pub const DEFAULT_LINE_COLOR: &str = "#000000";
/// Default background color.
pub const DEFAULT_BACKGROUND: &str = "#000000";

/// A fixed value or a uniform range, sampled once per particle at
/// generation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueSpec {
    Fixed(f64),
    Range { min: f64, max: f64 },
}

impl ValueSpec {
    /// Samples the spec: the fixed value, or uniform in [min, max).
    pub fn sample(&self, rng: &mut Xorshift64) -> f64 {
        match *self {
            ValueSpec::Fixed(v) => v,
            ValueSpec::Range { min, max } => rng.next_range(min, max),
        }
    }

    /// Reads `params[name]` as either a bare number (`Fixed`) or a
    /// `{min, max}` object (`Range`), falling back to `default` when the
    /// key is missing or malformed. A reversed range is normalized.
    pub fn from_json(params: &Value, name: &str, default: ValueSpec) -> ValueSpec {
        match params.get(name) {
            Some(v) if v.is_number() => v.as_f64().map(ValueSpec::Fixed).unwrap_or(default),
            Some(v) if v.is_object() => {
                match (
                    v.get("min").and_then(Value::as_f64),
                    v.get("max").and_then(Value::as_f64),
                ) {
                    (Some(min), Some(max)) if min <= max => ValueSpec::Range { min, max },
                    (Some(min), Some(max)) => ValueSpec::Range { min: max, max: min },
                    _ => default,
                }
            }
            _ => default,
        }
    }
}

/// How particle radii are determined at draw time.
pub enum SizeStyle {
    /// Same radius for every particle.
    Fixed(f64),
    /// Radius sampled from a scalar source at the particle position.
    Sourced(Box<dyn ScalarSource>),
}

/// How particle colors are determined at draw time.
pub enum ColorStyle {
    /// Same color for every particle.
    Solid(Srgb),
    /// Palette position sampled from a scalar source at the particle position.
    Shaded {
        source: Box<dyn ScalarSource>,
        palette: Palette,
    },
}

/// How proximity-line colors are determined.
pub enum LineStyle {
    /// Same color for every line.
    Solid(Srgb),
    /// Palette sampled at `1 - distance/range`, so close pairs take the
    /// bright end of the ramp.
    DistanceFade(Palette),
}

/// Configuration bundle for a particle system run.
///
/// The bounds are fixed for a run; everything else is a knob. Fields are
/// public: callers assemble settings directly or through [`from_json`]
/// (`SystemSettings::from_json`).
pub struct SystemSettings {
    pub particle_count: usize,
    pub bounds: BoundingBox,
    /// Speed assigned to each particle at generation time.
    pub velocity: ValueSpec,
    pub size: SizeStyle,
    pub circle_mode: CircleMode,
    /// Maximum distance at which two particles are connected by a line.
    /// `None` disables proximity lines entirely.
    pub max_line_range: Option<f64>,
    pub particle_color: ColorStyle,
    pub line_color: LineStyle,
    /// Per-tick speed override. When set, it supplies each particle's speed
    /// at its current position instead of the stored velocity; the stored
    /// velocity is left untouched.
    pub speed: Option<Box<dyn ScalarSource>>,
    pub background: Srgb,
}

impl SystemSettings {
    /// Creates settings with the default knobs for the given bounds.
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            bounds,
            velocity: ValueSpec::Fixed(DEFAULT_VELOCITY),
            size: SizeStyle::Fixed(DEFAULT_RADIUS),
            circle_mode: CircleMode::Fill,
            max_line_range: None,
            particle_color: ColorStyle::Solid(
                Srgb::from_hex(DEFAULT_PARTICLE_COLOR).expect("default particle color is valid"),
            ),
            line_color: LineStyle::Solid(
                Srgb::from_hex(DEFAULT_LINE_COLOR).expect("default line color is valid"),
            ),
            speed: None,
            background: Srgb::from_hex(DEFAULT_BACKGROUND).expect("default background is valid"),
        }
    }

    /// Builds settings from a loose JSON params object.
    ///
    /// Recognized keys: `particle_count`, `velocity` (number or
    /// `{min, max}`), `size` (number), `circle_mode`, `max_line_range`
    /// (non-positive disables lines), `background`, `particle_color`,
    /// `line_color` (hex strings). Missing keys take defaults; unknown keys
    /// are ignored. Fails only on unparsable colors or circle modes.
    pub fn from_json(bounds: BoundingBox, params: &Value) -> Result<Self, FieldError> {
        let mut settings = Self::new(bounds);

        settings.particle_count =
            param_usize(params, "particle_count", DEFAULT_PARTICLE_COUNT);
        settings.velocity =
            ValueSpec::from_json(params, "velocity", ValueSpec::Fixed(DEFAULT_VELOCITY));
        settings.size = SizeStyle::Fixed(param_f64(params, "size", DEFAULT_RADIUS));

        if let Some(name) = param_str(params, "circle_mode") {
            settings.circle_mode = CircleMode::from_name(name)?;
        }

        let range = param_f64(params, "max_line_range", 0.0);
        settings.max_line_range = (range > 0.0).then_some(range);

        if let Some(color) = param_color(params, "background")? {
            settings.background = color;
        }
        if let Some(color) = param_color(params, "particle_color")? {
            settings.particle_color = ColorStyle::Solid(color);
        }
        if let Some(color) = param_color(params, "line_color")? {
            settings.line_color = LineStyle::Solid(color);
        }

        Ok(settings)
    }
}
