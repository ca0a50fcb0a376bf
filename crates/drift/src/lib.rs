#![deny(unsafe_code)]
//! Drifting-particle system.
//!
//! Particles spawn uniformly inside a bounding box with random speeds and
//! headings, travel in straight lines, and mirror their heading when they
//! leave the box. Each tick draws proximity lines (batched by color) and
//! particle circles onto a [`Surface`], then replaces the particle vector
//! with the advanced state.
//!
//! The system is deterministic: the same seed and settings produce the
//! same particle field on every platform.

mod links;
pub mod state;
pub mod stats;

use std::time::Instant;

use particle_field_core::params::param_f64;
use particle_field_core::{
    BoundingBox, CircleMode, ColorStyle, FieldError, SizeStyle, Srgb, Surface, System,
    SystemSettings, Xorshift64,
};
use serde_json::{json, Value};

pub use state::ParticleState;
pub use stats::{RollingMean, TickStats};

/// Default fraction of a second simulated per tick (10 frames at 60 fps).
pub const DEFAULT_TIME_FACTOR: f64 = 10.0 / 60.0;

/// Integration parameters for the drift system.
#[derive(Debug, Clone, Copy)]
pub struct DriftParams {
    /// Seconds of travel simulated per tick; a particle covers
    /// `velocity * time_factor` surface units each step.
    pub time_factor: f64,
}

impl Default for DriftParams {
    fn default() -> Self {
        Self {
            time_factor: DEFAULT_TIME_FACTOR,
        }
    }
}

impl DriftParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            time_factor: param_f64(params, "time_factor", DEFAULT_TIME_FACTOR),
        }
    }
}

/// The drifting-particle system.
///
/// Owns the settings, the particle vector, and the rolling timing stats.
/// The particle count is fixed at construction; stepping replaces the
/// vector wholesale and never adds or removes particles.
pub struct Drift {
    settings: SystemSettings,
    params: DriftParams,
    particles: Vec<ParticleState>,
    stats: TickStats,
    /// Simulation clock fed to scalar sources, advanced by `time_factor`
    /// per tick.
    clock: f64,
}

impl Drift {
    /// Creates a system and generates its initial particles from the seed.
    ///
    /// Positions are uniform within the bounds, velocities sampled from the
    /// settings' `ValueSpec`, headings uniform in [0, 2π).
    pub fn new(
        settings: SystemSettings,
        params: DriftParams,
        seed: u64,
    ) -> Result<Self, FieldError> {
        settings.bounds.validate()?;
        let mut rng = Xorshift64::new(seed);
        let particles = generate_particles(&settings, &mut rng);
        log::debug!(
            "generated {} particles in {:.0}x{:.0} bounds",
            particles.len(),
            settings.bounds.width(),
            settings.bounds.height()
        );
        Ok(Self {
            settings,
            params,
            particles,
            stats: TickStats::new(),
            clock: 0.0,
        })
    }

    /// Creates a system for a `width x height` surface from a JSON params
    /// object (see [`SystemSettings::from_json`] and
    /// [`DriftParams::from_json`] for the recognized keys).
    pub fn from_json(
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let bounds = BoundingBox::from_rect(0.0, 0.0, width as f64, height as f64)?;
        let settings = SystemSettings::from_json(bounds, params)?;
        Self::new(settings, DriftParams::from_json(params), seed)
    }

    /// Creates a system from explicit particle state instead of generating it.
    pub fn with_particles(
        settings: SystemSettings,
        params: DriftParams,
        particles: Vec<ParticleState>,
    ) -> Result<Self, FieldError> {
        settings.bounds.validate()?;
        Ok(Self {
            settings,
            params,
            particles,
            stats: TickStats::new(),
            clock: 0.0,
        })
    }

    /// Read-only access to the current particle vector.
    pub fn particles(&self) -> &[ParticleState] {
        &self.particles
    }

    /// Read-only access to the settings.
    pub fn settings(&self) -> &SystemSettings {
        &self.settings
    }

    /// Rolling per-phase timing statistics.
    pub fn stats(&self) -> &TickStats {
        &self.stats
    }

    fn draw_links(&self, surface: &mut dyn Surface) {
        let Some(range) = self.settings.max_line_range else {
            return;
        };
        let buckets = links::collect_links(&self.particles, range, &self.settings.line_color);
        for (rgb, segments) in &buckets {
            surface.stroke_segments(Srgb::from_bytes(*rgb), segments);
        }
    }

    fn draw_circles(&self, surface: &mut dyn Surface) {
        if self.settings.circle_mode == CircleMode::Disabled {
            return;
        }
        for p in &self.particles {
            let radius = match &self.settings.size {
                SizeStyle::Fixed(r) => *r,
                SizeStyle::Sourced(source) => source.sample(p.x, p.y, self.clock),
            };
            let color = match &self.settings.particle_color {
                ColorStyle::Solid(c) => *c,
                ColorStyle::Shaded { source, palette } => {
                    palette.sample(source.sample(p.x, p.y, self.clock))
                }
            };
            match self.settings.circle_mode {
                CircleMode::Fill => surface.fill_circle(p.x, p.y, radius, color),
                CircleMode::Stroke => surface.stroke_circle(p.x, p.y, radius, color),
                CircleMode::Disabled => {}
            }
        }
    }

    fn advance_particles(&mut self) {
        let time_factor = self.params.time_factor;
        let bounds = self.settings.bounds;
        let clock = self.clock;
        let next: Vec<ParticleState> = self
            .particles
            .iter()
            .map(|p| {
                let speed = match &self.settings.speed {
                    Some(source) => source.sample(p.x, p.y, clock),
                    None => p.velocity,
                };
                p.advance(&bounds, speed * time_factor)
            })
            .collect();
        self.particles = next;
        self.clock += time_factor;
    }
}

/// Samples the initial particle vector for the settings.
fn generate_particles(settings: &SystemSettings, rng: &mut Xorshift64) -> Vec<ParticleState> {
    let b = &settings.bounds;
    (0..settings.particle_count)
        .map(|_| ParticleState {
            x: rng.next_range(b.x1, b.x2),
            y: rng.next_range(b.y1, b.y2),
            velocity: settings.velocity.sample(rng),
            direction: rng.next_angle(),
        })
        .collect()
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1e3
}

impl System for Drift {
    fn step(&mut self, surface: &mut dyn Surface) -> Result<(), FieldError> {
        surface.clear(self.settings.background);

        let started = Instant::now();
        self.draw_links(surface);
        let lines_ms = elapsed_ms(started);

        let started = Instant::now();
        self.draw_circles(surface);
        let circles_ms = elapsed_ms(started);

        let started = Instant::now();
        self.advance_particles();
        let state_ms = elapsed_ms(started);

        self.stats.record(lines_ms, circles_ms, state_ms);
        Ok(())
    }

    fn params(&self) -> Value {
        json!({
            "particle_count": self.settings.particle_count,
            "time_factor": self.params.time_factor,
            "max_line_range": self.settings.max_line_range,
            "circle_mode": self.settings.circle_mode.as_name(),
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "particle_count": {
                "type": "integer",
                "default": particle_field_core::settings::DEFAULT_PARTICLE_COUNT,
                "description": "Number of particles; fixed for the lifetime of a run"
            },
            "velocity": {
                "type": "number | {min, max}",
                "default": particle_field_core::settings::DEFAULT_VELOCITY,
                "description": "Speed assigned to each particle at generation time"
            },
            "size": {
                "type": "number",
                "default": particle_field_core::settings::DEFAULT_RADIUS,
                "description": "Particle radius in pixels"
            },
            "time_factor": {
                "type": "number",
                "default": DEFAULT_TIME_FACTOR,
                "description": "Seconds of travel simulated per tick"
            },
            "max_line_range": {
                "type": "number",
                "default": 0.0,
                "description": "Connect particles closer than this; 0 disables lines"
            },
            "circle_mode": {
                "type": "string",
                "default": "fill",
                "description": "fill, stroke, or disabled"
            },
        })
    }

    fn report(&self) -> Value {
        self.stats.as_json()
    }
}
