//! Scalar sources: the injectable supplier hooks of the simulation.
//!
//! A [`ScalarSource`] produces one value at any point in space and time.
//! Settings plug sources in to drive per-particle sizes, speeds, and palette
//! positions. All implementations are deterministic: same inputs produce the
//! same output.

use glam::DVec2;
use noise::{NoiseFn, Perlin};

/// A deterministic scalar field over space and time.
///
/// Color-driving sources should return values in [0, 1] (palette range);
/// size and speed sources return values in whatever unit the consumer
/// expects. All implementations must be deterministic: same inputs = same
/// output.
pub trait ScalarSource: Send + Sync {
    /// Samples the source at position (x, y) at the given time.
    fn sample(&self, x: f64, y: f64, time: f64) -> f64;
}

/// Distances below this are treated as zero to avoid division blowup.
const SINGULARITY_EPS: f64 = 1e-10;

/// Fixed value everywhere.
pub struct Constant {
    pub value: f64,
}

impl Constant {
    /// Creates a constant source.
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl ScalarSource for Constant {
    fn sample(&self, _x: f64, _y: f64, _time: f64) -> f64 {
        self.value
    }
}

/// Reciprocal falloff from a focal point: `clamp(scale / distance, min, max)`.
///
/// Grows toward `max` near the focal point and decays toward `min` far away.
/// At the singularity the sample is `max`.
pub struct RadialFalloff {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub min: f64,
    pub max: f64,
}

impl RadialFalloff {
    /// Creates a reciprocal falloff around a focal point.
    pub fn new(x: f64, y: f64, scale: f64, min: f64, max: f64) -> Self {
        Self {
            x,
            y,
            scale,
            min,
            max,
        }
    }
}

impl ScalarSource for RadialFalloff {
    fn sample(&self, x: f64, y: f64, _time: f64) -> f64 {
        let dist = DVec2::new(x - self.x, y - self.y).length();
        if dist < SINGULARITY_EPS {
            return self.max;
        }
        (self.scale / dist).clamp(self.min, self.max)
    }
}

/// Linear fade from a focal point: `clamp(1 - distance/range, 0, 1)`.
///
/// 1 at the focal point, 0 at `range` and beyond. Suitable for palette
/// positions.
pub struct RadialFade {
    pub x: f64,
    pub y: f64,
    pub range: f64,
}

impl RadialFade {
    /// Creates a linear fade around a focal point.
    pub fn new(x: f64, y: f64, range: f64) -> Self {
        Self { x, y, range }
    }
}

impl ScalarSource for RadialFade {
    fn sample(&self, x: f64, y: f64, _time: f64) -> f64 {
        if self.range.abs() < SINGULARITY_EPS {
            return 0.0;
        }
        let dist = DVec2::new(x - self.x, y - self.y).length();
        (1.0 - dist / self.range).clamp(0.0, 1.0)
    }
}

/// Perlin noise mapped from [-1, 1] into [0, 1].
///
/// The time input becomes the noise z-axis, so shading drifts smoothly as
/// the simulation clock advances.
pub struct NoiseShade {
    noise: Perlin,
    scale: f64,
}

impl NoiseShade {
    /// Creates a Perlin-backed shade source.
    pub fn new(scale: f64, seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            scale,
        }
    }
}

impl ScalarSource for NoiseShade {
    fn sample(&self, x: f64, y: f64, time: f64) -> f64 {
        let v = self.noise.get([x * self.scale, y * self.scale, time]);
        ((v + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_ignores_position_and_time() {
        let source = Constant::new(3.0);
        assert_eq!(source.sample(0.0, 0.0, 0.0), 3.0);
        assert_eq!(source.sample(100.0, -50.0, 9.0), 3.0);
    }

    #[test]
    fn radial_falloff_clamps_near_the_focal_point() {
        // scale/dist = 750/1 = 750, far above max.
        let source = RadialFalloff::new(0.0, 0.0, 750.0, 1.0, 7.0);
        assert_eq!(source.sample(1.0, 0.0, 0.0), 7.0);
    }

    #[test]
    fn radial_falloff_clamps_far_away() {
        // scale/dist = 750/10000 = 0.075, far below min.
        let source = RadialFalloff::new(0.0, 0.0, 750.0, 1.0, 7.0);
        assert_eq!(source.sample(10_000.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn radial_falloff_at_singularity_returns_max() {
        let source = RadialFalloff::new(5.0, 5.0, 750.0, 1.0, 7.0);
        assert_eq!(source.sample(5.0, 5.0, 0.0), 7.0);
    }

    #[test]
    fn radial_falloff_is_monotonically_decreasing_with_distance() {
        let source = RadialFalloff::new(0.0, 0.0, 750.0, 1.0, 7.0);
        let mut prev = f64::INFINITY;
        for d in [110.0, 200.0, 400.0, 700.0] {
            let v = source.sample(d, 0.0, 0.0);
            assert!(v <= prev, "falloff increased at distance {d}");
            prev = v;
        }
    }

    #[test]
    fn radial_fade_is_one_at_center_and_zero_beyond_range() {
        let source = RadialFade::new(50.0, 50.0, 350.0);
        assert_eq!(source.sample(50.0, 50.0, 0.0), 1.0);
        assert_eq!(source.sample(50.0 + 350.0, 50.0, 0.0), 0.0);
        assert_eq!(source.sample(50.0 + 1000.0, 50.0, 0.0), 0.0);
    }

    #[test]
    fn radial_fade_halfway_is_half() {
        let source = RadialFade::new(0.0, 0.0, 100.0);
        let v = source.sample(50.0, 0.0, 0.0);
        assert!((v - 0.5).abs() < 1e-9, "expected 0.5, got {v}");
    }

    #[test]
    fn radial_fade_zero_range_is_zero() {
        let source = RadialFade::new(0.0, 0.0, 0.0);
        assert_eq!(source.sample(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn noise_shade_stays_in_unit_interval() {
        let source = NoiseShade::new(0.01, 42);
        for i in 0..50 {
            for j in 0..50 {
                let v = source.sample(i as f64 * 13.0, j as f64 * 7.0, 0.5);
                assert!((0.0..=1.0).contains(&v), "sample {v} out of [0, 1]");
            }
        }
    }

    #[test]
    fn noise_shade_same_seed_is_deterministic() {
        let a = NoiseShade::new(0.02, 7);
        let b = NoiseShade::new(0.02, 7);
        for i in 0..100 {
            let x = i as f64 * 3.7;
            assert_eq!(a.sample(x, x * 0.5, 1.0), b.sample(x, x * 0.5, 1.0));
        }
    }

    #[test]
    fn noise_shade_varies_with_time() {
        let source = NoiseShade::new(0.05, 42);
        let early = source.sample(10.0, 10.0, 0.0);
        let late = source.sample(10.0, 10.0, 50.0);
        assert_ne!(early, late);
    }

    #[test]
    fn sources_are_usable_as_trait_objects() {
        let sources: Vec<Box<dyn ScalarSource>> = vec![
            Box::new(Constant::new(1.0)),
            Box::new(RadialFalloff::new(0.0, 0.0, 750.0, 1.0, 7.0)),
            Box::new(RadialFade::new(0.0, 0.0, 350.0)),
            Box::new(NoiseShade::new(0.01, 1)),
        ];
        for source in &sources {
            let v = source.sample(10.0, 10.0, 0.0);
            assert!(v.is_finite());
        }
    }
}
