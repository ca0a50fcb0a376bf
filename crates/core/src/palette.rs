//! Color ramps for mapping scalars (distances, source samples) to colors.
//!
//! A [`Palette`] stores stops in OKLCh and interpolates between them, using
//! shortest-arc hue wrapping so gradients never take unexpected detours
//! around the color wheel. The particle renderer feeds it values like
//! `1 - distance/range` to fade proximity lines with distance.

use crate::color::{oklch_to_srgb, srgb_to_oklch, OkLch, Srgb};
use crate::error::FieldError;

/// Names of the built-in palettes, in the order `list_names` reports them.
const PALETTE_NAMES: &[&str] = &["graphite", "ocean", "neon", "ember"];

/// A palette of colors stored in OKLCh, sampled by interpolation.
///
/// Stops are evenly spaced along `t`: `sample(0.0)` returns the first color,
/// `sample(1.0)` the last.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<OkLch>,
}

impl Palette {
    /// Creates a palette from OKLCh stops. Requires at least one color.
    pub fn new(colors: Vec<OkLch>) -> Result<Self, FieldError> {
        if colors.is_empty() {
            return Err(FieldError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing hex color strings.
    ///
    /// Each string can be "#rrggbb" or "rrggbb" (case insensitive).
    pub fn from_hex(hexes: &[&str]) -> Result<Self, FieldError> {
        if hexes.is_empty() {
            return Err(FieldError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        let colors: Result<Vec<OkLch>, FieldError> = hexes
            .iter()
            .map(|h| Srgb::from_hex(h).map(srgb_to_oklch))
            .collect();
        Self::new(colors?)
    }

    /// Looks up a built-in palette by name.
    ///
    /// Returns `FieldError::UnknownPalette` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        match name {
            "graphite" => Ok(Self::graphite()),
            "ocean" => Ok(Self::ocean()),
            "neon" => Ok(Self::neon()),
            "ember" => Ok(Self::ember()),
            _ => Err(FieldError::UnknownPalette(name.to_string())),
        }
    }

    /// Returns the names of all built-in palettes.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    /// Number of color stops.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Samples the palette at `t` in [0, 1].
    ///
    /// Interpolates in OKLCh with shortest-arc hue wrapping. `t` is clamped,
    /// NaN maps to 0. A single-stop palette returns its color for any `t`.
    pub fn sample(&self, t: f64) -> Srgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.colors.len();

        if n == 1 {
            return oklch_to_srgb(self.colors[0]);
        }

        let scaled = t * (n - 1) as f64;
        let idx = (scaled as usize).min(n - 2);
        let frac = scaled - idx as f64;

        let c0 = &self.colors[idx];
        let c1 = &self.colors[idx + 1];

        let l = c0.l + frac * (c1.l - c0.l);
        let c = c0.c + frac * (c1.c - c0.c);
        let h = interpolate_hue(c0.h, c1.h, frac);

        oklch_to_srgb(OkLch { l, c, h })
    }

    // -- Built-in palettes --

    /// Dark grays to white; on a dark background, nearby lines glow
    /// brighter than distant ones.
    pub fn graphite() -> Self {
        Self::from_hex(&["#000000", "#353535", "#9a9a9a", "#ffffff"])
            .expect("graphite palette hex values are valid")
    }

    /// Deep blues to pale cyan.
    pub fn ocean() -> Self {
        Self::from_hex(&["#03045e", "#0077b6", "#00b4d8", "#90e0ef", "#caf0f8"])
            .expect("ocean palette hex values are valid")
    }

    /// Saturated magenta, cyan, green.
    pub fn neon() -> Self {
        Self::from_hex(&["#ff00ff", "#00ffff", "#00ff00"])
            .expect("neon palette hex values are valid")
    }

    /// Dark reds through orange to gold.
    pub fn ember() -> Self {
        Self::from_hex(&["#4a0000", "#9a1c00", "#e25822", "#ffb347"])
            .expect("ember palette hex values are valid")
    }
}

/// Interpolates hue along the shortest arc, handling wraparound at 360.
fn interpolate_hue(h0: f64, h1: f64, t: f64) -> f64 {
    let delta = match h1 - h0 {
        d if d > 180.0 => d - 360.0,
        d if d < -180.0 => d + 360.0,
        d => d,
    };
    (h0 + t * delta).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-5;

    fn approx_color(a: Srgb, b: Srgb) -> bool {
        (a.r - b.r).abs() < EPSILON && (a.g - b.g).abs() < EPSILON && (a.b - b.b).abs() < EPSILON
    }

    #[test]
    fn new_with_empty_vec_returns_error() {
        assert!(Palette::new(vec![]).is_err());
    }

    #[test]
    fn from_hex_with_invalid_hex_returns_error() {
        assert!(Palette::from_hex(&["#ff0000", "#zzzzzz"]).is_err());
    }

    #[test]
    fn from_hex_with_empty_slice_returns_error() {
        assert!(Palette::from_hex(&[]).is_err());
    }

    #[test]
    fn sample_at_zero_returns_first_color() {
        let palette = Palette::from_hex(&["#ff0000", "#0000ff"]).unwrap();
        let expected = oklch_to_srgb(srgb_to_oklch(Srgb::from_hex("#ff0000").unwrap()));
        assert!(approx_color(palette.sample(0.0), expected));
    }

    #[test]
    fn sample_at_one_returns_last_color() {
        let palette = Palette::from_hex(&["#ff0000", "#0000ff"]).unwrap();
        let expected = oklch_to_srgb(srgb_to_oklch(Srgb::from_hex("#0000ff").unwrap()));
        assert!(approx_color(palette.sample(1.0), expected));
    }

    #[test]
    fn sample_clamps_out_of_range_t() {
        let palette = Palette::graphite();
        assert_eq!(palette.sample(-1.0).to_hex(), palette.sample(0.0).to_hex());
        assert_eq!(palette.sample(2.0).to_hex(), palette.sample(1.0).to_hex());
    }

    #[test]
    fn sample_nan_maps_to_first_color() {
        let palette = Palette::graphite();
        assert_eq!(
            palette.sample(f64::NAN).to_hex(),
            palette.sample(0.0).to_hex()
        );
    }

    #[test]
    fn single_color_palette_is_constant() {
        let palette = Palette::from_hex(&["#123456"]).unwrap();
        let a = palette.sample(0.0);
        let b = palette.sample(0.5);
        let c = palette.sample(1.0);
        assert!(approx_color(a, b));
        assert!(approx_color(b, c));
    }

    #[test]
    fn graphite_fades_monotonically_toward_white() {
        let palette = Palette::graphite();
        let mut prev = -1.0;
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let s = palette.sample(t);
            let brightness = s.r + s.g + s.b;
            assert!(
                brightness >= prev - EPSILON,
                "brightness decreased at t={t}: {brightness} < {prev}"
            );
            prev = brightness;
        }
    }

    #[test]
    fn from_name_finds_every_listed_palette() {
        for name in Palette::list_names() {
            assert!(
                Palette::from_name(name).is_ok(),
                "listed palette {name} did not resolve"
            );
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        assert!(matches!(
            Palette::from_name("sunset"),
            Err(FieldError::UnknownPalette(_))
        ));
    }

    #[test]
    fn hue_interpolation_takes_shortest_arc() {
        // 350 -> 10 should pass through 0, not 180.
        let mid = interpolate_hue(350.0, 10.0, 0.5);
        assert!(
            mid < 20.0 || mid > 340.0,
            "midpoint hue {mid} took the long way around"
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sample_output_is_always_in_gamut(t in -2.0_f64..2.0) {
                for name in Palette::list_names() {
                    let s = Palette::from_name(name).unwrap().sample(t);
                    prop_assert!((0.0..=1.0).contains(&s.r));
                    prop_assert!((0.0..=1.0).contains(&s.g));
                    prop_assert!((0.0..=1.0).contains(&s.b));
                }
            }

            #[test]
            fn interpolated_hue_is_normalized(
                h0 in 0.0_f64..360.0,
                h1 in 0.0_f64..360.0,
                t in 0.0_f64..=1.0,
            ) {
                let h = interpolate_hue(h0, h1, t);
                prop_assert!((0.0..360.0).contains(&h));
            }
        }
    }
}
