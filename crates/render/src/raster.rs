//! RGBA8 software rasterizer for the `Surface` trait.
//!
//! The buffer is row-major with four bytes per pixel and alpha always 255.
//! Every write is clipped to the surface: particles overshoot the
//! simulation bounds by design, and drawing off-surface must be silent.

use particle_field_core::{FieldError, Segment, Srgb, Surface};

/// Half-width of a stroked circle's ring, in pixels.
const STROKE_HALF_WIDTH: f64 = 0.5;

/// A CPU pixel-buffer drawing surface.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RasterSurface {
    /// Creates a black, opaque surface of the given dimensions.
    ///
    /// Returns `FieldError::InvalidDimensions` if either dimension is zero
    /// or the buffer size would overflow `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(FieldError::InvalidDimensions)?;
        let mut pixels = vec![0u8; len];
        for alpha in pixels.iter_mut().skip(3).step_by(4) {
            *alpha = 255;
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Read-only access to the RGBA8 buffer (row-major, alpha always 255).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the surface, returning the RGBA8 buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The RGBA bytes at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Writes one pixel, silently clipping out-of-surface coordinates.
    fn set_pixel(&mut self, x: i64, y: i64, rgb: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        self.pixels[idx] = rgb[0];
        self.pixels[idx + 1] = rgb[1];
        self.pixels[idx + 2] = rgb[2];
        self.pixels[idx + 3] = 255;
    }

    /// Visits every pixel whose center could lie within `radius + slack` of
    /// the circle center, calling `plot` with the center distance.
    fn scan_circle(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        slack: f64,
        mut plot: impl FnMut(&mut Self, i64, i64, f64),
    ) {
        if !(cx.is_finite() && cy.is_finite() && radius.is_finite()) || radius <= 0.0 {
            return;
        }
        let reach = radius + slack;
        let x_min = (cx - reach).floor() as i64;
        let x_max = (cx + reach).ceil() as i64;
        let y_min = (cy - reach).floor() as i64;
        let y_max = (cy + reach).ceil() as i64;
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                plot(self, x, y, dist);
            }
        }
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn clear(&mut self, color: Srgb) {
        let [r, g, b] = color.to_bytes();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[r, g, b, 255]);
        }
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Srgb) {
        let rgb = color.to_bytes();
        self.scan_circle(cx, cy, radius, 0.0, |surface, x, y, dist| {
            if dist <= radius {
                surface.set_pixel(x, y, rgb);
            }
        });
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Srgb) {
        let rgb = color.to_bytes();
        self.scan_circle(cx, cy, radius, STROKE_HALF_WIDTH, |surface, x, y, dist| {
            if (dist - radius).abs() <= STROKE_HALF_WIDTH {
                surface.set_pixel(x, y, rgb);
            }
        });
    }

    fn stroke_segments(&mut self, color: Srgb, segments: &[Segment]) {
        let rgb = color.to_bytes();
        for segment in segments {
            let Segment { x0, y0, x1, y1 } = *segment;
            if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
                continue;
            }
            // DDA walk: one sample per pixel along the dominant axis.
            let dx = x1 - x0;
            let dy = y1 - y0;
            let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
            for i in 0..=steps {
                let t = i as f64 / steps as f64;
                let x = (x0 + dx * t).round() as i64;
                let y = (y0 + dy * t).round() as i64;
                self.set_pixel(x, y, rgb);
            }
        }
    }
}
