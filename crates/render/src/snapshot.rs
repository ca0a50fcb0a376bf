//! PNG snapshots of a [`RasterSurface`].
//!
//! Feature-gated behind `png` (default on) so headless consumers can use
//! the rasterizer without the `image` crate.

use std::path::Path;

use particle_field_core::FieldError;

use crate::raster::RasterSurface;

/// Writes the surface's pixel buffer as a PNG image.
///
/// Returns `FieldError::InvalidDimensions` if the dimensions overflow
/// `u32`, or `FieldError::Io` on write failure.
pub fn write_png(surface: &RasterSurface, path: &Path) -> Result<(), FieldError> {
    use particle_field_core::Surface;

    let w = u32::try_from(surface.width()).map_err(|_| FieldError::InvalidDimensions)?;
    let h = u32::try_from(surface.height()).map_err(|_| FieldError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, surface.pixels().to_vec())
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FieldError::Io(e.to_string()))
}
